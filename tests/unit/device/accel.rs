use super::*;
use crate::blend::op::BlitOperator;
use crate::compile::compiler::compile_default;
use crate::device::io::MemRegisters;
use crate::foundation::core::Rect;
use crate::request::model::{BlitRequest, ColorFormat, ImageDesc, ImageSource, Repeat, SourceDesc};
use crate::transform::rotation::Rotation;

fn image(w: u32, h: u32) -> ImageDesc {
    ImageDesc {
        source: ImageSource::Memory,
        addr: 0x4000_0000,
        stride: w * 4,
        format: ColorFormat::Argb8888,
        order: Default::default(),
        rect: Rect::new(0, 0, w, h),
    }
}

fn request(op: BlitOperator, global_alpha: u8) -> BlitRequest {
    let mut req = BlitRequest::new(op, image(64, 64));
    req.global_alpha = global_alpha;
    req.src = Some(SourceDesc {
        image: image(64, 64),
        scale: None,
        repeat: Repeat::None,
    });
    req
}

fn accel() -> Accelerator<MemRegisters> {
    Accelerator::new(MemRegisters::new())
}

#[test]
fn reset_clears_sfrs_then_the_blend_function() {
    let mut dev = accel();
    dev.reset().unwrap();
    assert_eq!(
        dev.io().writes(),
        &[(regs::SOFT_RESET, regs::SFR_CLEAR), (regs::BLEND_FUNCTION, 0)]
    );
}

#[test]
fn irq_lifecycle() {
    let mut dev = accel();
    dev.enable_irq().unwrap();
    assert_eq!(dev.io().value(regs::INTEN), regs::BLIT_INT_ENABLE);
    assert!(!dev.is_blit_done().unwrap());

    dev.io_mut().preset(regs::INTC_PEND, regs::BLIT_INT_FLAG);
    assert!(dev.is_blit_done().unwrap());

    dev.clear_irq().unwrap();
    dev.disable_irq().unwrap();
    assert_eq!(dev.io().value(regs::INTEN), 0);
    assert_eq!(
        dev.io().writes_to(regs::INTC_PEND).collect::<Vec<_>>(),
        vec![regs::BLIT_INT_FLAG]
    );
}

#[test]
fn fifo_status_is_read_twice() {
    let mut dev = accel();
    dev.io_mut().preset(regs::FIFO_STAT, regs::BLIT_FINISHED);
    assert!(dev.blit_done_status().unwrap());
    assert_eq!(dev.io().reads(), &[regs::FIFO_STAT, regs::FIFO_STAT]);
}

#[test]
fn burst_length_preserves_other_axi_bits() {
    let mut dev = accel();
    dev.io_mut().preset(regs::AXI_MODE, 0x0000_00f0 | regs::MAX_BURST_LEN_MASK);
    dev.set_max_burst_length(MaxBurstLength::Burst4).unwrap();
    assert_eq!(dev.io().value(regs::AXI_MODE), 0x0000_00f0 | (1 << 24));
}

#[test]
fn start_blit_writes_the_start_bit() {
    let mut dev = accel();
    dev.start_blit().unwrap();
    assert_eq!(dev.io().writes(), &[(regs::BITBLT_START, regs::START_BITBLT)]);
}

#[test]
fn translucent_src_over_programs_alpha_and_blend() {
    let cfg = compile_default(&request(BlitOperator::SrcOver, 0x80)).unwrap();
    let mut dev = accel();
    dev.reset().unwrap();
    dev.program(&cfg).unwrap();

    let io = dev.io();
    assert_eq!(io.value(regs::ALPHA), 0x8080_8080);
    assert_ne!(io.value(regs::BITBLT_COMMAND) & regs::ALPHA_BLEND_MODE, 0);
    // GlobalAlpha source, inverted SrcAlpha destination.
    let blend = io.value(regs::BLEND_FUNCTION);
    assert_eq!(blend & 0xf, 6);
    assert_eq!((blend >> regs::DST_COEFF_SHIFT) & 0xf, 2);
    assert_ne!(blend & regs::INV_DST_COEFF, 0);
    assert_eq!(io.value(regs::ROUND_MODE), 1 << regs::PREMULT_ROUND_SHIFT);
}

#[test]
fn round_mode_is_merged_not_overwritten() {
    let cfg = compile_default(&request(BlitOperator::Src, 255)).unwrap();
    let mut dev = accel();
    dev.io_mut().preset(regs::ROUND_MODE, 0xabcd_0000 | 0x3);
    dev.program(&cfg).unwrap();
    assert_eq!(
        dev.io().value(regs::ROUND_MODE),
        0xabcd_0000 | (1 << regs::PREMULT_ROUND_SHIFT)
    );
}

#[test]
fn rotation_touches_source_mask_rotate_and_destination_direction() {
    let mut req = request(BlitOperator::Src, 255);
    req.rotation = Rotation::Rot90;
    let cfg = compile_default(&req).unwrap();

    let mut dev = accel();
    dev.program(&cfg).unwrap();
    let io = dev.io();
    assert_eq!(
        io.value(regs::ROTATE),
        regs::SRC_ROTATE_90 | regs::MSK_ROTATE_90
    );
    assert_eq!(
        io.value(regs::DST_PAT_DIRECT),
        regs::DST_X_DIR_NEGATIVE | regs::DST_Y_DIR_NEGATIVE
    );
    assert_eq!(io.writes_to(regs::SRC_MSK_DIRECT).count(), 0);
}

#[test]
fn unrotated_blit_leaves_rotate_and_direction_alone() {
    let cfg = compile_default(&request(BlitOperator::Src, 255)).unwrap();
    let mut dev = accel();
    dev.program(&cfg).unwrap();
    assert_eq!(dev.io().writes_to(regs::ROTATE).count(), 0);
    assert_eq!(dev.io().writes_to(regs::DST_PAT_DIRECT).count(), 0);
}

#[test]
fn solid_fill_programs_only_fill_destination_and_clip() {
    let mut req = BlitRequest::new(BlitOperator::SolidFill, image(32, 16));
    req.fill_color = 0xff12_3456;
    req.clip = Some(Rect::new(2, 2, 30, 14));
    let cfg = compile_default(&req).unwrap();

    let mut dev = accel();
    dev.program(&cfg).unwrap();
    let io = dev.io();
    assert_eq!(io.value(regs::BITBLT_COMMAND), regs::SOLID_FILL | regs::ENABLE_CW);
    assert_eq!(io.value(regs::SF_COLOR), 0xff12_3456);
    assert_eq!(io.value(regs::CW_RIGHT_BOTTOM), (14 << 16) | 30);
    assert_eq!(io.writes_to(regs::BLEND_FUNCTION).count(), 0);
    assert_eq!(io.writes_to(regs::ALPHA).count(), 0);
    assert_eq!(io.writes_to(regs::SRC_SELECT).count(), 0);
}

#[test]
fn clear_is_programmed_as_a_transparent_fill() {
    let cfg = compile_default(&request(BlitOperator::Clear, 0x40)).unwrap();
    let mut dev = accel();
    dev.reset().unwrap();
    dev.io_mut().clear_log();
    dev.program(&cfg).unwrap();

    let io = dev.io();
    assert_eq!(io.value(regs::BITBLT_COMMAND), regs::SOLID_FILL);
    assert_eq!(io.writes_to(regs::SF_COLOR).collect::<Vec<_>>(), [0]);
    assert_eq!(io.value(regs::DST_BASE_ADDR), 0x4000_0000);
    for reg in [
        regs::SRC_SELECT,
        regs::SRC_BASE_ADDR,
        regs::SRC_STRIDE,
        regs::BLEND_FUNCTION,
        regs::ROUND_MODE,
        regs::ALPHA,
    ] {
        assert_eq!(io.writes_to(reg).count(), 0, "0x{reg:04x}");
    }
}

#[test]
fn register_errors_abort_programming() {
    struct Broken;
    impl RegisterIo for Broken {
        fn read_register(&mut self, _offset: u32) -> BlitResult<u32> {
            Err(crate::foundation::error::BlitError::device("bus fault"))
        }
        fn write_register(&mut self, _offset: u32, _value: u32) -> BlitResult<()> {
            Err(crate::foundation::error::BlitError::device("bus fault"))
        }
    }

    let cfg = compile_default(&request(BlitOperator::SrcOver, 255)).unwrap();
    let err = Accelerator::new(Broken).program(&cfg).unwrap_err();
    assert_eq!(err.to_string(), "device error: bus fault");
}

#[test]
fn dump_covers_every_window_in_rows_of_four() {
    let mut dev = accel();
    dev.io_mut().preset(0x0104, 0x1234);
    let rows = dev.dump_regs().unwrap();

    assert_eq!(rows.len(), 35);
    assert_eq!(rows[0].offset, 0x0000);
    assert_eq!(rows.last().map(|r| r.offset), Some(0x0700));
    let commands = rows.iter().find(|r| r.offset == 0x0100).unwrap();
    assert_eq!(commands.words, [0, 0x1234, 0, 0]);
    assert!(dev.io().writes().is_empty());
}
