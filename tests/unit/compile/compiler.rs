use super::*;
use crate::blend::op::{BlendCoefficient, CoefficientPair};
use crate::blend::resolve::BlendFunction;
use crate::compile::opts::{AlphaOperation, BlendRound};
use crate::foundation::core::Rect;
use crate::foundation::error::{BlendError, BlitError, ScaleError};
use crate::request::model::{ColorFormat, ImageDesc, ImageSource, MaskFormat, Repeat};
use crate::transform::rotation::{Addressing, Rotation};
use crate::transform::scale::{FixedScale, ScaleFactor, ScaleMode};

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

fn blit(op: BlitOperator, global_alpha: u8) -> BlitRequest {
    let mut req = BlitRequest::new(op, image(64, 64));
    req.global_alpha = global_alpha;
    req.src = Some(SourceDesc {
        image: image(32, 32),
        scale: None,
        repeat: Repeat::None,
    });
    req
}

fn percent(scale_w: u32, scale_h: u32) -> ScaleRequest {
    ScaleRequest {
        mode: ScaleMode::Bilinear,
        factor: ScaleFactor::Percentage { scale_w, scale_h },
    }
}

#[test]
fn opaque_src_over_is_single_pass() {
    let cfg = compile_default(&blit(BlitOperator::SrcOver, 255)).unwrap();
    assert!(!cfg.requires_two_pass());
    assert_eq!(cfg.prepass, None);
    assert_eq!(cfg.blend.src_coeff(), Some(BlendCoefficient::One));
    assert_eq!(cfg.blend.dst_coeff(), Some(BlendCoefficient::SrcAlpha));
    assert!(cfg.blend.dst_invert());
    assert!(!cfg.is_solid_fill());
}

#[test]
fn translucent_xor_carries_the_global_alpha_prepass() {
    let cfg = compile_default(&blit(BlitOperator::Xor, 0x80)).unwrap();
    assert!(cfg.requires_two_pass());
    assert_eq!(
        cfg.prepass,
        Some(CoefficientPair::new(
            false,
            BlendCoefficient::GlobalAlpha,
            false,
            BlendCoefficient::Zero
        ))
    );
    assert_eq!(cfg.global_alpha, 0x80);
}

#[test]
fn translucent_src_over_folds_global_alpha() {
    let cfg = compile_default(&blit(BlitOperator::SrcOver, 0x40)).unwrap();
    assert!(!cfg.requires_two_pass());
    assert_eq!(cfg.blend.src_coeff(), Some(BlendCoefficient::GlobalAlpha));
}

#[test]
fn resolver_errors_propagate_unchanged() {
    let err = compile_default(&blit(BlitOperator::UserCoeff, 255)).unwrap_err();
    assert!(matches!(
        err,
        BlitError::Blend(BlendError::NotSupported(BlitOperator::UserCoeff))
    ));
}

#[test]
fn scale_errors_propagate_unchanged() {
    let mut req = blit(BlitOperator::Src, 255);
    if let Some(src) = req.src.as_mut() {
        src.scale = Some(percent(0, 100));
    }
    let err = compile_default(&req).unwrap_err();
    assert!(matches!(err, BlitError::Scale(ScaleError::DivideByZero)));
}

#[test]
fn source_and_mask_scales_are_encoded_independently() {
    let mut req = blit(BlitOperator::Src, 255);
    if let Some(src) = req.src.as_mut() {
        src.scale = Some(percent(200, 50));
    }
    req.msk = Some(MaskDesc {
        addr: 0x5000_0000,
        stride: 32,
        format: MaskFormat::Bit8,
        order: Default::default(),
        rect: Rect::new(0, 0, 32, 32),
        scale: Some(percent(100, 400)),
        repeat: Repeat::Reflect,
    });

    let cfg = compile_default(&req).unwrap();
    let src_scale = cfg.src.and_then(|s| s.scale).unwrap();
    assert_eq!(src_scale.mode, ScaleMode::Bilinear);
    assert_eq!(
        src_scale.factor,
        FixedScale {
            x: 0x0000_8000,
            y: 0x0002_0000
        }
    );

    let msk = cfg.msk.unwrap();
    assert_eq!(
        msk.scale.unwrap().factor,
        FixedScale {
            x: 0x0001_0000,
            y: 0x0000_4000
        }
    );
    assert_eq!(msk.repeat, Repeat::Reflect);
}

#[test]
fn unscaled_planes_have_no_scale() {
    let cfg = compile_default(&blit(BlitOperator::Src, 255)).unwrap();
    assert_eq!(cfg.src.unwrap().scale, None);
    assert_eq!(cfg.msk, None);
}

#[test]
fn rotation_is_mapped_onto_addressing() {
    let mut req = blit(BlitOperator::Src, 255);
    req.rotation = Rotation::Rot90;
    let cfg = compile_default(&req).unwrap();
    assert!(cfg.addressing.rotate90);
    assert_eq!(cfg.addressing.dir_x, Addressing::Reverse);
    assert_eq!(cfg.addressing.dir_y, Addressing::Reverse);
}

#[test]
fn solid_fill_bypasses_blending_and_keeps_the_color() {
    let mut req = BlitRequest::new(BlitOperator::SolidFill, image(16, 16));
    req.fill_color = 0xff00_ff00;
    req.global_alpha = 0x10;
    let cfg = compile_default(&req).unwrap();
    assert!(cfg.is_solid_fill());
    assert_eq!(cfg.fill_color, Some(0xff00_ff00));
    assert_eq!(cfg.blend.function, BlendFunction::Bypass);
    assert!(!cfg.requires_two_pass());
}

#[test]
fn clear_compiles_to_a_zero_fill_ignoring_the_request_color() {
    let mut req = blit(BlitOperator::Clear, 0x40);
    req.fill_color = 0xffff_ffff;
    let cfg = compile_default(&req).unwrap();
    assert!(cfg.is_solid_fill());
    assert_eq!(cfg.fill_color, Some(0));
    assert_eq!(cfg.blend.function, BlendFunction::Bypass);
    assert!(!cfg.requires_two_pass());
}

#[test]
fn options_flow_into_the_config() {
    let opts = CompileOpts {
        alpha_operation: AlphaOperation::Global,
        a8_rgb_color: 0x00ab_cdef,
        round: crate::compile::opts::RoundModes {
            blend: BlendRound::Round3,
            ..Default::default()
        },
        ..Default::default()
    };
    let cfg = compile(&blit(BlitOperator::SrcOver, 255), &opts).unwrap();
    assert_eq!(cfg.alpha_operation, AlphaOperation::Global);
    assert_eq!(cfg.a8_rgb_color, 0x00ab_cdef);
    assert_eq!(cfg.round.blend, BlendRound::Round3);
}

#[test]
fn compiling_twice_gives_equal_configs() {
    let mut req = blit(BlitOperator::DisjXor, 0x33);
    req.rotation = Rotation::Rot270;
    req.dither = true;
    let opts = CompileOpts::default();
    assert_eq!(compile(&req, &opts).unwrap(), compile(&req, &opts).unwrap());
}
