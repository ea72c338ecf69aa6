//! Pure lowering of [`BlitConfig`] parts into register words.
//!
//! Nothing here touches a device; [`crate::Accelerator::program`] issues the results.

use crate::blend::resolve::{BlendFunction, ResolvedBlend};
use crate::compile::opts::{AlphaOperation, MaskOperation, RoundModes};
use crate::compile::plan::{BlitConfig, MaskPlane, PlaneScale, SourcePlane};
use crate::device::regs;
use crate::foundation::core::{Rect, pack_offset, replicate_alpha};
use crate::request::model::{ChannelOrder, ColorFormat, ColorKey, ImageDesc, ImageSource, Repeat};
use crate::transform::rotation::{Addressing, AddressingPlan};
use crate::transform::scale::ScaleMode;
use smallvec::SmallVec;

/// One register write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Register offset.
    pub offset: u32,
    /// Value written.
    pub value: u32,
}

impl RegisterWrite {
    const fn new(offset: u32, value: u32) -> Self {
        Self { offset, value }
    }
}

/// Ordered batch of plain register writes.
pub type RegisterWrites = SmallVec<[RegisterWrite; 16]>;

/// Blend-function word, or `None` when the blend registers must stay untouched.
pub fn blend_function_word(blend: &ResolvedBlend, alpha_op: AlphaOperation) -> Option<u32> {
    match blend.function {
        BlendFunction::Bypass => None,
        BlendFunction::Darken => Some(regs::DARKEN),
        BlendFunction::Lighten => Some(regs::LIGHTEN),
        BlendFunction::Coefficients(pair) => {
            let alpha_op = alpha_op as u32;
            let mut word = pair.src_coeff.code() << regs::SRC_COEFF_SHIFT;
            word |= alpha_op << regs::SRC_COEFF_SA_SHIFT;
            word |= alpha_op << regs::SRC_COEFF_DA_SHIFT;
            if pair.invert_src {
                word |= regs::INV_SRC_COEFF;
            }

            word |= pair.dst_coeff.code() << regs::DST_COEFF_SHIFT;
            word |= alpha_op << regs::DST_COEFF_DA_SHIFT;
            word |= alpha_op << regs::DST_COEFF_SA_SHIFT;
            if pair.invert_dst {
                word |= regs::INV_DST_COEFF;
            }
            Some(word)
        }
    }
}

/// Merge the rounding modes into the current round-mode register value.
pub fn merge_round_mode(current: u32, round: RoundModes) -> u32 {
    let mut word = current & !(regs::PREMULT_ROUND_MASK | regs::BLEND_ROUND_MASK);
    word |= (round.premult as u32) << regs::PREMULT_ROUND_SHIFT;
    word |= (round.blend as u32) << regs::BLEND_ROUND_SHIFT;
    word
}

/// Command bits to OR into the bitblt command register.
///
/// Solid fill replaces the whole command word, see [`crate::Accelerator::program`].
pub fn command_bits(cfg: &BlitConfig) -> u32 {
    let mut bits = 0;
    if cfg.msk.is_some() {
        bits |= regs::ENABLE_NORMAL_MSK;
    }

    let premult = cfg.premultiply;
    if premult.all {
        bits |= regs::PREMULT_ALL;
    }
    if premult.src {
        bits |= regs::SRC_PREMULT;
    }
    if premult.dst_read {
        bits |= regs::DST_RD_PREMULT;
    }
    if premult.dst_write {
        bits |= regs::DST_WR_DEPREMULT;
    }

    bits |= match cfg.color_key {
        ColorKey::Opaque => 0,
        ColorKey::Transparent { .. } => regs::TRANSP_MODE,
        ColorKey::Bluescreen { .. } => regs::BLUSCR_MODE,
    };

    if cfg.clip.is_some() {
        bits |= regs::ENABLE_CW;
    }
    if cfg.dither {
        bits |= regs::ENABLE_DITHER;
    }
    if cfg.blend.is_blending() {
        bits |= regs::ALPHA_BLEND_MODE;
    }
    bits
}

/// Color-mode word of an image plane.
pub fn color_mode_word(image: &ImageDesc) -> u32 {
    let order = match image.order {
        ChannelOrder::Rgb { order } => (order as u32) << regs::RGB_ORDER_SHIFT,
        ChannelOrder::YCbCr1Plane { order } => (order as u32) << regs::YCBCR_ORDER_SHIFT,
        ChannelOrder::YCbCr2Plane { order, .. } => {
            ((order as u32) << regs::YCBCR_ORDER_SHIFT) | regs::YCBCR_2PLANE
        }
    };
    order | ((image.format as u32) << regs::COLOR_FORMAT_SHIFT)
}

/// Mask-mode word. Only 16 and 32-bit masks carry the mask type.
pub fn mask_mode_word(mask: &MaskPlane, mask_op: MaskOperation) -> u32 {
    let mut word = (mask.order as u32) << regs::MSK_ORDER_SHIFT;
    word |= (mask.format as u32) << regs::MSK_FORMAT_SHIFT;
    if mask.format.is_color_mask() {
        word |= match mask_op {
            MaskOperation::Alpha => regs::MSK_TYPE_ALPHA,
            MaskOperation::Argb => regs::MSK_TYPE_ARGB,
            MaskOperation::Mixed => regs::MSK_TYPE_MIXED,
        };
    }
    word
}

/// Repeat-mode word.
pub fn repeat_word(repeat: Repeat) -> u32 {
    match repeat {
        Repeat::None => regs::REPEAT_NONE,
        Repeat::Normal => regs::REPEAT_NORMAL,
        Repeat::Pad { .. } => regs::REPEAT_PAD,
        Repeat::Reflect => regs::REPEAT_REFLECT,
        Repeat::Clamp => regs::REPEAT_CLAMP,
    }
}

/// Rotate bits: the source and mask planes rotate, the destination never does.
pub fn rotate_bits(plan: AddressingPlan) -> u32 {
    if plan.rotate90 {
        regs::SRC_ROTATE_90 | regs::MSK_ROTATE_90
    } else {
        0
    }
}

/// Direction bits of the destination plane.
pub fn direction_bits(plan: AddressingPlan) -> u32 {
    let mut bits = 0;
    if plan.dir_x == Addressing::Reverse {
        bits |= regs::DST_X_DIR_NEGATIVE;
    }
    if plan.dir_y == Addressing::Reverse {
        bits |= regs::DST_Y_DIR_NEGATIVE;
    }
    bits
}

fn image_type(source: ImageSource) -> u32 {
    match source {
        ImageSource::Memory => regs::IMAGE_TYPE_MEMORY,
        ImageSource::FgColor => regs::IMAGE_TYPE_FGCOLOR,
        ImageSource::BgColor => regs::IMAGE_TYPE_BGCOLOR,
    }
}

fn scale_mode(mode: ScaleMode) -> u32 {
    match mode {
        ScaleMode::Nearest => regs::SCALE_MODE_NEAREST,
        ScaleMode::Bilinear => regs::SCALE_MODE_BILINEAR,
    }
}

struct ImageRegs {
    select: u32,
    base: u32,
    stride: u32,
    color_mode: u32,
    left_top: u32,
    right_bottom: u32,
    plane2: u32,
    a8_rgb: u32,
}

const SRC_REGS: ImageRegs = ImageRegs {
    select: regs::SRC_SELECT,
    base: regs::SRC_BASE_ADDR,
    stride: regs::SRC_STRIDE,
    color_mode: regs::SRC_COLOR_MODE,
    left_top: regs::SRC_LEFT_TOP,
    right_bottom: regs::SRC_RIGHT_BOTTOM,
    plane2: regs::SRC_PLANE2_BASE_ADDR,
    a8_rgb: regs::SRC_A8_RGB_EXT,
};

const DST_REGS: ImageRegs = ImageRegs {
    select: regs::DST_SELECT,
    base: regs::DST_BASE_ADDR,
    stride: regs::DST_STRIDE,
    color_mode: regs::DST_COLOR_MODE,
    left_top: regs::DST_LEFT_TOP,
    right_bottom: regs::DST_RIGHT_BOTTOM,
    plane2: regs::DST_PLANE2_BASE_ADDR,
    a8_rgb: regs::DST_A8_RGB_EXT,
};

fn push_rect(out: &mut RegisterWrites, left_top: u32, right_bottom: u32, rect: Rect) {
    out.push(RegisterWrite::new(left_top, pack_offset(rect.x1, rect.y1)));
    out.push(RegisterWrite::new(right_bottom, pack_offset(rect.x2, rect.y2)));
}

fn push_image(out: &mut RegisterWrites, r: &ImageRegs, image: &ImageDesc, a8_rgb_color: u32) {
    out.push(RegisterWrite::new(r.select, image_type(image.source)));
    if image.source == ImageSource::Memory {
        out.push(RegisterWrite::new(r.base, image.addr));
        out.push(RegisterWrite::new(r.stride, regs::stride(image.stride)));
        match image.order {
            ChannelOrder::Rgb { .. } if image.format == ColorFormat::A8 => {
                out.push(RegisterWrite::new(r.a8_rgb, a8_rgb_color));
            }
            ChannelOrder::YCbCr2Plane { plane2_addr, .. } => {
                out.push(RegisterWrite::new(r.plane2, plane2_addr));
            }
            _ => {}
        }
        out.push(RegisterWrite::new(r.color_mode, color_mode_word(image)));
    }
    push_rect(out, r.left_top, r.right_bottom, image.rect);
}

/// Writes describing the source plane: select, image, rect, repeat, scaling.
pub fn source_writes(src: &SourcePlane, a8_rgb_color: u32) -> RegisterWrites {
    let mut out = RegisterWrites::new();
    push_image(&mut out, &SRC_REGS, &src.image, a8_rgb_color);

    out.push(RegisterWrite::new(regs::SRC_REPEAT_MODE, repeat_word(src.repeat)));
    if let Repeat::Pad { color } = src.repeat {
        out.push(RegisterWrite::new(regs::SRC_PAD_VALUE, color));
    }

    if let Some(scale) = src.scale {
        push_scale(
            &mut out,
            [regs::SRC_SCALE_CTRL, regs::SRC_XSCALE, regs::SRC_YSCALE],
            scale,
        );
    }
    out
}

/// Writes describing the destination plane: select, image, rect.
pub fn destination_writes(dst: &ImageDesc, a8_rgb_color: u32) -> RegisterWrites {
    let mut out = RegisterWrites::new();
    push_image(&mut out, &DST_REGS, dst, a8_rgb_color);
    out
}

/// Writes describing the mask plane. `Repeat::None` leaves the repeat register untouched.
pub fn mask_writes(msk: &MaskPlane, mask_op: MaskOperation) -> RegisterWrites {
    let mut out = RegisterWrites::new();
    out.push(RegisterWrite::new(regs::MSK_BASE_ADDR, msk.addr));
    out.push(RegisterWrite::new(regs::MSK_STRIDE, regs::stride(msk.stride)));
    out.push(RegisterWrite::new(regs::MSK_MODE, mask_mode_word(msk, mask_op)));
    push_rect(&mut out, regs::MSK_LEFT_TOP, regs::MSK_RIGHT_BOTTOM, msk.rect);

    if msk.repeat != Repeat::None {
        out.push(RegisterWrite::new(regs::MSK_REPEAT_MODE, repeat_word(msk.repeat)));
        if let Repeat::Pad { color } = msk.repeat {
            out.push(RegisterWrite::new(regs::MSK_PAD_VALUE, color));
        }
    }

    if let Some(scale) = msk.scale {
        push_scale(
            &mut out,
            [regs::MSK_SCALE_CTRL, regs::MSK_XSCALE, regs::MSK_YSCALE],
            scale,
        );
    }
    out
}

fn push_scale(out: &mut RegisterWrites, [ctrl, x, y]: [u32; 3], scale: PlaneScale) {
    out.push(RegisterWrite::new(ctrl, scale_mode(scale.mode)));
    out.push(RegisterWrite::new(x, scale.factor.x));
    out.push(RegisterWrite::new(y, scale.factor.y));
}

/// Clip-window corner writes.
pub fn clip_writes(clip: Rect) -> RegisterWrites {
    let mut out = RegisterWrites::new();
    push_rect(&mut out, regs::CW_LEFT_TOP, regs::CW_RIGHT_BOTTOM, clip);
    out
}

/// Writes for the constant colors, clip window and global alpha.
///
/// Zero key colors leave their registers untouched.
pub fn auxiliary_writes(cfg: &BlitConfig) -> RegisterWrites {
    let mut out = RegisterWrites::new();
    if let Some(fg) = cfg.fg_color {
        out.push(RegisterWrite::new(regs::FG_COLOR, fg));
    }
    if let Some(bg) = cfg.bg_color {
        out.push(RegisterWrite::new(regs::BG_COLOR, bg));
    }

    match cfg.color_key {
        ColorKey::Opaque => {}
        ColorKey::Transparent { bs_color } => {
            if bs_color != 0 {
                out.push(RegisterWrite::new(regs::BS_COLOR, bs_color));
            }
        }
        ColorKey::Bluescreen { bs_color, bg_color } => {
            if bs_color != 0 {
                out.push(RegisterWrite::new(regs::BS_COLOR, bs_color));
            }
            if bg_color != 0 {
                out.push(RegisterWrite::new(regs::BG_COLOR, bg_color));
            }
        }
    }

    if let Some(clip) = cfg.clip {
        out.extend(clip_writes(clip));
    }

    if cfg.blend.is_blending() {
        out.push(RegisterWrite::new(regs::ALPHA, replicate_alpha(cfg.global_alpha)));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/device/encode.rs"]
mod tests;
