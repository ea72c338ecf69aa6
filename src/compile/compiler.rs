use crate::blend::op::BlitOperator;
use crate::blend::resolve::resolve;
use crate::blend::table::GLOBAL_ALPHA_PREPASS;
use crate::compile::opts::CompileOpts;
use crate::compile::plan::{BlitConfig, MaskPlane, PlaneScale, SourcePlane};
use crate::foundation::error::BlitResult;
use crate::request::model::{BlitRequest, MaskDesc, SourceDesc};
use crate::transform::rotation::map_rotation;
use crate::transform::scale::{ScaleRequest, encode_scale};

/// Compile a blit request into a device configuration.
///
/// Resolver and scale-encoder errors are returned unchanged; compilation adds none of its own.
/// The request is not validated here, see [`BlitRequest::validate`].
#[tracing::instrument(skip_all, fields(op = ?req.op, global_alpha = req.global_alpha))]
pub fn compile(req: &BlitRequest, opts: &CompileOpts) -> BlitResult<BlitConfig> {
    let blend = resolve(req.op, req.global_alpha)?;
    let prepass = blend.requires_two_pass.then_some(GLOBAL_ALPHA_PREPASS);

    let src = req.src.as_ref().map(compile_source).transpose()?;
    let msk = req.msk.as_ref().map(compile_mask).transpose()?;
    let addressing = map_rotation(req.rotation);

    // Clear is carried out as a fill with transparent black.
    let fill_color = match req.op {
        BlitOperator::SolidFill => Some(req.fill_color),
        BlitOperator::Clear => Some(0),
        _ => None,
    };

    tracing::debug!(
        two_pass = blend.requires_two_pass,
        rotate90 = addressing.rotate90,
        scaled_src = src.is_some_and(|s| s.scale.is_some()),
        scaled_msk = msk.is_some_and(|m| m.scale.is_some()),
        "compiled blit"
    );

    Ok(BlitConfig {
        op: req.op,
        blend,
        prepass,
        global_alpha: req.global_alpha,
        src,
        dst: req.dst,
        msk,
        addressing,
        premultiply: req.premultiply,
        round: opts.round,
        alpha_operation: opts.alpha_operation,
        mask_operation: opts.mask_operation,
        a8_rgb_color: opts.a8_rgb_color,
        clip: req.clip,
        dither: req.dither,
        color_key: req.color_key,
        fill_color,
        fg_color: req.fg_color,
        bg_color: req.bg_color,
    })
}

/// [`compile`] with [`CompileOpts::default`].
pub fn compile_default(req: &BlitRequest) -> BlitResult<BlitConfig> {
    compile(req, &CompileOpts::default())
}

fn compile_scale(scale: &ScaleRequest) -> BlitResult<PlaneScale> {
    Ok(PlaneScale {
        mode: scale.mode,
        factor: encode_scale(scale)?,
    })
}

fn compile_source(src: &SourceDesc) -> BlitResult<SourcePlane> {
    Ok(SourcePlane {
        image: src.image,
        scale: src.scale.as_ref().map(compile_scale).transpose()?,
        repeat: src.repeat,
    })
}

fn compile_mask(msk: &MaskDesc) -> BlitResult<MaskPlane> {
    Ok(MaskPlane {
        addr: msk.addr,
        stride: msk.stride,
        format: msk.format,
        order: msk.order,
        rect: msk.rect,
        scale: msk.scale.as_ref().map(compile_scale).transpose()?,
        repeat: msk.repeat,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
