use crate::blend::op::{BlitOperator, CoefficientPair};
use crate::blend::resolve::ResolvedBlend;
use crate::compile::opts::{AlphaOperation, MaskOperation, RoundModes};
use crate::foundation::core::Rect;
use crate::request::model::{ColorKey, ImageDesc, MaskFormat, PremultFlags, Repeat, RgbOrder};
use crate::transform::rotation::AddressingPlan;
use crate::transform::scale::{FixedScale, ScaleMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Compiled scaling of one plane.
pub struct PlaneScale {
    /// Sampling filter.
    pub mode: ScaleMode,
    /// Inverse Q16.16 factors.
    pub factor: FixedScale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Compiled source plane.
pub struct SourcePlane {
    /// Image description.
    pub image: ImageDesc,
    /// Scaling, `None` for 1:1.
    pub scale: Option<PlaneScale>,
    /// Repeat mode.
    pub repeat: Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Compiled mask plane.
pub struct MaskPlane {
    /// Base bus address.
    pub addr: u32,
    /// Bytes per row.
    pub stride: u32,
    /// Storage format.
    pub format: MaskFormat,
    /// Channel order of color masks.
    pub order: RgbOrder,
    /// Region taking part in the blit.
    pub rect: Rect,
    /// Scaling, `None` for 1:1.
    pub scale: Option<PlaneScale>,
    /// Repeat mode.
    pub repeat: Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Complete device configuration for one blit.
///
/// Produced by [`crate::compile`], consumed by [`crate::Accelerator::program`], then dropped.
pub struct BlitConfig {
    /// Requested operator.
    pub op: BlitOperator,
    /// Blend function of the main pass.
    pub blend: ResolvedBlend,
    /// First-pass coefficients (`Ga*Sc`) when `blend.requires_two_pass` is set.
    pub prepass: Option<CoefficientPair>,
    /// Global alpha as requested.
    pub global_alpha: u8,
    /// Source plane.
    pub src: Option<SourcePlane>,
    /// Destination plane.
    pub dst: ImageDesc,
    /// Mask plane.
    pub msk: Option<MaskPlane>,
    /// Addressing realizing the requested rotation.
    pub addressing: AddressingPlan,
    /// Premultiplication toggles.
    pub premultiply: PremultFlags,
    /// Rounding modes.
    pub round: RoundModes,
    /// Alpha combination mode for alpha coefficients.
    pub alpha_operation: AlphaOperation,
    /// Interpretation of color masks.
    pub mask_operation: MaskOperation,
    /// RGB color substituted for `a8` planes.
    pub a8_rgb_color: u32,
    /// Destination clip window.
    pub clip: Option<Rect>,
    /// Dithering.
    pub dither: bool,
    /// Source color keying.
    pub color_key: ColorKey,
    /// Fill color, set for solid fills and for clears (always `0`).
    pub fill_color: Option<u32>,
    /// Foreground color.
    pub fg_color: Option<u32>,
    /// Background color.
    pub bg_color: Option<u32>,
}

impl BlitConfig {
    /// Return `true` when the caller must run the `Ga*Sc` pre-pass first.
    pub fn requires_two_pass(&self) -> bool {
        self.blend.requires_two_pass
    }

    /// Return `true` for solid fills and clears, which ignore every other blit command.
    pub fn is_solid_fill(&self) -> bool {
        self.fill_color.is_some()
    }
}
