use crate::foundation::error::{BlitError, BlitResult};
use serde::{Deserialize, Serialize};

/// How per-pixel alpha and global alpha combine in alpha-based coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum AlphaOperation {
    /// Per-pixel alpha only.
    PerPixel = 0,
    /// Per-pixel alpha plus global alpha.
    PerPixelSumGlobal = 1,
    /// Per-pixel alpha times global alpha.
    #[default]
    PerPixelMulGlobal = 2,
    /// Global alpha only.
    Global = 3,
}

/// How 16/32-bit masks are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskOperation {
    /// Alpha channel only.
    Alpha,
    /// Per-channel ARGB mask.
    #[default]
    Argb,
    /// Alpha for alpha, color for color.
    Mixed,
}

/// Rounding of the premultiply stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum PremultRound {
    /// `A*B >> 8`
    Round0 = 0,
    /// `((A+1)*B) >> 8`
    #[default]
    Round1 = 1,
    /// `((A+(A>>7))*B) >> 8`
    Round2 = 2,
    /// `(A*B + 0x80 + ((A*B + 0x80) >> 8)) >> 8`
    Round3 = 3,
}

/// Rounding of the blend stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum BlendRound {
    /// `((A+1)*B) >> 8`
    #[default]
    Round0 = 0,
    /// `((A+(A>>7))*B) >> 8`
    Round1 = 1,
    /// `(A*B + 0x80 + ((A*B + 0x80) >> 8)) >> 8`
    Round2 = 2,
    /// `A*B >> 8` with saturation.
    Round3 = 3,
}

/// Rounding selection written into the shared round-mode register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundModes {
    /// Premultiply rounding.
    #[serde(default)]
    pub premult: PremultRound,
    /// Blend rounding.
    #[serde(default)]
    pub blend: BlendRound,
}

/// Hardware operating modes applied to every compiled blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileOpts {
    /// Alpha combination mode for the SA/DA coefficient sources.
    #[serde(default)]
    pub alpha_operation: AlphaOperation,
    /// Interpretation of color masks.
    #[serde(default)]
    pub mask_operation: MaskOperation,
    /// Rounding modes.
    #[serde(default)]
    pub round: RoundModes,
    /// RGB color substituted for `a8` planes.
    #[serde(default)]
    pub a8_rgb_color: u32,
}

impl Default for CompileOpts {
    fn default() -> Self {
        Self {
            alpha_operation: AlphaOperation::PerPixelMulGlobal,
            mask_operation: MaskOperation::Argb,
            round: RoundModes {
                premult: PremultRound::Round1,
                blend: BlendRound::Round0,
            },
            a8_rgb_color: 0,
        }
    }
}

impl CompileOpts {
    /// Parse options from JSON; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> BlitResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BlitError::serde(format!("parse compile options JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/opts.rs"]
mod tests;
