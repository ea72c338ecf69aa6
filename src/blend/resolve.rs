use crate::blend::op::{BlendCoefficient, BlitOperator, CoefficientPair};
use crate::blend::table::{DEFAULT_COEFFS, GLOBAL_ALPHA_COEFFS, GlobalAlphaRow};
use crate::foundation::error::BlendError;

/// Global alpha value at which the constant-alpha path is off.
pub const OPAQUE_ALPHA: u8 = 0xff;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// What the blend-function register should be programmed with.
pub enum BlendFunction {
    /// No blending; the blend-function registers must not be programmed.
    Bypass,
    /// Built-in hardware darken mode.
    Darken,
    /// Built-in hardware lighten mode.
    Lighten,
    /// Table-driven coefficient pair.
    Coefficients(CoefficientPair),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Outcome of [`resolve`].
pub struct ResolvedBlend {
    /// Blend function for the main pass.
    pub function: BlendFunction,
    /// The caller must first multiply the source by global alpha in a separate pass, then run
    /// `function` as the second pass.
    pub requires_two_pass: bool,
}

impl ResolvedBlend {
    /// Coefficient pair of the main pass, if table-driven.
    pub fn pair(&self) -> Option<CoefficientPair> {
        match self.function {
            BlendFunction::Coefficients(pair) => Some(pair),
            _ => None,
        }
    }

    /// Source coefficient of the main pass.
    pub fn src_coeff(&self) -> Option<BlendCoefficient> {
        self.pair().map(|p| p.src_coeff)
    }

    /// Whether the source coefficient is inverted.
    pub fn src_invert(&self) -> bool {
        self.pair().is_some_and(|p| p.invert_src)
    }

    /// Destination coefficient of the main pass.
    pub fn dst_coeff(&self) -> Option<BlendCoefficient> {
        self.pair().map(|p| p.dst_coeff)
    }

    /// Whether the destination coefficient is inverted.
    pub fn dst_invert(&self) -> bool {
        self.pair().is_some_and(|p| p.invert_dst)
    }

    /// Return `true` when the blend-function registers take part in the blit.
    pub fn is_blending(&self) -> bool {
        self.function != BlendFunction::Bypass
    }
}

/// Resolve a compositing operator and global alpha into the blend function to program.
///
/// A `global_alpha` below [`OPAQUE_ALPHA`] selects the global-alpha table.
pub fn resolve(op: BlitOperator, global_alpha: u8) -> Result<ResolvedBlend, BlendError> {
    let with_global_alpha = global_alpha < OPAQUE_ALPHA;

    match op {
        BlitOperator::SolidFill | BlitOperator::Clear => {
            return Ok(ResolvedBlend {
                function: BlendFunction::Bypass,
                requires_two_pass: false,
            });
        }
        BlitOperator::Darken => {
            return Ok(ResolvedBlend {
                function: BlendFunction::Darken,
                requires_two_pass: with_global_alpha,
            });
        }
        BlitOperator::Lighten => {
            return Ok(ResolvedBlend {
                function: BlendFunction::Lighten,
                requires_two_pass: with_global_alpha,
            });
        }
        BlitOperator::UserCoeff => return Err(BlendError::NotSupported(op)),
        _ => {}
    }

    let default = DEFAULT_COEFFS[op.index()].ok_or(BlendError::NotSupported(op))?;
    if !with_global_alpha {
        return Ok(ResolvedBlend {
            function: BlendFunction::Coefficients(default),
            requires_two_pass: false,
        });
    }

    match GLOBAL_ALPHA_COEFFS[op.index()] {
        Some(GlobalAlphaRow::Folded(pair)) => Ok(ResolvedBlend {
            function: BlendFunction::Coefficients(pair),
            requires_two_pass: false,
        }),
        Some(GlobalAlphaRow::TwoPass) => Ok(ResolvedBlend {
            function: BlendFunction::Coefficients(default),
            requires_two_pass: true,
        }),
        None => Err(BlendError::NotSupported(op)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/resolve.rs"]
mod tests;
