use crate::foundation::error::BlendError;

/// Compositing operator requested for a blit.
///
/// With premultiplied source `S` and destination `D`, every table-driven operator computes
/// `R = coeff(S)*Sc + coeff(D)*Dc` per channel. Discriminants are the operator codes and the row
/// index into the coefficient tables.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlitOperator {
    /// Solid color fill; compositing is bypassed.
    #[serde(alias = "fill")]
    SolidFill = 0,
    /// `R = 0`
    Clear,
    /// `R = Sc`
    Src,
    /// `R = Dc`
    Dst,
    /// `R = Sc + (1-Sa)*Dc`
    SrcOver,
    /// `R = (1-Da)*Sc + Dc`
    DstOver,
    /// `R = Da*Sc`
    SrcIn,
    /// `R = Sa*Dc`
    DstIn,
    /// `R = (1-Da)*Sc`
    SrcOut,
    /// `R = (1-Sa)*Dc`
    DstOut,
    /// `R = Da*Sc + (1-Sa)*Dc`
    SrcAtop,
    /// `R = (1-Da)*Sc + Sa*Dc`
    DstAtop,
    /// `R = (1-Da)*Sc + (1-Sa)*Dc`
    Xor,
    /// `R = Sc + Dc`
    Add,
    /// `R = Sc*Dc`
    Multiply,
    /// `R = Sc + (1-Sc)*Dc`
    Screen,
    /// Built-in hardware darken.
    Darken,
    /// Built-in hardware lighten.
    Lighten,
    /// `R = Sc + min(1,(1-Sa)/Da)*Dc`
    DisjSrcOver,
    /// `R = min(1,(1-Da)/Sa)*Sc + Dc`
    DisjDstOver,
    /// `R = max(1-(1-Da)/Sa,0)*Sc`
    DisjSrcIn,
    /// `R = max(1-(1-Sa)/Da,0)*Dc`
    DisjDstIn,
    /// `R = min(1,(1-Da)/Sa)*Sc`
    DisjSrcOut,
    /// `R = min(1,(1-Sa)/Da)*Dc`
    DisjDstOut,
    /// `R = max(1-(1-Da)/Sa,0)*Sc + min(1,(1-Sa)/Da)*Dc`
    DisjSrcAtop,
    /// `R = min(1,(1-Da)/Sa)*Sc + max(1-(1-Sa)/Da,0)*Dc`
    DisjDstAtop,
    /// `R = min(1,(1-Da)/Sa)*Sc + min(1,(1-Sa)/Da)*Dc`
    DisjXor,
    /// `R = Sc + max(1-Sa/Da,0)*Dc`
    ConjSrcOver,
    /// `R = max(1-Da/Sa,0)*Sc + Dc`
    ConjDstOver,
    /// `R = min(1,Da/Sa)*Sc`
    ConjSrcIn,
    /// `R = min(1,Sa/Da)*Dc`
    ConjDstIn,
    /// `R = max(1-Da/Sa,0)*Sc`
    ConjSrcOut,
    /// `R = max(1-Sa/Da,0)*Dc`
    ConjDstOut,
    /// `R = min(1,Da/Sa)*Sc + max(1-Sa/Da,0)*Dc`
    ConjSrcAtop,
    /// `R = max(1-Da/Sa,0)*Sc + min(1,Sa/Da)*Dc`
    ConjDstAtop,
    /// `R = max(1-Da/Sa,0)*Sc + max(1-Sa/Da,0)*Dc`
    ConjXor,
    /// Caller-supplied raw coefficients (no hardware path yet).
    UserCoeff,
    /// `R = (1-Ga)*Sc + Dc`
    UserSrcGa,
}

impl BlitOperator {
    /// Number of operators, and rows in each coefficient table.
    pub const COUNT: usize = 38;

    /// Every operator in code order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::SolidFill,
        Self::Clear,
        Self::Src,
        Self::Dst,
        Self::SrcOver,
        Self::DstOver,
        Self::SrcIn,
        Self::DstIn,
        Self::SrcOut,
        Self::DstOut,
        Self::SrcAtop,
        Self::DstAtop,
        Self::Xor,
        Self::Add,
        Self::Multiply,
        Self::Screen,
        Self::Darken,
        Self::Lighten,
        Self::DisjSrcOver,
        Self::DisjDstOver,
        Self::DisjSrcIn,
        Self::DisjDstIn,
        Self::DisjSrcOut,
        Self::DisjDstOut,
        Self::DisjSrcAtop,
        Self::DisjDstAtop,
        Self::DisjXor,
        Self::ConjSrcOver,
        Self::ConjDstOver,
        Self::ConjSrcIn,
        Self::ConjDstIn,
        Self::ConjSrcOut,
        Self::ConjDstOut,
        Self::ConjSrcAtop,
        Self::ConjDstAtop,
        Self::ConjXor,
        Self::UserCoeff,
        Self::UserSrcGa,
    ];

    /// Operator code, also the coefficient table row.
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Convert a raw operator code.
    pub fn from_code(code: u32) -> Result<Self, BlendError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(BlendError::InvalidOperator(code))
    }

    /// Return `true` for operators of the disjoint family.
    pub fn is_disjoint(self) -> bool {
        (Self::DisjSrcOver..=Self::DisjXor).contains(&self)
    }

    /// Return `true` for operators of the conjoint family.
    pub fn is_conjoint(self) -> bool {
        (Self::ConjSrcOver..=Self::ConjXor).contains(&self)
    }
}

/// Blend coefficient selector, discriminants are the hardware field codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum BlendCoefficient {
    /// Constant 0.
    Zero = 0,
    /// Constant 1.
    One = 1,
    /// Source alpha.
    SrcAlpha = 2,
    /// Destination alpha.
    DstAlpha = 3,
    /// Source color.
    SrcColor = 4,
    /// Destination color.
    DstColor = 5,
    /// Global (constant) alpha.
    GlobalAlpha = 6,
    /// `min(1, (1-Sa)/Da)`
    DisjointSrc = 7,
    /// `min(1, (1-Da)/Sa)`
    DisjointDst = 8,
    /// `min(1, Sa/Da)`
    ConjointSrc = 9,
    /// `min(1, Da/Sa)`
    ConjointDst = 10,
}

impl BlendCoefficient {
    /// Hardware field code.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Source/destination coefficient pair for one operator.
///
/// An inverted coefficient contributes `1 - coeff`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CoefficientPair {
    /// Use `1 - src_coeff`.
    pub invert_src: bool,
    /// Coefficient applied to source color.
    pub src_coeff: BlendCoefficient,
    /// Use `1 - dst_coeff`.
    pub invert_dst: bool,
    /// Coefficient applied to destination color.
    pub dst_coeff: BlendCoefficient,
}

impl CoefficientPair {
    /// Build a pair.
    pub const fn new(
        invert_src: bool,
        src_coeff: BlendCoefficient,
        invert_dst: bool,
        dst_coeff: BlendCoefficient,
    ) -> Self {
        Self {
            invert_src,
            src_coeff,
            invert_dst,
            dst_coeff,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/op.rs"]
mod tests;
