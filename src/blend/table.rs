//! Static coefficient tables, one row per [`BlitOperator`] in code order.
//!
//! Rows are `None` where the operator never reaches a table lookup (solid fill, the built-in
//! darken/lighten modes, user coefficients).

use crate::blend::op::{BlendCoefficient as C, BlitOperator, CoefficientPair};

/// Row of the global-alpha table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GlobalAlphaRow {
    /// `Ga*Sc` folds into a single coefficient pair.
    Folded(CoefficientPair),
    /// No single pair expresses `Ga*Sc`: pre-multiply the source by `Ga` in a first pass, then
    /// blend with the default row.
    TwoPass,
}

const fn p(invert_src: bool, src: C, invert_dst: bool, dst: C) -> Option<CoefficientPair> {
    Some(CoefficientPair::new(invert_src, src, invert_dst, dst))
}

const fn folded(invert_src: bool, src: C, invert_dst: bool, dst: C) -> Option<GlobalAlphaRow> {
    Some(GlobalAlphaRow::Folded(CoefficientPair::new(
        invert_src, src, invert_dst, dst,
    )))
}

const TWO_PASS: Option<GlobalAlphaRow> = Some(GlobalAlphaRow::TwoPass);

pub(crate) static DEFAULT_COEFFS: [Option<CoefficientPair>; BlitOperator::COUNT] = [
    None,                                         // solid_fill
    p(false, C::Zero, false, C::Zero),            // clear
    p(false, C::One, false, C::Zero),             // src
    p(false, C::Zero, false, C::One),             // dst
    p(false, C::One, true, C::SrcAlpha),          // src_over
    p(true, C::DstAlpha, false, C::One),          // dst_over
    p(false, C::DstAlpha, false, C::Zero),        // src_in
    p(false, C::Zero, false, C::SrcAlpha),        // dst_in
    p(true, C::DstAlpha, false, C::Zero),         // src_out
    p(false, C::Zero, true, C::SrcAlpha),         // dst_out
    p(false, C::DstAlpha, true, C::SrcAlpha),     // src_atop
    p(true, C::DstAlpha, false, C::SrcAlpha),     // dst_atop
    p(true, C::DstAlpha, true, C::SrcAlpha),      // xor
    p(false, C::One, false, C::One),              // add
    p(false, C::DstColor, false, C::Zero),        // multiply
    p(false, C::One, true, C::SrcColor),          // screen
    None,                                         // darken
    None,                                         // lighten
    p(false, C::One, false, C::DisjointSrc),      // disj_src_over
    p(false, C::DisjointDst, false, C::One),      // disj_dst_over
    p(true, C::DisjointDst, false, C::Zero),      // disj_src_in
    p(false, C::Zero, true, C::DisjointSrc),      // disj_dst_in
    p(false, C::DisjointDst, false, C::Zero), // disj_src_out: follows the formula, not the shipped table
    p(false, C::Zero, false, C::DisjointSrc),     // disj_dst_out
    p(true, C::DisjointDst, false, C::DisjointSrc), // disj_src_atop
    p(false, C::DisjointDst, true, C::DisjointSrc), // disj_dst_atop
    p(false, C::DisjointDst, false, C::DisjointSrc), // disj_xor
    p(false, C::One, true, C::ConjointSrc), // conj_src_over: follows the formula, not the shipped table
    p(true, C::ConjointDst, false, C::One), // conj_dst_over: follows the formula, not the shipped table
    p(false, C::ConjointDst, false, C::Zero), // conj_src_in: follows the formula, not the shipped table
    p(false, C::Zero, false, C::ConjointSrc),     // conj_dst_in
    p(true, C::ConjointDst, false, C::Zero),      // conj_src_out
    p(false, C::Zero, true, C::ConjointSrc),      // conj_dst_out
    p(false, C::ConjointDst, true, C::ConjointSrc), // conj_src_atop
    p(true, C::ConjointDst, false, C::ConjointSrc), // conj_dst_atop: follows the formula, not the shipped table
    p(true, C::ConjointDst, true, C::ConjointSrc), // conj_xor
    None,                                         // user_coeff
    p(true, C::GlobalAlpha, true, C::Zero),       // user_src_ga
];

/// `One` is replaced with `GlobalAlpha` wherever that alone yields `Ga*Sc`; the per-pixel alpha
/// coefficients already carry `Ga` through the alpha operation mode.
pub(crate) static GLOBAL_ALPHA_COEFFS: [Option<GlobalAlphaRow>; BlitOperator::COUNT] = [
    None,                                          // solid_fill
    folded(false, C::Zero, false, C::Zero),        // clear
    folded(false, C::GlobalAlpha, false, C::Zero), // src
    folded(false, C::Zero, false, C::One),         // dst
    folded(false, C::GlobalAlpha, true, C::SrcAlpha), // src_over
    TWO_PASS,                                      // dst_over
    folded(false, C::DstAlpha, false, C::Zero),    // src_in
    folded(false, C::Zero, false, C::SrcAlpha),    // dst_in
    TWO_PASS,                                      // src_out
    folded(false, C::Zero, true, C::SrcAlpha),     // dst_out
    folded(false, C::DstAlpha, true, C::SrcAlpha), // src_atop
    TWO_PASS,                                      // dst_atop
    TWO_PASS,                                      // xor
    folded(false, C::GlobalAlpha, false, C::One),  // add
    TWO_PASS,                                      // multiply
    TWO_PASS,                                      // screen
    None,                                          // darken
    None,                                          // lighten
    TWO_PASS,                                      // disj_src_over
    TWO_PASS,                                      // disj_dst_over
    TWO_PASS,                                      // disj_src_in
    TWO_PASS,                                      // disj_dst_in
    TWO_PASS,                                      // disj_src_out
    TWO_PASS,                                      // disj_dst_out
    TWO_PASS,                                      // disj_src_atop
    TWO_PASS,                                      // disj_dst_atop
    TWO_PASS,                                      // disj_xor
    TWO_PASS,                                      // conj_src_over
    TWO_PASS,                                      // conj_dst_over
    TWO_PASS,                                      // conj_src_in
    TWO_PASS,                                      // conj_dst_in
    TWO_PASS,                                      // conj_src_out
    TWO_PASS,                                      // conj_dst_out
    TWO_PASS,                                      // conj_src_atop
    TWO_PASS,                                      // conj_dst_atop
    TWO_PASS,                                      // conj_xor
    None,                                          // user_coeff
    folded(true, C::GlobalAlpha, true, C::Zero),   // user_src_ga
];

/// First pass of the global-alpha workaround: `R = Ga*Sc`.
pub(crate) const GLOBAL_ALPHA_PREPASS: CoefficientPair =
    CoefficientPair::new(false, C::GlobalAlpha, false, C::Zero);

#[cfg(test)]
#[path = "../../tests/unit/blend/table.rs"]
mod tests;
