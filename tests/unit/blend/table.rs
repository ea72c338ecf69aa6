use super::*;

fn table_less(op: BlitOperator) -> bool {
    matches!(
        op,
        BlitOperator::SolidFill
            | BlitOperator::Darken
            | BlitOperator::Lighten
            | BlitOperator::UserCoeff
    )
}

#[test]
fn every_table_driven_operator_has_one_row_in_each_table() {
    for op in BlitOperator::ALL {
        let default = DEFAULT_COEFFS[op.index()];
        let ga = GLOBAL_ALPHA_COEFFS[op.index()];
        if table_less(op) {
            assert!(default.is_none(), "{op:?}");
            assert!(ga.is_none(), "{op:?}");
        } else {
            assert!(default.is_some(), "{op:?}");
            assert!(ga.is_some(), "{op:?}");
        }
    }
}

#[test]
fn folded_rows_only_swap_one_for_global_alpha() {
    for op in BlitOperator::ALL {
        let (Some(default), Some(GlobalAlphaRow::Folded(ga))) =
            (DEFAULT_COEFFS[op.index()], GLOBAL_ALPHA_COEFFS[op.index()])
        else {
            continue;
        };
        assert_eq!(default.invert_src, ga.invert_src, "{op:?}");
        assert_eq!(default.invert_dst, ga.invert_dst, "{op:?}");
        assert_eq!(default.dst_coeff, ga.dst_coeff, "{op:?}");
        if default.src_coeff == C::One {
            assert_eq!(ga.src_coeff, C::GlobalAlpha, "{op:?}");
        } else {
            assert_eq!(default.src_coeff, ga.src_coeff, "{op:?}");
        }
    }
}

#[test]
fn disjoint_and_conjoint_families_always_need_two_passes() {
    for op in BlitOperator::ALL
        .into_iter()
        .filter(|op| op.is_disjoint() || op.is_conjoint())
    {
        assert_eq!(
            GLOBAL_ALPHA_COEFFS[op.index()],
            Some(GlobalAlphaRow::TwoPass),
            "{op:?}"
        );
    }
}

#[test]
fn families_use_their_own_coefficients() {
    for op in BlitOperator::ALL {
        let Some(pair) = DEFAULT_COEFFS[op.index()] else {
            continue;
        };
        let uses = |c: C| pair.src_coeff == c || pair.dst_coeff == c;
        if op.is_disjoint() {
            assert!(!uses(C::ConjointSrc) && !uses(C::ConjointDst), "{op:?}");
        }
        if op.is_conjoint() {
            assert!(!uses(C::DisjointSrc) && !uses(C::DisjointDst), "{op:?}");
        }
    }
}

#[test]
fn formula_rows_that_differ_from_the_shipped_table() {
    let row = |op: BlitOperator| DEFAULT_COEFFS[op.index()].unwrap();
    assert_eq!(
        row(BlitOperator::DisjSrcOut),
        CoefficientPair::new(false, C::DisjointDst, false, C::Zero)
    );
    assert_eq!(
        row(BlitOperator::ConjSrcOver),
        CoefficientPair::new(false, C::One, true, C::ConjointSrc)
    );
    assert_eq!(
        row(BlitOperator::ConjDstOver),
        CoefficientPair::new(true, C::ConjointDst, false, C::One)
    );
    assert_eq!(
        row(BlitOperator::ConjSrcIn),
        CoefficientPair::new(false, C::ConjointDst, false, C::Zero)
    );
    assert_eq!(
        row(BlitOperator::ConjDstAtop),
        CoefficientPair::new(true, C::ConjointDst, false, C::ConjointSrc)
    );
}

#[test]
fn prepass_scales_source_only() {
    assert_eq!(GLOBAL_ALPHA_PREPASS.src_coeff, C::GlobalAlpha);
    assert_eq!(GLOBAL_ALPHA_PREPASS.dst_coeff, C::Zero);
    assert!(!GLOBAL_ALPHA_PREPASS.invert_src && !GLOBAL_ALPHA_PREPASS.invert_dst);
}
