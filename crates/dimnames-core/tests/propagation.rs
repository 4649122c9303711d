use dimnames_core::{
    compatible, inverse_names, symmetric_names, ContractNames, LqNames, LuNames, Name,
    NameError, NameTuple, Names, SvdNames,
};

// ============================================================================
// Helpers
// ============================================================================

fn n(s: &str) -> Name {
    Name::new(s).unwrap()
}

/// A small alphabet with the wildcard, enough to hit every case of the rules.
fn alphabet() -> Vec<Name> {
    vec![n("a"), n("b"), n("c"), Name::Wildcard]
}

fn all_pairs() -> Vec<Names<2>> {
    let mut out = Vec::new();
    for &x in &alphabet() {
        for &y in &alphabet() {
            out.push(Names::new([x, y]));
        }
    }
    out
}

// ============================================================================
// Matrix product
// ============================================================================

#[test]
fn test_compatible_matrix_pairs_propagate_outer_names() {
    for a in all_pairs() {
        for b in all_pairs() {
            let contractible = a[1] == b[0] || a[1].is_wildcard() || b[0].is_wildcard();
            assert_eq!(compatible(&a, &b), contractible, "{a} * {b}");

            match a.contract_names(&b) {
                Ok(out) => {
                    assert!(contractible);
                    assert_eq!(out, Names::new([a[0], b[1]]));
                }
                Err(NameError::DimensionMismatch { left, right }) => {
                    assert!(!contractible);
                    assert_eq!(left, a.to_vec());
                    assert_eq!(right, b.to_vec());
                }
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }
}

#[test]
fn test_matrix_vector_keeps_row_name() {
    for a in all_pairs() {
        for &x in &alphabet() {
            let b = Names::new([x]);
            if let Ok(out) = a.contract_names(&b) {
                assert_eq!(out, Names::new([a[0]]));
            } else {
                assert!(!a[1].matches(&x));
            }
        }
    }
}

#[test]
fn test_vector_matrix_gives_outer_product_names() {
    let v = Names::parse(["t"]).unwrap();
    let m = Names::parse(["t", "f"]).unwrap();
    assert_eq!(v.contract_names(&m).unwrap(), Names::parse(["t", "f"]).unwrap());

    let bad = Names::parse(["s", "f"]).unwrap();
    assert!(v.contract_names(&bad).is_err());
}

#[test]
fn test_plain_operand_behaves_like_wildcards() {
    // A plain operand is seen through an all-wildcard tuple, so the named
    // side's names survive.
    let a = Names::parse(["r", "c"]).unwrap();
    let plain = Names::<1>::new([Name::Wildcard]);
    assert_eq!(a.contract_names(&plain).unwrap(), Names::parse(["r"]).unwrap());

    let plain = Names::<2>::new([Name::Wildcard, Name::Wildcard]);
    assert_eq!(
        plain.contract_names(&a).unwrap(),
        Names::new([Name::Wildcard, n("c")])
    );
}

// ============================================================================
// Inverse and symmetric reductions
// ============================================================================

#[test]
fn test_inverse_is_involutive() {
    for names in all_pairs() {
        assert_eq!(inverse_names(&inverse_names(&names)), names);
        assert_eq!(inverse_names(&names), Names::new([names[1], names[0]]));
    }
}

#[test]
fn test_symmetric_reduction() {
    let xy = Names::parse(["x", "y"]).unwrap();
    assert_eq!(symmetric_names(&xy, 0), Names::parse(["y", "y"]).unwrap());
    assert_eq!(symmetric_names(&xy, 1), Names::parse(["x", "x"]).unwrap());
    assert_eq!(symmetric_names(&xy, 2), Names::parse(["_", "_"]).unwrap());
    assert_eq!(symmetric_names(&xy, usize::MAX), Names::parse(["_", "_"]).unwrap());
}

// ============================================================================
// Factorization tables
// ============================================================================

#[test]
fn test_lu_names() {
    let rc = Names::parse(["r", "c"]).unwrap();
    let lu = LuNames::derive(&rc);
    assert_eq!(lu.l, Names::parse(["r", "_"]).unwrap());
    assert_eq!(lu.u, Names::parse(["_", "c"]).unwrap());
    assert_eq!(lu.p, Names::parse(["r", "r"]).unwrap());
    assert_eq!(lu.perm, Names::parse(["r"]).unwrap());
}

#[test]
fn test_lq_names() {
    let rc = Names::parse(["r", "c"]).unwrap();
    let lq = LqNames::derive(&rc);
    assert_eq!(lq.l, Names::parse(["r", "_"]).unwrap());
    assert_eq!(lq.q, Names::parse(["_", "c"]).unwrap());
}

#[test]
fn test_svd_names() {
    let rc = Names::parse(["r", "c"]).unwrap();
    let svd = SvdNames::derive(&rc);
    assert_eq!(svd.u, Names::parse(["r", "_"]).unwrap());
    assert_eq!(svd.v, Names::parse(["_", "c"]).unwrap());
    assert_eq!(svd.vt, Names::parse(["c", "_"]).unwrap());
}

#[test]
fn test_factor_names_chain_back_to_original() {
    // L (r, _) times U (_, c) contracts over the wildcard bond axis and gives
    // back the original names.
    let rc = Names::parse(["r", "c"]).unwrap();
    let lu = LuNames::derive(&rc);
    assert_eq!(lu.l.contract_names(&lu.u).unwrap(), rc);
    assert_eq!(lu.p.contract_names(&rc).unwrap(), rc);

    let lq = LqNames::derive(&rc);
    assert_eq!(lq.l.contract_names(&lq.q).unwrap(), rc);
}
