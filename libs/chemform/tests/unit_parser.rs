//! Unit tests for formula parsing

use ferrum_chemform::{parse_formula, ElementCounts};

/// Helper to build expected counts
fn counts(pairs: &[(&str, u64)]) -> ElementCounts {
    pairs.iter().copied().collect()
}

/// Helper to assert that `formula` parses to `expected`
fn check(formula: &str, expected: &[(&str, u64)], description: &str) {
    let parsed = parse_formula(formula)
        .unwrap_or_else(|e| panic!("{} ({}) failed: {}", formula, description, e));
    assert_eq!(parsed, counts(expected), "{} ({})", formula, description);
}

#[test]
fn test_simple_formulas() {
    check("H2O", &[("H", 2), ("O", 1)], "water");
    check("C123456789", &[("C", 123_456_789)], "large integer subscript");
    check("NaCl", &[("Na", 1), ("Cl", 1)], "sodium chloride");
    check("O", &[("O", 1)], "single atom");
}

#[test]
fn test_common_organic_compounds() {
    check("C19H29COOH", &[("C", 20), ("H", 30), ("O", 2)], "abietic acid");
    check("C12H10", &[("C", 12), ("H", 10)], "acenaphthene");
    check("C12H6O2", &[("C", 12), ("H", 6), ("O", 2)], "acenaphthoquinone");
    check("C6H5Br", &[("C", 6), ("H", 5), ("Br", 1)], "bromobenzene");
    check("C3H4OH(COOH)3", &[("C", 6), ("H", 8), ("O", 7)], "citric acid");
    check("HOCH2CH2OH", &[("H", 6), ("O", 2), ("C", 2)], "ethylene glycol");
    check("CH3CH(CH3)CH3", &[("C", 4), ("H", 10)], "isobutane");
    check("NH2CH(C4H5N2)COOH", &[("N", 3), ("H", 9), ("C", 6), ("O", 2)], "histidine");
}

#[test]
fn test_parenthesized_groups() {
    check("Al2(SO4)3", &[("Al", 2), ("S", 3), ("O", 12)], "aluminum sulfate");
    check("Fe(H2O)6", &[("Fe", 1), ("H", 12), ("O", 6)], "iron hexahydrate");
    check("Cu(NH3)4", &[("Cu", 1), ("N", 4), ("H", 12)], "tetraamminecopper");
    check("Ca(OH)2", &[("Ca", 1), ("O", 2), ("H", 2)], "calcium hydroxide");
    check("Ca3(PO4)2", &[("Ca", 3), ("P", 2), ("O", 8)], "calcium phosphate");
    check("Fe(H2O)", &[("Fe", 1), ("H", 2), ("O", 1)], "implicit group multiplier");
    check("Mg3(Fe(CN)6)2", &[("Mg", 3), ("Fe", 2), ("C", 12), ("N", 12)], "doubly nested");
}

#[test]
fn test_hydrates() {
    check("CuSO4·5H2O", &[("Cu", 1), ("S", 1), ("O", 9), ("H", 10)], "copper sulfate pentahydrate");
    check("Na2CO3·10H2O", &[("Na", 2), ("C", 1), ("O", 13), ("H", 20)], "sodium carbonate decahydrate");
    check("CuSO4.5H2O", &[("Cu", 1), ("S", 1), ("O", 9), ("H", 10)], "period notation");
    check("CaCl2·H2O", &[("Ca", 1), ("Cl", 2), ("O", 1), ("H", 2)], "implicit hydrate multiplier");
    check("H2O·H2O", &[("H", 4), ("O", 2)], "water hydrate");
    check("NaCl·2NaCl", &[("Na", 3), ("Cl", 3)], "same element on both sides");
    check("Al2(SO4)3·18H2O", &[("Al", 2), ("S", 3), ("O", 30), ("H", 36)], "aluminum sulfate octadecahydrate");
    check("Mg3(Fe(CN)6)2·6H2O", &[("Mg", 3), ("Fe", 2), ("C", 12), ("N", 12), ("H", 12), ("O", 6)], "nested groups with hydrate");
}

#[test]
fn test_sequential_hydrates_do_not_cascade() {
    let sequential = parse_formula("CuSO4·5H2O·2NH3").unwrap();
    assert_eq!(
        sequential,
        counts(&[("Cu", 1), ("S", 1), ("O", 9), ("H", 16), ("N", 2)])
    );

    let cascaded = counts(&[("Cu", 1), ("S", 1), ("O", 9), ("H", 40), ("N", 10)]);
    assert_ne!(sequential, cascaded);
}

#[test]
fn test_group_multiplier_applies_to_every_hydrate_segment() {
    check("(NH3·H2O)2", &[("N", 2), ("H", 10), ("O", 2)], "dotted contents");
    check("(CuSO4·5H2O)2", &[("Cu", 2), ("S", 2), ("O", 18), ("H", 20)], "outer multiplier on hydrate");
    check("((NH3·H2O)2)3", &[("N", 6), ("H", 30), ("O", 6)], "scope on scope");
    check("(CuSO4·5H2O)2·2NH3", &[("Cu", 2), ("S", 2), ("O", 18), ("H", 26), ("N", 2)], "parens then dot");
    check("CuSO4·(NH3)2·5H2O", &[("Cu", 1), ("S", 1), ("O", 9), ("H", 16), ("N", 2)], "parens between dots");
    check("(NH3·H2O·H2O)2", &[("N", 2), ("H", 14), ("O", 4)], "multiple dots inside parens");
    check("(H2O·NH3·H2O)2·NH3", &[("H", 17), ("O", 4), ("N", 3)], "mixed scopes");
}

#[test]
fn test_group_inside_hydrate_segment() {
    // The group inherits the segment's multiplier, and so does a dot inside it.
    check("H2O·5(NH3)2", &[("H", 32), ("O", 1), ("N", 10)], "group in segment");
    check("H2O·5(NH3·H2O)2", &[("H", 52), ("O", 11), ("N", 10)], "dotted group in segment");
}

#[test]
fn test_alternative_separators_and_whitespace() {
    let expected = counts(&[("Cu", 1), ("S", 1), ("O", 9), ("H", 16), ("N", 2)]);
    for formula in [
        "CuSO4⋅5H2O⋅2NH3",
        "CuSO4•5H2O•2NH3",
        "CuSO4 · 5H2O · 2NH3",
        "CuSO4.5H2O·2NH3",
        "CuSO4∙5H2O・2NH3",
        "Cu\u{200B}SO4·5H2O·2NH3\u{FEFF}",
    ] {
        assert_eq!(parse_formula(formula).unwrap(), expected, "{}", formula);
    }

    assert_eq!(
        parse_formula("Ca ( OH ) 2").unwrap(),
        counts(&[("Ca", 1), ("O", 2), ("H", 2)])
    );
    assert_eq!(
        parse_formula("NaCl . H2O").unwrap(),
        counts(&[("Na", 1), ("Cl", 1), ("H", 2), ("O", 1)])
    );
}

#[test]
fn test_counts_serialize_as_flat_object() {
    let parsed = parse_formula("Al2(SO4)3").unwrap();
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json, serde_json::json!({ "Al": 2, "O": 12, "S": 3 }));
    assert_eq!(parsed.to_string(), "Al: 2, O: 12, S: 3");
    assert_eq!(parsed.total_atoms(), Some(17));
}
