use crate::catalog::{
    is_identifier, Catalog, CatalogError, KeyKind, MalformedReason, Origin, TokenEntry,
};

fn names(catalog: &Catalog) -> Vec<&str> {
    catalog.entries().iter().map(|x| x.name.as_str()).collect()
}

#[test]
fn parse_keeps_declaration_order() {
    let def = "OR: ||\nAND: &&\nNOT: !\n";
    let catalog = Catalog::parse(def).expect("valid catalog");
    assert_eq!(names(&catalog), vec!["OR", "AND", "NOT"]);
    assert_eq!(catalog.entries()[1], TokenEntry::new("AND", "&&"));
}

#[test]
fn parse_skips_blank_and_comment_lines() {
    let def = "# logical\n\n  \nAND: &&\n   # indented comment\nOR: ||";
    let catalog = Catalog::parse(def).expect("valid catalog");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn parse_accepts_tab_delimiter() {
    let catalog = Catalog::parse("SCOPE\t::\nCOLON:\t:").expect("valid catalog");
    assert_eq!(catalog.entries()[0], TokenEntry::new("SCOPE", "::"));
    assert_eq!(catalog.entries()[1], TokenEntry::new("COLON", ":"));
}

#[test]
fn parse_splits_at_first_delimiter_only() {
    let catalog = Catalog::parse("path_sep: ::\nlabel: :a:").expect("valid catalog");
    assert_eq!(catalog.entries()[0].lexeme, "::");
    assert_eq!(catalog.entries()[1].lexeme, ":a:");
}

#[test]
fn parse_passes_escapes_through() {
    let catalog = Catalog::parse(r"ld08: \*08").expect("valid catalog");
    assert_eq!(catalog.entries()[0].lexeme, r"\*08");
}

#[test]
fn bare_keyword_gets_pascal_case_name() {
    let catalog = Catalog::parse("loop\nelse_if").expect("valid catalog");
    assert_eq!(catalog.entries()[0], TokenEntry::new("Loop", "loop"));
    assert_eq!(catalog.entries()[1], TokenEntry::new("ElseIf", "else_if"));
}

#[test]
fn bare_symbol_has_no_name() {
    let err = Catalog::parse("&&").unwrap_err();
    assert_eq!(
        err,
        CatalogError::MalformedEntry {
            origin: Origin::Line(1),
            reason: MalformedReason::UnnamedBareLexeme,
            text: "&&".to_string(),
        }
    );
}

#[test]
fn bare_escaped_symbol_has_no_name() {
    let err = Catalog::parse("loop\n\\*08").unwrap_err();
    assert_eq!(
        err,
        CatalogError::MalformedEntry {
            origin: Origin::Line(2),
            reason: MalformedReason::UnnamedBareLexeme,
            text: r"\*08".to_string(),
        }
    );
}

#[test]
fn control_character_in_lexeme_is_malformed() {
    let err = Catalog::from_pairs([("NL", "a\nb"), ("X", "x")]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::MalformedEntry {
            origin: Origin::Entry(1),
            reason: MalformedReason::NonPrintableLexeme,
            text: r"NL: a\nb".to_string(),
        }
    );

    let err = Catalog::parse("bell: a\u{7}").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedEntry {
            origin: Origin::Line(1),
            reason: MalformedReason::NonPrintableLexeme,
            ..
        }
    ));
}

#[test]
fn empty_lexeme_is_malformed() {
    let err = Catalog::parse("AND: &&\nOR:   ").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedEntry {
            origin: Origin::Line(2),
            reason: MalformedReason::EmptyLexeme,
            ..
        }
    ));
}

#[test]
fn empty_name_is_malformed() {
    let err = Catalog::from_pairs([("", "+")]).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedEntry {
            origin: Origin::Entry(1),
            reason: MalformedReason::EmptyName,
            ..
        }
    ));
}

#[test]
fn non_identifier_name_is_malformed() {
    let err = Catalog::parse("2fast: ++").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedEntry {
            reason: MalformedReason::InvalidName,
            ..
        }
    ));
}

#[test]
fn duplicate_lexeme_is_rejected() {
    let err = Catalog::from_pairs([("A", "x"), ("B", "x")]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateKey {
            kind: KeyKind::Lexeme,
            value: "x".to_string(),
            first: Origin::Entry(1),
            second: Origin::Entry(2),
        }
    );
}

#[test]
fn duplicate_name_is_rejected() {
    let err = Catalog::parse("ADD: +\n\nADD: ++").unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateKey {
            kind: KeyKind::Name,
            value: "ADD".to_string(),
            first: Origin::Line(1),
            second: Origin::Line(3),
        }
    );
}

#[test]
fn first_violation_wins() {
    let err = Catalog::from_pairs([("A", "x"), ("A", "x"), ("", "")]).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DuplicateKey {
            kind: KeyKind::Name,
            ..
        }
    ));
}

#[test]
fn diagnostics_name_the_offender() {
    let err = Catalog::parse("A: x\nB: x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2: duplicate lexeme `x` (first declared at line 1)"
    );

    let err = Catalog::from_pairs([("NOT", "")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "entry 1: malformed entry `NOT: `: lexeme is empty"
    );
}

#[test]
fn empty_catalog_is_valid() {
    assert!(Catalog::parse("").expect("valid catalog").is_empty());
    assert!(Catalog::parse("# nothing here\n\n").expect("valid catalog").is_empty());
    let pairs: [(&str, &str); 0] = [];
    assert!(Catalog::from_pairs(pairs).expect("valid catalog").is_empty());
}

#[test]
fn builtin_catalog_loads() {
    let catalog = Catalog::builtin().expect("built-in catalog must be valid");
    assert_eq!(catalog.len(), 66);
    assert_eq!(
        catalog.entries()[0],
        TokenEntry::new("mirac_token_type_reserved_lnot", "!")
    );
}

#[test]
fn identifiers() {
    assert!(is_identifier("mirac_token_type_reserved_add"));
    assert!(is_identifier("_x1"));
    assert!(is_identifier("A"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("1a"));
    assert!(!is_identifier("a-b"));
    assert!(!is_identifier("a b"));
}
