use crate::parser::error::ParseError;
use crate::parser::loader::load_quantities_from_str;

#[test]
fn test_load_quantity_file() {
    let quantities = load_quantities_from_str(
        r#"
[[quantity]]
magnitude = 3.14159265
units = "m/s"

[[quantity]]
magnitude = 6.022140857e23

  [quantity.options]
  round-precision = 3
"#,
    )
    .unwrap();

    assert_eq!(quantities.len(), 2);
    assert_eq!(
        quantities[0].dumps(),
        "\\SI{3.14159265}{\\meter\\per\\second}"
    );
    assert_eq!(
        quantities[1].dumps(),
        "\\num[round-precision=3]{6.022140857e23}"
    );
}

#[test]
fn test_load_uncertain_quantity() {
    let quantities = load_quantities_from_str(
        r#"
[[quantity]]
magnitude = 16.0
uncertainty = 0.3
units = "m"
"#,
    )
    .unwrap();

    assert_eq!(quantities.len(), 1);
    assert_eq!(quantities[0].dumps(), "\\SI{16 +- 0.3}{\\meter}");
}

#[test]
fn test_load_factor_table_units() {
    let quantities = load_quantities_from_str(
        r#"
[[quantity]]
magnitude = 9.81
units = { meter = 1, second = -2 }
"#,
    )
    .unwrap();

    assert_eq!(
        quantities[0].dumps(),
        "\\SI{9.81}{\\meter\\per\\second\\tothe{2}}"
    );
}

#[test]
fn test_load_array_magnitude() {
    let quantities = load_quantities_from_str(
        r#"
[[quantity]]
magnitude = [1.0, 2.0, 3.0]
units = "s"
"#,
    )
    .unwrap();

    assert_eq!(quantities[0].dumps(), "\\SI{[1 2 3]}{\\second}");
}

#[test]
fn test_uncertainty_without_units_rejected() {
    let result = load_quantities_from_str(
        r#"
[[quantity]]
magnitude = 16.0
uncertainty = 0.3
"#,
    );

    assert!(matches!(result, Err(ParseError::Shape(_))));
}

#[test]
fn test_invalid_toml_rejected() {
    let result = load_quantities_from_str("not valid toml [");
    assert!(matches!(result, Err(ParseError::InvalidFile(_))));
}

#[test]
fn test_empty_file_yields_no_quantities() {
    let quantities = load_quantities_from_str("").unwrap();
    assert!(quantities.is_empty());
}
