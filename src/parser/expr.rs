use crate::parser::error::ParseError;
use crate::quantity::types::{Number, QuantityValue};
use crate::units::Dimensionality;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One factor of a unit expression: a unit name with an optional
    /// integer exponent ("meter", "s^2", "second^-1")
    static ref FACTOR_PATTERN: Regex = Regex::new(
        r"^([A-Za-z_]+)(?:\^(-?\d+))?$"
    ).unwrap();

    /// An inline quantity: number, optional "+- uncertainty", optional unit
    /// expression ("3.14 +- 0.3 m/s")
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)(?:\s*\+-\s*(\d+(?:\.\d+)?(?:[eE][+-]?\d+)?))?(?:\s+(\S.*))?$"
    ).unwrap();
}

/// Parse a compact unit expression ("m/s^2", "kg*m/s^2", "kilometer") into
/// a dimensionality. `*` multiplies, `/` divides the factor that follows
/// it, and `^` raises a factor to an integer power. Common abbreviations
/// expand to the full quantities-style names the translator expects.
pub fn parse_unit_expression(expr: &str) -> Result<Dimensionality, ParseError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut dim = Dimensionality::new();
    let mut sign = 1;
    let mut factor_start = 0;
    for (i, c) in expr.char_indices() {
        if c == '*' || c == '/' {
            push_factor(&mut dim, expr[factor_start..i].trim(), sign)?;
            sign = if c == '/' { -1 } else { 1 };
            factor_start = i + 1;
        }
    }
    push_factor(&mut dim, expr[factor_start..].trim(), sign)?;

    Ok(dim)
}

fn push_factor(dim: &mut Dimensionality, factor: &str, sign: i32) -> Result<(), ParseError> {
    let captures = FACTOR_PATTERN
        .captures(factor)
        .ok_or_else(|| ParseError::InvalidFactor(factor.to_string()))?;

    let name = expand_unit_name(&captures[1]);
    let power: i32 = match captures.get(2) {
        Some(exponent) => exponent
            .as_str()
            .parse()
            .map_err(|_| ParseError::InvalidExponent(factor.to_string()))?,
        None => 1,
    };

    dim.insert(name, sign * power);
    Ok(())
}

/// Parse an inline quantity string like "3.14 +- 0.3 m/s" into a quantity
/// value. The unit expression is optional; an uncertainty without units is
/// rejected at classification.
pub fn parse_quantity_string(text: &str) -> Result<QuantityValue, ParseError> {
    let captures = QUANTITY_PATTERN
        .captures(text.trim())
        .ok_or_else(|| ParseError::InvalidQuantity(text.to_string()))?;

    let magnitude: f64 = captures[1]
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(text.to_string()))?;

    let uncertainty = match captures.get(2) {
        Some(value) => Some(
            value
                .as_str()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidQuantity(text.to_string()))?,
        ),
        None => None,
    };

    let units = match captures.get(3) {
        Some(expr) => Some(parse_unit_expression(expr.as_str())?),
        None => None,
    };

    QuantityValue::classify(
        Number::Scalar(magnitude),
        uncertainty.map(Number::Scalar),
        units,
    )
    .map_err(ParseError::from)
}

/// Expand common unit abbreviations to the full names the translation
/// tables use. Unknown names pass through untouched.
fn expand_unit_name(name: &str) -> &str {
    match name {
        "m" => "meter",
        "s" | "sec" => "second",
        "g" => "gram",
        "kg" => "kilogram",
        "km" => "kilometer",
        "A" => "ampere",
        "K" => "kelvin",
        "mol" => "mole",
        "cd" => "candela",
        "Hz" => "hertz",
        "N" => "newton",
        "Pa" => "pascal",
        "J" => "joule",
        "W" => "watt",
        "C" => "coulomb",
        "V" => "volt",
        "F" => "farad",
        "T" => "tesla",
        "L" => "liter",
        "h" | "hr" => "hour",
        "min" => "minute",
        _ => name,
    }
}
