use crate::latex::Options;
use crate::parser::error::ParseError;
use crate::parser::expr::parse_unit_expression;
use crate::quantity::format::NumberFormat;
use crate::quantity::markup::Quantity;
use crate::quantity::types::{Number, QuantityValue};
use crate::units::Dimensionality;
use serde::Deserialize;
use std::collections::BTreeMap;
use toml::Value;

/// A TOML quantity file: a list of `[[quantity]]` tables.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityFile {
    #[serde(rename = "quantity", default)]
    pub quantities: Vec<QuantityEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuantityEntry {
    pub magnitude: MagnitudeSpec,

    #[serde(default)]
    pub uncertainty: Option<MagnitudeSpec>,

    #[serde(default)]
    pub units: Option<UnitsSpec>,

    // siunitx options, rendered in key order
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
}

/// A magnitude is a scalar or an array of scalars.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MagnitudeSpec {
    Scalar(f64),
    Array(Vec<f64>),
}

/// Units as a compact expression string or an explicit factor table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UnitsSpec {
    Expression(String),
    Factors(BTreeMap<String, i32>),
}

impl From<MagnitudeSpec> for Number {
    fn from(spec: MagnitudeSpec) -> Self {
        match spec {
            MagnitudeSpec::Scalar(value) => Number::Scalar(value),
            MagnitudeSpec::Array(values) => Number::Array(values),
        }
    }
}

impl UnitsSpec {
    pub fn to_dimensionality(&self) -> Result<Dimensionality, ParseError> {
        match self {
            UnitsSpec::Expression(expr) => parse_unit_expression(expr),
            UnitsSpec::Factors(factors) => Ok(factors
                .iter()
                .map(|(unit, power)| (unit.clone(), *power))
                .collect()),
        }
    }
}

impl QuantityEntry {
    /// Resolve the entry into quantity markup, failing on an unsupported
    /// shape or a bad unit expression.
    pub fn to_quantity(&self) -> Result<Quantity, ParseError> {
        let magnitude: Number = self.magnitude.clone().into();
        let uncertainty: Option<Number> = self.uncertainty.clone().map(Number::from);
        let units = match &self.units {
            Some(spec) => Some(spec.to_dimensionality()?),
            None => None,
        };

        let value = QuantityValue::classify(magnitude, uncertainty, units)?;
        let options = if self.options.is_empty() {
            None
        } else {
            let mut rendered = Options::new();
            for (key, value) in &self.options {
                rendered = rendered.set(key.clone(), option_value_to_string(value));
            }
            Some(rendered)
        };

        Ok(Quantity::with_format(value, options, &NumberFormat::new()))
    }
}

fn option_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_spec_expression() {
        let spec = UnitsSpec::Expression("m/s^2".to_string());
        let dim = spec.to_dimensionality().unwrap();
        let factors: Vec<(&str, i32)> = dim.iter().collect();
        assert_eq!(factors, vec![("meter", 1), ("second", -2)]);
    }

    #[test]
    fn test_units_spec_factors() {
        let mut factors = BTreeMap::new();
        factors.insert("meter".to_string(), 1);
        factors.insert("second".to_string(), -1);
        let spec = UnitsSpec::Factors(factors);
        let dim = spec.to_dimensionality().unwrap();
        assert_eq!(dim.len(), 2);
    }

    #[test]
    fn test_option_value_rendering() {
        assert_eq!(
            option_value_to_string(&Value::String("figures".to_string())),
            "figures"
        );
        assert_eq!(option_value_to_string(&Value::Integer(3)), "3");
        assert_eq!(option_value_to_string(&Value::Boolean(true)), "true");
    }
}
