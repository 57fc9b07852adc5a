use crate::quantity::error::QuantityError;
use crate::units::Dimensionality;

/// A numeric magnitude: a scalar or a one-dimensional array.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Scalar(f64),
    Array(Vec<f64>),
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Scalar(value)
    }
}

impl From<Vec<f64>> for Number {
    fn from(values: Vec<f64>) -> Self {
        Number::Array(values)
    }
}

/// The three supported quantity shapes, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityValue {
    /// A bare number with no physical dimension.
    Number(Number),
    /// A magnitude with a dimensionality.
    Dimensional {
        magnitude: Number,
        units: Dimensionality,
    },
    /// A magnitude with a measurement uncertainty and a dimensionality.
    Uncertain {
        magnitude: Number,
        uncertainty: Number,
        units: Dimensionality,
    },
}

impl QuantityValue {
    /// Resolve raw parts into one of the three shapes, rejecting anything
    /// else up front instead of leaving half-built state behind.
    pub fn classify(
        magnitude: Number,
        uncertainty: Option<Number>,
        units: Option<Dimensionality>,
    ) -> Result<Self, QuantityError> {
        match (uncertainty, units) {
            (None, None) => Ok(QuantityValue::Number(magnitude)),
            (None, Some(units)) => Ok(QuantityValue::Dimensional { magnitude, units }),
            (Some(uncertainty), Some(units)) => Ok(QuantityValue::Uncertain {
                magnitude,
                uncertainty,
                units,
            }),
            (Some(_), None) => Err(QuantityError::UnsupportedShape(
                "an uncertainty requires a dimensionality (use a dimensionless \
                 unit set for pure numbers)"
                    .to_string(),
            )),
        }
    }

    pub fn magnitude(&self) -> &Number {
        match self {
            QuantityValue::Number(magnitude) => magnitude,
            QuantityValue::Dimensional { magnitude, .. } => magnitude,
            QuantityValue::Uncertain { magnitude, .. } => magnitude,
        }
    }

    pub fn units(&self) -> Option<&Dimensionality> {
        match self {
            QuantityValue::Number(_) => None,
            QuantityValue::Dimensional { units, .. } => Some(units),
            QuantityValue::Uncertain { units, .. } => Some(units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_number() {
        let value = QuantityValue::classify(Number::Scalar(1.5), None, None).unwrap();
        assert!(matches!(value, QuantityValue::Number(_)));
    }

    #[test]
    fn test_classify_dimensional() {
        let units = Dimensionality::new().with("meter", 1);
        let value = QuantityValue::classify(Number::Scalar(1.5), None, Some(units)).unwrap();
        assert!(matches!(value, QuantityValue::Dimensional { .. }));
    }

    #[test]
    fn test_classify_uncertain() {
        let units = Dimensionality::new().with("meter", 1);
        let value = QuantityValue::classify(
            Number::Scalar(16.0),
            Some(Number::Scalar(0.3)),
            Some(units),
        )
        .unwrap();
        assert!(matches!(value, QuantityValue::Uncertain { .. }));
    }

    #[test]
    fn test_classify_rejects_uncertainty_without_units() {
        let result = QuantityValue::classify(Number::Scalar(16.0), Some(Number::Scalar(0.3)), None);
        assert!(matches!(result, Err(QuantityError::UnsupportedShape(_))));
    }

    #[test]
    fn test_units_accessor() {
        let units = Dimensionality::new().with("second", -1);
        let value = QuantityValue::Dimensional {
            magnitude: Number::Scalar(2.0),
            units: units.clone(),
        };
        assert_eq!(value.units(), Some(&units));
        assert_eq!(value.magnitude(), &Number::Scalar(2.0));
        assert_eq!(QuantityValue::Number(Number::Scalar(1.0)).units(), None);
    }
}
