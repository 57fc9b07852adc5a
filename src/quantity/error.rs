use std::fmt;

#[derive(Debug, Clone)]
pub enum QuantityError {
    /// The combination of magnitude/uncertainty/dimensionality does not
    /// match any supported quantity shape.
    UnsupportedShape(String),
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::UnsupportedShape(msg) => write!(f, "Unsupported quantity shape: {}", msg),
        }
    }
}

impl std::error::Error for QuantityError {}
