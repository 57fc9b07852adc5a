use crate::latex::escape_latex;
use crate::quantity::types::Number;

/// Number-to-string strategy used when building quantity markup.
///
/// With no callback set the default chain applies: arrays render
/// space-separated inside brackets, scalars render through the plain
/// stringifier and are escaped. A custom callback replaces the whole chain
/// and its output is used verbatim.
pub struct NumberFormat {
    custom: Option<Box<dyn Fn(&Number) -> String>>,
}

impl NumberFormat {
    pub fn new() -> Self {
        Self { custom: None }
    }

    pub fn with_callback(callback: impl Fn(&Number) -> String + 'static) -> Self {
        Self {
            custom: Some(Box::new(callback)),
        }
    }

    pub fn format(&self, number: &Number) -> String {
        if let Some(callback) = &self.custom {
            return callback(number);
        }
        match number {
            Number::Array(values) => format_array(values),
            Number::Scalar(value) => escape_latex(&format_scalar(*value)),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain scalar stringification. Magnitudes outside `[1e-4, 1e16)` switch to
/// scientific notation so values like Avogadro's number stay readable.
fn format_scalar(value: f64) -> String {
    if value != 0.0 && (value.abs() < 1e-4 || value.abs() >= 1e16) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

fn format_array(values: &[f64]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| format_scalar(*v)).collect();
    format!("[{}]", rendered.join(" "))
}
