use crate::latex::preamble::{PreambleItem, QUANTITY_PREAMBLE};
use crate::latex::{Command, Options};
use crate::quantity::format::NumberFormat;
use crate::quantity::types::QuantityValue;
use crate::units::dimensionality_to_siunitx;
use std::fmt;

/// Markup for one quantity value.
///
/// The macro invocation is resolved once at construction: plain numbers
/// become `\num{...}`, dimensional quantities `\SI{...}{...}`, and
/// uncertain quantities `\SI{m +- u}{...}`. Arguments are raw (the `+-`
/// separator and the unit backslashes must survive), and options render
/// verbatim for the same reason.
pub struct Quantity {
    value: QuantityValue,
    command: Command,
}

impl Quantity {
    pub fn new(value: QuantityValue) -> Self {
        Self::with_format(value, None, &NumberFormat::new())
    }

    pub fn with_options(value: QuantityValue, options: Options) -> Self {
        Self::with_format(value, Some(options), &NumberFormat::new())
    }

    pub fn with_format(
        value: QuantityValue,
        options: Option<Options>,
        format: &NumberFormat,
    ) -> Self {
        let command = build_command(&value, options, format);
        Self { value, command }
    }

    pub fn value(&self) -> &QuantityValue {
        &self.value
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Serialize to LaTeX source.
    pub fn dumps(&self) -> String {
        self.command.dumps()
    }

    /// Preamble requirements for quantity markup. Fixed; emit once per
    /// document regardless of which units appear.
    pub fn preamble() -> &'static [PreambleItem] {
        QUANTITY_PREAMBLE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dumps())
    }
}

fn build_command(
    value: &QuantityValue,
    options: Option<Options>,
    format: &NumberFormat,
) -> Command {
    match value {
        QuantityValue::Number(magnitude) => Command::new("num")
            .with_options(options)
            .raw_argument(format.format(magnitude)),
        QuantityValue::Dimensional { magnitude, units } => Command::new("SI")
            .with_options(options)
            .raw_argument(format.format(magnitude))
            .raw_argument(dimensionality_to_siunitx(units)),
        QuantityValue::Uncertain {
            magnitude,
            uncertainty,
            units,
        } => Command::new("SI")
            .with_options(options)
            .raw_argument(format!(
                "{} +- {}",
                format.format(magnitude),
                format.format(uncertainty)
            ))
            .raw_argument(dimensionality_to_siunitx(units)),
    }
}
