pub mod latex;
pub mod parser;
pub mod quantity;
pub mod units;

pub use latex::{escape_latex, Argument, Command, Options};
pub use quantity::{Number, NumberFormat, Quantity, QuantityError, QuantityValue};
pub use units::{dimensionality_to_siunitx, Dimensionality};
