// Quantity values and their markup: shape classification, number
// formatting, and the quantity-to-command wrapper.

pub mod error;
pub mod format;
pub mod markup;
pub mod types;


pub use error::QuantityError;
pub use format::NumberFormat;
pub use markup::Quantity;
pub use types::{Number, QuantityValue};
