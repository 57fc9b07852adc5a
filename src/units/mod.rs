// Unit naming: dimensionality representation, prefix and translation
// tables, and the dimensionality-to-siunitx translator.

pub mod dimension;
pub mod tables;
pub mod translate;

pub use dimension::Dimensionality;
pub use tables::{split_prefix, translate_unit_name, SI_PREFIXES, UNIT_NAME_TRANSLATIONS};
pub use translate::dimensionality_to_siunitx;
