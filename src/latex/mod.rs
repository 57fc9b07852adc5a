// LaTeX markup objects: escaping, macro invocations, preamble requirements.

pub mod command;
pub mod escape;
pub mod preamble;

pub use command::{Argument, Command, OptionItem, Options};
pub use escape::escape_latex;
pub use preamble::{render_preamble, PreambleItem, QUANTITY_PREAMBLE};
