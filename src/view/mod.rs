//! Per-request view state for the interactive parts of the pages.

mod accordion;
mod carousel;
mod form;

pub use accordion::*;
pub use carousel::*;
pub use form::*;
