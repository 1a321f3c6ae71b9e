pub mod selection;

pub use selection::{Selection, parse_selection, parse_selection_args};
