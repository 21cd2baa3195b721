//! Headless column-alignment core (scan/layout/rewrite).

pub mod engine;
pub mod layout;
pub mod rewrite;
pub mod scan;
pub mod separator;

pub use engine::{align, AlignOutcome};
pub use layout::Layout;
pub use rewrite::LineEdit;
pub use scan::Candidate;
pub use separator::{Gravity, SeparatorError, SeparatorSpec};
