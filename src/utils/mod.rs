mod helpers;

pub use helpers::{column_label, truncate_chars};
