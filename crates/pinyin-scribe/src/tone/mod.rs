//! tone module

pub mod tone_converter;
pub mod tone_table;

/// Re-exports
pub use tone_converter::apply_tone;
pub use tone_table::ToneTable;
