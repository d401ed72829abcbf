//! Config module

mod constants;
mod env;

pub use constants::{ENV_CONFIG_PATH, ENV_DATA_DIR, ENV_LOG_FILTER};
pub use env::{ConfigOverrides, load_config};
