pub mod config;
pub mod constants;
pub mod types;

pub use config::{FieldConfig, FieldConfigOverrides};
pub use constants::*;
pub use types::*;
