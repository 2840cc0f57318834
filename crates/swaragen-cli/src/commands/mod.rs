//! CLI command implementations

pub mod frequencies;
pub mod generate;
pub mod json_output;
pub mod package;
pub mod shrutis;
pub mod validate;
