//! CLI command implementations.

pub mod common;
pub mod inspect;
pub mod run;
pub mod validate;
pub mod version;
