//! Conformance validation of metadata object graphs.

pub mod assert;
mod citation;
mod config;
mod container;
mod error;
mod extent;
mod validator;


pub use citation::CitationValidator;
pub use config::ValidatorConfig;
pub use container::{Context, Target, ValidatorContainer};
pub use error::{Result, ValidationError};
pub use extent::ExtentValidator;
pub use validator::{Package, Presence, Validator};
