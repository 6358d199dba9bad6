//! Conformance validation for implementations of the ISO 19115 citation and
//! extent metadata model.
//!
//! Implement the traits in [`metadata`] (or use the ready-made structs in
//! [`models`]) and hand the root object to a [`ValidatorContainer`]:
//!
//! ```
//! use geoconform::models::{SimpleExtent, SimpleGeographicBoundingBox, SimpleGeographicExtent};
//! use geoconform::{ValidatorConfig, ValidatorContainer};
//!
//! let extent = SimpleExtent {
//!     geographic_elements: Some(vec![Some(SimpleGeographicExtent::BoundingBox(
//!         SimpleGeographicBoundingBox::new(-10.0, 10.0, 40.0, 60.0),
//!     ))]),
//!     ..SimpleExtent::default()
//! };
//!
//! let container = ValidatorContainer::new(ValidatorConfig::default());
//! assert!(container.validate_extent(Some(&extent)).is_ok());
//! ```

pub mod metadata;
pub mod models;
pub mod validation;
pub mod validators;

pub use validation::{
    Context, Target, ValidationError, ValidatorConfig, ValidatorContainer,
};
