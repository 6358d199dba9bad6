//! Accessor contracts of the ISO 19115 citation and extent packages.
//!
//! The validators only ever see metadata through these traits, so any
//! implementation can be checked without the crate knowing its concrete types.
//! Optional properties return `None`. Collection properties return
//! `Option<Vec<Option<&dyn T>>>` so that a missing collection and a null
//! element stay distinguishable.

pub mod citation;
pub mod extent;

pub use citation::{
    Address, Citation, CitationDate, Contact, DateType, Identifier, Individual, OnLineFunction,
    OnlineResource, Organisation, Party, Responsibility, Role, Telephone, TelephoneType,
};
pub use extent::{
    BoundingPolygon, Extent, GeographicBoundingBox, GeographicDescription, GeographicExtent,
    SpatialTemporalExtent, TemporalExtent, TemporalPrimitive, VerticalExtent,
};
