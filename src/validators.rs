//! Process-wide default container.
//!
//! Convenient when one configuration is used for a whole test suite: call
//! [`configure`] once before the first validation, or never to keep the strict
//! defaults.

use once_cell::sync::OnceCell;

use crate::metadata::{
    Address, BoundingPolygon, Citation, CitationDate, Contact, Extent, GeographicBoundingBox,
    GeographicDescription, GeographicExtent, Identifier, Individual, OnlineResource, Organisation,
    Party, Responsibility, Telephone, TemporalExtent, VerticalExtent,
};
use crate::validation::{Result, Target, ValidatorConfig, ValidatorContainer};

static DEFAULT: OnceCell<ValidatorContainer> = OnceCell::new();

/// Installs the configuration of the default container.
///
/// Fails, returning the rejected configuration, once the default container
/// exists (either configured earlier or created by a first validation).
pub fn configure(config: ValidatorConfig) -> std::result::Result<(), ValidatorConfig> {
    let mut rejected = Some(config);
    DEFAULT.get_or_init(|| match rejected.take() {
        Some(config) => ValidatorContainer::new(config),
        None => ValidatorContainer::default(),
    });
    match rejected {
        Some(config) => Err(config),
        None => Ok(()),
    }
}

pub fn container() -> &'static ValidatorContainer {
    DEFAULT.get_or_init(ValidatorContainer::default)
}

pub fn dispatch(object: Option<Target<'_>>) -> Result<()> {
    container().dispatch(object)
}

pub fn validate_citation(object: Option<&dyn Citation>) -> Result<()> {
    container().validate_citation(object)
}

pub fn validate_citation_date(object: Option<&dyn CitationDate>) -> Result<()> {
    container().validate_citation_date(object)
}

pub fn validate_identifier(object: Option<&dyn Identifier>) -> Result<()> {
    container().validate_identifier(object)
}

pub fn validate_responsibility(object: Option<&dyn Responsibility>) -> Result<()> {
    container().validate_responsibility(object)
}

pub fn validate_party(object: Option<&dyn Party>) -> Result<()> {
    container().validate_party(object)
}

pub fn validate_individual(object: Option<&dyn Individual>) -> Result<()> {
    container().validate_individual(object)
}

pub fn validate_organisation(object: Option<&dyn Organisation>) -> Result<()> {
    container().validate_organisation(object)
}

pub fn validate_contact(object: Option<&dyn Contact>) -> Result<()> {
    container().validate_contact(object)
}

pub fn validate_telephone(object: Option<&dyn Telephone>) -> Result<()> {
    container().validate_telephone(object)
}

pub fn validate_address(object: Option<&dyn Address>) -> Result<()> {
    container().validate_address(object)
}

pub fn validate_online_resource(object: Option<&dyn OnlineResource>) -> Result<()> {
    container().validate_online_resource(object)
}

pub fn validate_extent(object: Option<&dyn Extent>) -> Result<()> {
    container().validate_extent(object)
}

pub fn validate_geographic_extent(object: Option<&dyn GeographicExtent>) -> Result<()> {
    container().validate_geographic_extent(object)
}

pub fn validate_bounding_box(object: Option<&dyn GeographicBoundingBox>) -> Result<()> {
    container().validate_bounding_box(object)
}

pub fn validate_bounding_polygon(object: Option<&dyn BoundingPolygon>) -> Result<()> {
    container().validate_bounding_polygon(object)
}

pub fn validate_geographic_description(object: Option<&dyn GeographicDescription>) -> Result<()> {
    container().validate_geographic_description(object)
}

pub fn validate_vertical_extent(object: Option<&dyn VerticalExtent>) -> Result<()> {
    container().validate_vertical_extent(object)
}

pub fn validate_temporal_extent(object: Option<&dyn TemporalExtent>) -> Result<()> {
    container().validate_temporal_extent(object)
}
