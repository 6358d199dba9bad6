use std::sync::Arc;

use tracing::{debug, warn};

use super::citation::CitationValidator;
use super::config::ValidatorConfig;
use super::error::{Result, ValidationError};
use super::extent::ExtentValidator;
use crate::metadata::{
    Address, BoundingPolygon, Citation, CitationDate, Contact, Extent, GeographicBoundingBox,
    GeographicDescription, GeographicExtent, Identifier, Individual, OnlineResource, Organisation,
    Party, Responsibility, Telephone, TemporalExtent, VerticalExtent,
};

/// One validator per standard package, all sharing one configuration.
///
/// Package validators never call each other directly: nested objects are
/// handed back to the container through a [`Context`], which keeps the policy
/// and the depth accounting identical across the whole graph.
#[derive(Debug, Clone)]
pub struct ValidatorContainer {
    config: Arc<ValidatorConfig>,
    pub citation: CitationValidator,
    pub extent: ExtentValidator,
}

impl ValidatorContainer {
    /// A `max_depth` below [`ValidatorConfig::MIN_DEPTH`] is raised to it,
    /// with a warning.
    pub fn new(mut config: ValidatorConfig) -> Self {
        if let Err(error) = config.check() {
            warn!("{error}, using {}", ValidatorConfig::MIN_DEPTH);
            config.max_depth = ValidatorConfig::MIN_DEPTH;
        }
        let config = Arc::new(config);
        debug!(
            require_mandatory = config.require_mandatory_attributes,
            enforce_forbidden = config.enforce_forbidden_attributes,
            max_depth = config.max_depth,
            "Creating validator container"
        );
        Self {
            citation: CitationValidator::new(Arc::clone(&config)),
            extent: ExtentValidator::new(Arc::clone(&config)),
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Context for a new validation pass starting at the root object.
    pub fn root(&self) -> Context<'_> {
        Context {
            container: self,
            depth: 0,
        }
    }

    /// Routes an object whose type is only known at run time.
    pub fn dispatch(&self, object: Option<Target<'_>>) -> Result<()> {
        self.root().dispatch(object)
    }

    pub fn validate_citation(&self, object: Option<&dyn Citation>) -> Result<()> {
        self.root().validate_citation(object)
    }

    pub fn validate_citation_date(&self, object: Option<&dyn CitationDate>) -> Result<()> {
        self.root().validate_citation_date(object)
    }

    pub fn validate_identifier(&self, object: Option<&dyn Identifier>) -> Result<()> {
        self.root().validate_identifier(object)
    }

    pub fn validate_responsibility(&self, object: Option<&dyn Responsibility>) -> Result<()> {
        self.root().validate_responsibility(object)
    }

    pub fn validate_party(&self, object: Option<&dyn Party>) -> Result<()> {
        self.root().validate_party(object)
    }

    pub fn validate_individual(&self, object: Option<&dyn Individual>) -> Result<()> {
        self.root().validate_individual(object)
    }

    pub fn validate_organisation(&self, object: Option<&dyn Organisation>) -> Result<()> {
        self.root().validate_organisation(object)
    }

    pub fn validate_contact(&self, object: Option<&dyn Contact>) -> Result<()> {
        self.root().validate_contact(object)
    }

    pub fn validate_telephone(&self, object: Option<&dyn Telephone>) -> Result<()> {
        self.root().validate_telephone(object)
    }

    pub fn validate_address(&self, object: Option<&dyn Address>) -> Result<()> {
        self.root().validate_address(object)
    }

    pub fn validate_online_resource(&self, object: Option<&dyn OnlineResource>) -> Result<()> {
        self.root().validate_online_resource(object)
    }

    pub fn validate_extent(&self, object: Option<&dyn Extent>) -> Result<()> {
        self.root().validate_extent(object)
    }

    pub fn validate_geographic_extent(&self, object: Option<&dyn GeographicExtent>) -> Result<()> {
        self.root().validate_geographic_extent(object)
    }

    pub fn validate_bounding_box(&self, object: Option<&dyn GeographicBoundingBox>) -> Result<()> {
        self.root().validate_bounding_box(object)
    }

    pub fn validate_bounding_polygon(&self, object: Option<&dyn BoundingPolygon>) -> Result<()> {
        self.root().validate_bounding_polygon(object)
    }

    pub fn validate_geographic_description(
        &self,
        object: Option<&dyn GeographicDescription>,
    ) -> Result<()> {
        self.root().validate_geographic_description(object)
    }

    pub fn validate_vertical_extent(&self, object: Option<&dyn VerticalExtent>) -> Result<()> {
        self.root().validate_vertical_extent(object)
    }

    pub fn validate_temporal_extent(&self, object: Option<&dyn TemporalExtent>) -> Result<()> {
        self.root().validate_temporal_extent(object)
    }
}

impl Default for ValidatorContainer {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Any object the container knows how to validate.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Citation(&'a dyn Citation),
    CitationDate(&'a dyn CitationDate),
    Identifier(&'a dyn Identifier),
    Responsibility(&'a dyn Responsibility),
    Party(&'a dyn Party),
    Contact(&'a dyn Contact),
    Telephone(&'a dyn Telephone),
    Address(&'a dyn Address),
    OnlineResource(&'a dyn OnlineResource),
    Extent(&'a dyn Extent),
    GeographicExtent(&'a dyn GeographicExtent),
    VerticalExtent(&'a dyn VerticalExtent),
    TemporalExtent(&'a dyn TemporalExtent),
}

/// Position of one validation call inside the object graph.
///
/// Every hop through the context goes one level deeper; past
/// [`ValidatorConfig::max_depth`] the walk stops with
/// [`ValidationError::DepthExceeded`], which is how cyclic graphs terminate.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    container: &'a ValidatorContainer,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn container(&self) -> &'a ValidatorContainer {
        self.container
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn descend(&self) -> Result<Context<'a>> {
        let limit = self.container.config.max_depth;
        if self.depth >= limit {
            return Err(ValidationError::DepthExceeded { limit });
        }
        Ok(Context {
            container: self.container,
            depth: self.depth + 1,
        })
    }

    pub fn dispatch(&self, object: Option<Target<'_>>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        match object {
            Target::Citation(o) => self.validate_citation(Some(o)),
            Target::CitationDate(o) => self.validate_citation_date(Some(o)),
            Target::Identifier(o) => self.validate_identifier(Some(o)),
            Target::Responsibility(o) => self.validate_responsibility(Some(o)),
            Target::Party(o) => self.validate_party(Some(o)),
            Target::Contact(o) => self.validate_contact(Some(o)),
            Target::Telephone(o) => self.validate_telephone(Some(o)),
            Target::Address(o) => self.validate_address(Some(o)),
            Target::OnlineResource(o) => self.validate_online_resource(Some(o)),
            Target::Extent(o) => self.validate_extent(Some(o)),
            Target::GeographicExtent(o) => self.validate_geographic_extent(Some(o)),
            Target::VerticalExtent(o) => self.validate_vertical_extent(Some(o)),
            Target::TemporalExtent(o) => self.validate_temporal_extent(Some(o)),
        }
    }

    pub fn validate_citation(&self, object: Option<&dyn Citation>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate(&next, Some(object))
    }

    pub fn validate_citation_date(&self, object: Option<&dyn CitationDate>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate_date(&next, Some(object))
    }

    pub fn validate_identifier(&self, object: Option<&dyn Identifier>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate_identifier(&next, Some(object))
    }

    pub fn validate_responsibility(&self, object: Option<&dyn Responsibility>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container
            .citation
            .validate_responsibility(&next, Some(object))
    }

    pub fn validate_party(&self, object: Option<&dyn Party>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.dispatch_party(&next, Some(object))
    }

    pub fn validate_individual(&self, object: Option<&dyn Individual>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate_individual(&next, Some(object))
    }

    pub fn validate_organisation(&self, object: Option<&dyn Organisation>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container
            .citation
            .validate_organisation(&next, Some(object))
    }

    pub fn validate_contact(&self, object: Option<&dyn Contact>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate_contact(&next, Some(object))
    }

    pub fn validate_telephone(&self, object: Option<&dyn Telephone>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate_telephone(&next, Some(object))
    }

    pub fn validate_address(&self, object: Option<&dyn Address>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.citation.validate_address(&next, Some(object))
    }

    pub fn validate_online_resource(&self, object: Option<&dyn OnlineResource>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container
            .citation
            .validate_online_resource(&next, Some(object))
    }

    pub fn validate_extent(&self, object: Option<&dyn Extent>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.extent.validate(&next, Some(object))
    }

    pub fn validate_geographic_extent(&self, object: Option<&dyn GeographicExtent>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.extent.dispatch(&next, Some(object))
    }

    pub fn validate_bounding_box(&self, object: Option<&dyn GeographicBoundingBox>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.extent.validate_bounding_box(&next, Some(object))
    }

    pub fn validate_bounding_polygon(&self, object: Option<&dyn BoundingPolygon>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container
            .extent
            .validate_bounding_polygon(&next, Some(object))
    }

    pub fn validate_geographic_description(
        &self,
        object: Option<&dyn GeographicDescription>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container
            .extent
            .validate_description(&next, Some(object))
    }

    pub fn validate_vertical_extent(&self, object: Option<&dyn VerticalExtent>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.extent.validate_vertical(&next, Some(object))
    }

    pub fn validate_temporal_extent(&self, object: Option<&dyn TemporalExtent>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let next = self.descend()?;
        self.container.extent.validate_temporal(&next, Some(object))
    }
}
