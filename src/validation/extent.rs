use std::sync::Arc;

use super::assert::{assert_between, assert_not_null, assert_true, non_null_elements};
use super::config::ValidatorConfig;
use super::container::Context;
use super::error::Result;
use super::validator::{Package, Presence, Validator};
use crate::metadata::{
    BoundingPolygon, Extent, GeographicBoundingBox, GeographicDescription, GeographicExtent,
    TemporalExtent, TemporalPrimitive, VerticalExtent,
};

/// Bounds are in decimal degrees.
const ANGULAR_TOLERANCE: f64 = Validator::DEFAULT_TOLERANCE;

/// Validates [`Extent`] and related objects.
#[derive(Debug, Clone)]
pub struct ExtentValidator {
    base: Validator,
}

impl ExtentValidator {
    pub fn new(config: Arc<ValidatorConfig>) -> Self {
        Self {
            base: Validator::new(config, Package::Extent),
        }
    }

    pub fn base(&self) -> &Validator {
        &self.base
    }

    pub fn validate(&self, ctx: &Context<'_>, object: Option<&dyn Extent>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let description = object.description();
        let mut has_content = !description.is_absent();

        let geographic = non_null_elements(
            "Extent: geographic elements can not contain null element.",
            object.geographic_elements(),
        )?;
        for element in &geographic {
            ctx.validate_geographic_extent(Some(*element))?;
        }

        let vertical = non_null_elements(
            "Extent: vertical elements can not contain null element.",
            object.vertical_elements(),
        )?;
        for element in &vertical {
            ctx.validate_vertical_extent(Some(*element))?;
        }

        let temporal = non_null_elements(
            "Extent: temporal elements can not contain null element.",
            object.temporal_elements(),
        )?;
        for element in &temporal {
            ctx.validate_temporal_extent(Some(*element))?;
        }

        has_content |= !geographic.is_empty() || !vertical.is_empty() || !temporal.is_empty();
        self.base.mandatory(
            "Extent: at least one of description, geographic, vertical or temporal elements shall be provided.",
            &has_content.then_some(true),
        )
    }

    /// Routes to the first variant the object answers to: bounding box,
    /// bounding polygon, then geographic description. Unknown variants pass.
    pub fn dispatch(&self, ctx: &Context<'_>, object: Option<&dyn GeographicExtent>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        if let Some(bbox) = object.as_bounding_box() {
            self.validate_bounding_box(ctx, Some(bbox))
        } else if let Some(polygon) = object.as_bounding_polygon() {
            self.validate_bounding_polygon(ctx, Some(polygon))
        } else if let Some(description) = object.as_description() {
            self.validate_description(ctx, Some(description))
        } else {
            self.base
                .package()
                .debug("Geographic extent of unknown kind, not checked");
            Ok(())
        }
    }

    /// Bounds must lie in [-180, 180] × [-90, 90] with west ≤ east and
    /// south ≤ north. These are value rules: configuration never downgrades them.
    pub fn validate_bounding_box(
        &self,
        _ctx: &Context<'_>,
        object: Option<&dyn GeographicBoundingBox>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let west = object.west_bound_longitude();
        let east = object.east_bound_longitude();
        let south = object.south_bound_latitude();
        let north = object.north_bound_latitude();

        assert_between(
            "GeographicBoundingBox: illegal west bound.",
            -180.0,
            180.0,
            snap(west, 180.0),
        )?;
        assert_between(
            "GeographicBoundingBox: illegal east bound.",
            -180.0,
            180.0,
            snap(east, 180.0),
        )?;
        assert_between(
            "GeographicBoundingBox: illegal south bound.",
            -90.0,
            90.0,
            snap(south, 90.0),
        )?;
        assert_between(
            "GeographicBoundingBox: illegal north bound.",
            -90.0,
            90.0,
            snap(north, 90.0),
        )?;
        assert_true(
            "GeographicBoundingBox: invalid range of longitudes (west bound is greater than east bound).",
            west <= east + ANGULAR_TOLERANCE,
        )?;
        assert_true(
            "GeographicBoundingBox: invalid range of latitudes (south bound is greater than north bound).",
            south <= north + ANGULAR_TOLERANCE,
        )
    }

    /// Polygon geometry is not checked: the geometry model lives outside this
    /// crate. Reaching this method says nothing about the polygon's validity.
    pub fn validate_bounding_polygon(
        &self,
        _ctx: &Context<'_>,
        object: Option<&dyn BoundingPolygon>,
    ) -> Result<()> {
        if object.is_some() {
            self.base
                .package()
                .debug("Bounding polygon geometry is not checked");
        }
        Ok(())
    }

    pub fn validate_description(
        &self,
        ctx: &Context<'_>,
        object: Option<&dyn GeographicDescription>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let identifier = object.geographic_identifier();
        self.base.mandatory(
            "GeographicDescription: must have an identifier.",
            &identifier,
        )?;
        ctx.validate_identifier(identifier)
    }

    pub fn validate_vertical(
        &self,
        _ctx: &Context<'_>,
        object: Option<&dyn VerticalExtent>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let minimum = object.minimum_value();
        let maximum = object.maximum_value();
        self.base
            .mandatory("VerticalExtent: must have a minimum value.", &minimum)?;
        self.base
            .mandatory("VerticalExtent: must have a maximum value.", &maximum)?;
        if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
            assert_true(
                "VerticalExtent: minimum value is greater than maximum value.",
                minimum <= maximum,
            )?;
        }
        Ok(())
    }

    pub fn validate_temporal(
        &self,
        ctx: &Context<'_>,
        object: Option<&dyn TemporalExtent>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let extent = object.extent();
        self.base
            .mandatory("TemporalExtent: must have a temporal primitive.", &extent)?;
        if let Some(TemporalPrimitive::Period { begin, end }) = extent {
            self.base
                .mandatory("TemporalExtent: period must have a beginning.", &begin)?;
            self.base
                .mandatory("TemporalExtent: period must have an end.", &end)?;
            if let (Some(begin), Some(end)) = (begin, end) {
                assert_true(
                    "TemporalExtent: period begins after it ends.",
                    begin <= end,
                )?;
            }
        }

        if let Some(object) = object.as_spatial_temporal() {
            let spatial = object.spatial_extent();
            self.base.mandatory(
                "SpatialTemporalExtent: must have at least one spatial extent.",
                &spatial,
            )?;
            for element in spatial.iter().flatten() {
                assert_not_null(
                    "SpatialTemporalExtent: spatial extent can not contain null element.",
                    element,
                )?;
                ctx.validate_geographic_extent(*element)?;
            }
        }
        Ok(())
    }
}

/// Moves a bound lying within tolerance of ±`limit` onto the limit, so that
/// rounding noise from unit conversions does not fail the range check.
fn snap(value: f64, limit: f64) -> f64 {
    if (value.abs() - limit).abs() <= ANGULAR_TOLERANCE {
        limit.copysign(value)
    } else {
        value
    }
}
