use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::citation::Identifier;

/// Extent of the resource: any mix of geographic, vertical and temporal parts.
pub trait Extent {
    fn description(&self) -> Option<&str> {
        None
    }

    fn geographic_elements(&self) -> Option<Vec<Option<&dyn GeographicExtent>>> {
        None
    }

    fn vertical_elements(&self) -> Option<Vec<Option<&dyn VerticalExtent>>> {
        None
    }

    fn temporal_elements(&self) -> Option<Vec<Option<&dyn TemporalExtent>>> {
        None
    }
}

/// Spatial area of the resource.
///
/// This is an open set of variants. Implementations advertise which concrete
/// variant they are by overriding the matching `as_*` probe; validators test the
/// probes in declaration order and use the first one that answers.
pub trait GeographicExtent {
    /// Whether the bounded area is included in (`true`) or excluded from the resource.
    fn inclusion(&self) -> Option<bool> {
        None
    }

    fn as_bounding_box(&self) -> Option<&dyn GeographicBoundingBox> {
        None
    }

    fn as_bounding_polygon(&self) -> Option<&dyn BoundingPolygon> {
        None
    }

    fn as_description(&self) -> Option<&dyn GeographicDescription> {
        None
    }
}

/// Geographic position of the resource, in decimal degrees.
pub trait GeographicBoundingBox: GeographicExtent {
    fn west_bound_longitude(&self) -> f64;
    fn east_bound_longitude(&self) -> f64;
    fn south_bound_latitude(&self) -> f64;
    fn north_bound_latitude(&self) -> f64;
}

/// Enclosing boundary of the resource as a closed polygon.
///
/// Geometry types are not modelled by this crate, so the contract carries no
/// accessors beyond the ones inherited from [`GeographicExtent`].
pub trait BoundingPolygon: GeographicExtent {}

/// Area of the resource given by a geographic identifier.
pub trait GeographicDescription: GeographicExtent {
    fn geographic_identifier(&self) -> Option<&dyn Identifier>;
}

/// Vertical domain of the resource.
pub trait VerticalExtent {
    fn minimum_value(&self) -> Option<f64>;
    fn maximum_value(&self) -> Option<f64>;
}

/// Time period covered by the resource.
pub trait TemporalExtent {
    fn extent(&self) -> Option<TemporalPrimitive>;

    fn as_spatial_temporal(&self) -> Option<&dyn SpatialTemporalExtent> {
        None
    }
}

/// Temporal extent that also carries the spatial extent valid for that time.
pub trait SpatialTemporalExtent: TemporalExtent {
    fn spatial_extent(&self) -> Option<Vec<Option<&dyn GeographicExtent>>>;
}

/// ISO 19108 temporal primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalPrimitive {
    Instant(DateTime<Utc>),
    Period {
        #[serde(default)]
        begin: Option<DateTime<Utc>>,
        #[serde(default)]
        end: Option<DateTime<Utc>>,
    },
}
