use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::citation::SimpleIdentifier;
use super::view;
use crate::metadata::{
    BoundingPolygon, Extent, GeographicBoundingBox, GeographicDescription, GeographicExtent,
    Identifier, SpatialTemporalExtent, TemporalExtent, TemporalPrimitive, VerticalExtent,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleExtent {
    pub description: Option<String>,
    pub geographic_elements: Option<Vec<Option<SimpleGeographicExtent>>>,
    pub vertical_elements: Option<Vec<Option<SimpleVerticalExtent>>>,
    pub temporal_elements: Option<Vec<Option<SimpleTemporalExtent>>>,
}

impl Extent for SimpleExtent {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn geographic_elements(&self) -> Option<Vec<Option<&dyn GeographicExtent>>> {
        view(&self.geographic_elements, |e| e as &dyn GeographicExtent)
    }

    fn vertical_elements(&self) -> Option<Vec<Option<&dyn VerticalExtent>>> {
        view(&self.vertical_elements, |e| e as &dyn VerticalExtent)
    }

    fn temporal_elements(&self) -> Option<Vec<Option<&dyn TemporalExtent>>> {
        view(&self.temporal_elements, |e| e as &dyn TemporalExtent)
    }
}

/// One of the three geographic extent variants, tagged by `kind` in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimpleGeographicExtent {
    BoundingBox(SimpleGeographicBoundingBox),
    BoundingPolygon(SimpleBoundingPolygon),
    Description(SimpleGeographicDescription),
}

impl GeographicExtent for SimpleGeographicExtent {
    fn inclusion(&self) -> Option<bool> {
        match self {
            Self::BoundingBox(e) => e.inclusion,
            Self::BoundingPolygon(e) => e.inclusion,
            Self::Description(e) => e.inclusion,
        }
    }

    fn as_bounding_box(&self) -> Option<&dyn GeographicBoundingBox> {
        match self {
            Self::BoundingBox(e) => Some(e),
            _ => None,
        }
    }

    fn as_bounding_polygon(&self) -> Option<&dyn BoundingPolygon> {
        match self {
            Self::BoundingPolygon(e) => Some(e),
            _ => None,
        }
    }

    fn as_description(&self) -> Option<&dyn GeographicDescription> {
        match self {
            Self::Description(e) => Some(e),
            _ => None,
        }
    }
}

/// Bounds in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleGeographicBoundingBox {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusion: Option<bool>,
}

impl SimpleGeographicBoundingBox {
    pub const WORLD: Self = Self::new(-180.0, 180.0, -90.0, 90.0);

    pub const fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
            inclusion: Some(true),
        }
    }
}

impl GeographicExtent for SimpleGeographicBoundingBox {
    fn inclusion(&self) -> Option<bool> {
        self.inclusion
    }

    fn as_bounding_box(&self) -> Option<&dyn GeographicBoundingBox> {
        Some(self)
    }
}

impl GeographicBoundingBox for SimpleGeographicBoundingBox {
    fn west_bound_longitude(&self) -> f64 {
        self.west
    }

    fn east_bound_longitude(&self) -> f64 {
        self.east
    }

    fn south_bound_latitude(&self) -> f64 {
        self.south
    }

    fn north_bound_latitude(&self) -> f64 {
        self.north
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleBoundingPolygon {
    pub inclusion: Option<bool>,
}

impl GeographicExtent for SimpleBoundingPolygon {
    fn inclusion(&self) -> Option<bool> {
        self.inclusion
    }

    fn as_bounding_polygon(&self) -> Option<&dyn BoundingPolygon> {
        Some(self)
    }
}

impl BoundingPolygon for SimpleBoundingPolygon {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleGeographicDescription {
    pub geographic_identifier: Option<SimpleIdentifier>,
    pub inclusion: Option<bool>,
}

impl GeographicExtent for SimpleGeographicDescription {
    fn inclusion(&self) -> Option<bool> {
        self.inclusion
    }

    fn as_description(&self) -> Option<&dyn GeographicDescription> {
        Some(self)
    }
}

impl GeographicDescription for SimpleGeographicDescription {
    fn geographic_identifier(&self) -> Option<&dyn Identifier> {
        self.geographic_identifier
            .as_ref()
            .map(|e| e as &dyn Identifier)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleVerticalExtent {
    pub minimum_value: Option<f64>,
    pub maximum_value: Option<f64>,
}

impl SimpleVerticalExtent {
    pub fn new(minimum_value: f64, maximum_value: f64) -> Self {
        Self {
            minimum_value: Some(minimum_value),
            maximum_value: Some(maximum_value),
        }
    }
}

impl VerticalExtent for SimpleVerticalExtent {
    fn minimum_value(&self) -> Option<f64> {
        self.minimum_value
    }

    fn maximum_value(&self) -> Option<f64> {
        self.maximum_value
    }
}

/// Temporal extent given either as an instant or as a `begin`/`end` period.
///
/// Deserialization rejects an instant combined with period bounds. Built in
/// code, such a value reports the instant.
///
/// Setting `spatial_extent` (even to an empty list) makes this a
/// [`SpatialTemporalExtent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TemporalExtentFields")]
pub struct SimpleTemporalExtent {
    pub instant: Option<DateTime<Utc>>,
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub spatial_extent: Option<Vec<Option<SimpleGeographicExtent>>>,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TemporalExtentFields {
    instant: Option<DateTime<Utc>>,
    begin: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    spatial_extent: Option<Vec<Option<SimpleGeographicExtent>>>,
}

impl TryFrom<TemporalExtentFields> for SimpleTemporalExtent {
    type Error = String;

    fn try_from(fields: TemporalExtentFields) -> Result<Self, Self::Error> {
        if fields.instant.is_some() && (fields.begin.is_some() || fields.end.is_some()) {
            return Err(
                "temporal extent is either an `instant` or a `begin`/`end` period, not both"
                    .to_string(),
            );
        }
        Ok(Self {
            instant: fields.instant,
            begin: fields.begin,
            end: fields.end,
            spatial_extent: fields.spatial_extent,
        })
    }
}

impl SimpleTemporalExtent {
    pub fn period(begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            begin: Some(begin),
            end: Some(end),
            ..Self::default()
        }
    }
}

impl TemporalExtent for SimpleTemporalExtent {
    fn extent(&self) -> Option<TemporalPrimitive> {
        match (self.instant, self.begin, self.end) {
            (Some(instant), _, _) => Some(TemporalPrimitive::Instant(instant)),
            (None, None, None) => None,
            (None, begin, end) => Some(TemporalPrimitive::Period { begin, end }),
        }
    }

    fn as_spatial_temporal(&self) -> Option<&dyn SpatialTemporalExtent> {
        self.spatial_extent.as_ref().map(|_| self as &dyn SpatialTemporalExtent)
    }
}

impl SpatialTemporalExtent for SimpleTemporalExtent {
    fn spatial_extent(&self) -> Option<Vec<Option<&dyn GeographicExtent>>> {
        view(&self.spatial_extent, |e| e as &dyn GeographicExtent)
    }
}
