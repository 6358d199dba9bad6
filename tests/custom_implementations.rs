//! Metadata objects implemented directly against the traits, the way a
//! third-party library would.

use geoconform::metadata::{
    Citation, GeographicBoundingBox, GeographicDescription, GeographicExtent, Identifier,
    TemporalExtent, TemporalPrimitive,
};
use geoconform::models::{
    SimpleCitation, SimpleExtent, SimpleGeographicBoundingBox, SimpleGeographicExtent,
    SimpleIdentifier,
};
use geoconform::{ValidationError, ValidatorConfig, ValidatorContainer};

/// Answers to both the bounding box and the description probe.
struct Ambiguous;

impl GeographicExtent for Ambiguous {
    fn as_bounding_box(&self) -> Option<&dyn GeographicBoundingBox> {
        Some(self)
    }

    fn as_description(&self) -> Option<&dyn GeographicDescription> {
        Some(self)
    }
}

impl GeographicBoundingBox for Ambiguous {
    fn west_bound_longitude(&self) -> f64 {
        2.0
    }

    fn east_bound_longitude(&self) -> f64 {
        8.0
    }

    fn south_bound_latitude(&self) -> f64 {
        46.0
    }

    fn north_bound_latitude(&self) -> f64 {
        51.0
    }
}

impl GeographicDescription for Ambiguous {
    fn geographic_identifier(&self) -> Option<&dyn Identifier> {
        None
    }
}

/// Matches none of the known geographic extent variants.
struct Opaque;

impl GeographicExtent for Opaque {}

/// A citation whose identifier names the citation itself as authority.
struct SelfCiting;

impl Citation for SelfCiting {
    fn title(&self) -> Option<&str> {
        Some("Self-citing catalogue")
    }

    fn identifiers(&self) -> Option<Vec<Option<&dyn Identifier>>> {
        Some(vec![Some(self as &dyn Identifier)])
    }
}

impl Identifier for SelfCiting {
    fn code(&self) -> Option<&str> {
        Some("loop")
    }

    fn authority(&self) -> Option<&dyn Citation> {
        Some(self)
    }
}

struct FixedInstant;

impl TemporalExtent for FixedInstant {
    fn extent(&self) -> Option<TemporalPrimitive> {
        Some(TemporalPrimitive::Instant(
            "2024-03-20T03:06:00Z".parse().unwrap(),
        ))
    }
}

#[test]
fn test_first_matching_variant_wins() {
    let container = ValidatorContainer::new(ValidatorConfig::default());
    // Validated as a bounding box; the description rules would have failed.
    assert!(container.validate_geographic_extent(Some(&Ambiguous)).is_ok());
    assert!(
        container
            .validate_geographic_description(Some(&Ambiguous))
            .is_err()
    );
}

#[test]
fn test_unknown_variant_is_accepted() {
    let container = ValidatorContainer::new(ValidatorConfig::default());
    assert!(container.validate_geographic_extent(Some(&Opaque)).is_ok());
}

#[test]
fn test_cyclic_graph_terminates() {
    let container = ValidatorContainer::new(ValidatorConfig::default());
    assert_eq!(
        container.validate_citation(Some(&SelfCiting)),
        Err(ValidationError::DepthExceeded {
            limit: ValidatorConfig::DEFAULT_MAX_DEPTH
        })
    );
}

#[test]
fn test_depth_limit_is_configurable() {
    let citation = SimpleCitation {
        identifiers: Some(vec![Some(SimpleIdentifier {
            authority: Some(Box::new(SimpleCitation::new("Authority"))),
            ..SimpleIdentifier::new("ID-1")
        })]),
        ..SimpleCitation::new("Cited")
    };

    let shallow = ValidatorContainer::new(ValidatorConfig {
        max_depth: 2,
        ..ValidatorConfig::default()
    });
    assert_eq!(
        shallow.validate_citation(Some(&citation)),
        Err(ValidationError::DepthExceeded { limit: 2 })
    );

    let enough = ValidatorContainer::new(ValidatorConfig {
        max_depth: 3,
        ..ValidatorConfig::default()
    });
    assert!(enough.validate_citation(Some(&citation)).is_ok());
}

#[test]
fn test_temporal_instant_is_valid() {
    let container = ValidatorContainer::new(ValidatorConfig::default());
    assert!(container.validate_temporal_extent(Some(&FixedInstant)).is_ok());
}

#[test]
fn test_container_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ValidatorContainer>();

    let container = ValidatorContainer::new(ValidatorConfig::default());
    let good = SimpleExtent {
        geographic_elements: Some(vec![Some(SimpleGeographicExtent::BoundingBox(
            SimpleGeographicBoundingBox::WORLD,
        ))]),
        ..SimpleExtent::default()
    };
    let bad = SimpleGeographicBoundingBox::new(0.0, 1.0, 10.0, -10.0);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(container.validate_extent(Some(&good)).is_ok());
                assert!(container.validate_bounding_box(Some(&bad)).is_err());
            });
        }
    });
}
