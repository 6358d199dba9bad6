//! The process-wide container lives for the whole test binary, so everything
//! touching it stays in one test.

use geoconform::models::{
    SimpleBoundingPolygon, SimpleCitation, SimpleCitationDate, SimpleGeographicBoundingBox,
    SimpleGeographicDescription, SimpleOnlineResource, SimpleTelephone, SimpleVerticalExtent,
};
use geoconform::{ValidatorConfig, validators};

#[test]
fn test_default_container_is_configured_once() {
    assert!(validators::configure(ValidatorConfig::advisory()).is_ok());

    let rejected = validators::configure(ValidatorConfig::default()).unwrap_err();
    assert_eq!(rejected, ValidatorConfig::default());
    assert_eq!(validators::container().config(), &ValidatorConfig::advisory());

    // Presence violations are only logged by the advisory configuration.
    assert!(validators::validate_citation(Some(&SimpleCitation::default())).is_ok());
    assert!(validators::validate_vertical_extent(Some(&SimpleVerticalExtent::default())).is_ok());
    assert!(validators::validate_citation_date(Some(&SimpleCitationDate::default())).is_ok());
    assert!(validators::validate_telephone(Some(&SimpleTelephone::default())).is_ok());
    assert!(
        validators::validate_geographic_description(Some(&SimpleGeographicDescription::default()))
            .is_ok()
    );
    assert!(validators::validate_bounding_polygon(Some(&SimpleBoundingPolygon::default())).is_ok());

    // Value checks still fail.
    let inverted = SimpleGeographicBoundingBox::new(20.0, 10.0, 0.0, 0.0);
    assert!(validators::validate_bounding_box(Some(&inverted)).is_err());
    let relative = SimpleOnlineResource::new("coastlines.zip");
    assert!(validators::validate_online_resource(Some(&relative)).is_err());
    assert!(validators::validate_extent(None).is_ok());
    assert!(validators::validate_party(None).is_ok());
}
