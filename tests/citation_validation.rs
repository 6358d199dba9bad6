use std::io;
use std::sync::{Arc, Mutex};

use geoconform::models::{SimpleCitation, SimpleOnlineResource, SimpleResponsibility};
use geoconform::{ValidationError, ValidatorConfig, ValidatorContainer};

fn citation(yaml: &str) -> SimpleCitation {
    serde_yaml::from_str(yaml).unwrap()
}

fn strict() -> ValidatorContainer {
    ValidatorContainer::new(ValidatorConfig::default())
}

fn lenient() -> ValidatorContainer {
    ValidatorContainer::new(ValidatorConfig::advisory())
}

const COMPLETE: &str = r#"
title: Global Self-consistent Hierarchical High-resolution Geography
alternate_titles: [GSHHG]
edition: "2.3.7"
dates:
  - date: "2017-06-15T00:00:00Z"
    date_type: publication
identifiers:
  - code: GSHHG
    code_space: NOAA
    authority:
      title: National Oceanic and Atmospheric Administration
cited_responsible_parties:
  - role: originator
    extents:
      - geographic_elements:
          - kind: bounding_box
            west: -180
            east: 180
            south: -90
            north: 90
    parties:
      - kind: individual
        name: Paul Wessel
        contact_info:
          - phones:
              - number: "+1 808 956 4778"
                number_type: voice
            addresses:
              - delivery_points: ["1680 East-West Road"]
                city: Honolulu
                country: USA
                electronic_mail_addresses: [pwessel@hawaii.edu]
      - kind: organisation
        name: University of Hawaii
        individuals:
          - position_name: Data steward
online_resources:
  - linkage: https://www.soest.hawaii.edu/pwessel/gshhg/
    function: download
"#;

#[test]
fn test_complete_citation_is_valid() {
    let citation = citation(COMPLETE);
    assert!(strict().validate_citation(Some(&citation)).is_ok());
}

#[test]
fn test_missing_title() {
    let citation = SimpleCitation::default();
    assert_eq!(
        strict().validate_citation(Some(&citation)),
        Err(ValidationError::missing("Citation: must have a title."))
    );
    assert!(lenient().validate_citation(Some(&citation)).is_ok());
}

#[test]
fn test_null_identifier_element_fails_in_advisory_mode() {
    let citation = citation(
        r#"
title: Example
identifiers: [~]
"#,
    );
    assert!(matches!(
        lenient().validate_citation(Some(&citation)),
        Err(ValidationError::Inconsistent { .. })
    ));
}

#[test]
fn test_identifier_authority_is_validated() {
    let citation = citation(
        r#"
title: Example
identifiers:
  - code: EX
    authority:
      edition: untitled authority
"#,
    );
    assert_eq!(
        strict().validate_citation(Some(&citation)),
        Err(ValidationError::missing("Citation: must have a title."))
    );
}

#[test]
fn test_citation_date_requires_type() {
    let citation = citation(
        r#"
title: Example
dates:
  - date: "2020-01-01T00:00:00Z"
"#,
    );
    assert_eq!(
        strict().validate_citation(Some(&citation)),
        Err(ValidationError::missing("CitationDate: must have a date type."))
    );
}

#[test]
fn test_responsibility_requires_parties() {
    let responsibility: SimpleResponsibility = serde_yaml::from_str("role: author\n").unwrap();
    assert_eq!(
        strict().validate_responsibility(Some(&responsibility)),
        Err(ValidationError::missing(
            "Responsibility: must have at least one party."
        ))
    );
    assert!(lenient().validate_responsibility(Some(&responsibility)).is_ok());

    let empty: SimpleResponsibility =
        serde_yaml::from_str("role: author\nparties: []\n").unwrap();
    assert!(strict().validate_responsibility(Some(&empty)).is_err());
}

#[test]
fn test_responsibility_extents_are_validated() {
    let citation = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: custodian
    parties:
      - kind: organisation
        name: Example Org
    extents:
      - vertical_elements:
          - minimum_value: 100
            maximum_value: 10
"#,
    );
    assert_eq!(
        lenient().validate_citation(Some(&citation)),
        Err(ValidationError::inconsistent(
            "VerticalExtent: minimum value is greater than maximum value."
        ))
    );
}

#[test]
fn test_individual_needs_name_or_position() {
    let with_position = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: point_of_contact
    parties:
      - kind: individual
        position_name: Help desk
"#,
    );
    assert!(strict().validate_citation(Some(&with_position)).is_ok());

    let anonymous = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: point_of_contact
    parties:
      - kind: individual
        name: ""
"#,
    );
    assert_eq!(
        strict().validate_citation(Some(&anonymous)),
        Err(ValidationError::missing(
            "Individual: must have a name or a position name."
        ))
    );
}

#[test]
fn test_organisation_members_are_validated() {
    let citation = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: publisher
    parties:
      - kind: organisation
        name: Example Org
        individuals:
          - {}
"#,
    );
    assert_eq!(
        strict().validate_citation(Some(&citation)),
        Err(ValidationError::missing(
            "Individual: must have a name or a position name."
        ))
    );
}

#[test]
fn test_organisation_requires_name() {
    let citation = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: publisher
    parties:
      - kind: organisation
"#,
    );
    assert_eq!(
        strict().validate_citation(Some(&citation)),
        Err(ValidationError::missing("Organisation: must have a name."))
    );
}

#[test]
fn test_null_address_line_fails() {
    let citation = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: distributor
    parties:
      - kind: organisation
        name: Example Org
        contact_info:
          - addresses:
              - delivery_points: ["1 Main Street", ~]
"#,
    );
    assert_eq!(
        lenient().validate_citation(Some(&citation)),
        Err(ValidationError::inconsistent(
            "Address: delivery points can not contain null element."
        ))
    );
}

#[test]
fn test_online_resource_linkage_must_be_a_uri() {
    let container = lenient();
    assert!(
        container
            .validate_online_resource(Some(&SimpleOnlineResource::new("ftp://ftp.example.org/data")))
            .is_ok()
    );

    let relative = SimpleOnlineResource::new("data/coastlines.zip");
    let error = container
        .validate_online_resource(Some(&relative))
        .unwrap_err();
    assert!(!error.is_presence_violation());
    assert!(error.to_string().contains("data/coastlines.zip"));
}

#[test]
fn test_online_resource_requires_linkage() {
    let resource = SimpleOnlineResource::default();
    assert_eq!(
        strict().validate_online_resource(Some(&resource)),
        Err(ValidationError::missing("OnlineResource: must have a linkage."))
    );
    assert!(lenient().validate_online_resource(Some(&resource)).is_ok());
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_warnings<T>(validation: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, validation);
    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    (result, output)
}

#[test]
fn test_downgraded_violation_is_logged_with_failure_message() {
    let citation = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: point_of_contact
    parties:
      - kind: individual
        name: Jane Doe
        contact_info:
          - phones:
              - number_type: sms
"#,
    );

    let strict_error = strict().validate_citation(Some(&citation)).unwrap_err();
    let (result, output) = capture_warnings(|| lenient().validate_citation(Some(&citation)));
    assert!(result.is_ok());
    assert!(output.contains("WARN"));
    assert!(output.contains(&strict_error.to_string()));
    assert!(output.contains("package=citation"));
}

#[test]
fn test_each_package_logs_under_its_own_target() {
    let citation = citation(
        r#"
title: Example
cited_responsible_parties:
  - role: custodian
    parties:
      - kind: organisation
    extents:
      - vertical_elements:
          - maximum_value: 10
"#,
    );

    let (result, output) = capture_warnings(|| lenient().validate_citation(Some(&citation)));
    assert!(result.is_ok());

    let citation_line = output
        .lines()
        .find(|line| line.contains("Organisation: must have a name."))
        .unwrap();
    assert!(citation_line.contains("geoconform::citation"));

    let extent_line = output
        .lines()
        .find(|line| line.contains("VerticalExtent: must have a minimum value."))
        .unwrap();
    assert!(extent_line.contains("geoconform::extent"));
    assert!(extent_line.contains("package=extent"));
}
