use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extent::Extent;

/// Standardized resource reference.
pub trait Citation {
    fn title(&self) -> Option<&str>;

    fn alternate_titles(&self) -> Option<Vec<Option<&str>>> {
        None
    }

    fn dates(&self) -> Option<Vec<Option<&dyn CitationDate>>> {
        None
    }

    fn edition(&self) -> Option<&str> {
        None
    }

    fn identifiers(&self) -> Option<Vec<Option<&dyn Identifier>>> {
        None
    }

    fn cited_responsible_parties(&self) -> Option<Vec<Option<&dyn Responsibility>>> {
        None
    }

    fn other_citation_details(&self) -> Option<&str> {
        None
    }

    fn online_resources(&self) -> Option<Vec<Option<&dyn OnlineResource>>> {
        None
    }
}

/// Reference date and the event it identifies.
pub trait CitationDate {
    fn date(&self) -> Option<DateTime<Utc>>;
    fn date_type(&self) -> Option<DateType>;
}

/// Value uniquely identifying an object within a namespace.
pub trait Identifier {
    fn code(&self) -> Option<&str>;

    fn code_space(&self) -> Option<&str> {
        None
    }

    fn version(&self) -> Option<&str> {
        None
    }

    /// Citation of the authority maintaining the code. May point back into
    /// the graph being validated.
    fn authority(&self) -> Option<&dyn Citation> {
        None
    }
}

/// Role played by one or more parties.
pub trait Responsibility {
    fn role(&self) -> Option<Role>;

    fn extents(&self) -> Option<Vec<Option<&dyn Extent>>> {
        None
    }

    fn parties(&self) -> Option<Vec<Option<&dyn Party>>>;
}

/// Individual or organisation.
pub trait Party {
    fn name(&self) -> Option<&str>;

    fn contact_info(&self) -> Option<Vec<Option<&dyn Contact>>> {
        None
    }

    fn as_individual(&self) -> Option<&dyn Individual> {
        None
    }

    fn as_organisation(&self) -> Option<&dyn Organisation> {
        None
    }
}

pub trait Individual: Party {
    fn position_name(&self) -> Option<&str> {
        None
    }
}

pub trait Organisation: Party {
    fn individuals(&self) -> Option<Vec<Option<&dyn Individual>>> {
        None
    }
}

/// Information required to contact a party.
pub trait Contact {
    fn phones(&self) -> Option<Vec<Option<&dyn Telephone>>> {
        None
    }

    fn addresses(&self) -> Option<Vec<Option<&dyn Address>>> {
        None
    }

    fn online_resources(&self) -> Option<Vec<Option<&dyn OnlineResource>>> {
        None
    }

    fn hours_of_service(&self) -> Option<&str> {
        None
    }

    fn contact_instructions(&self) -> Option<&str> {
        None
    }
}

pub trait Telephone {
    fn number(&self) -> Option<&str>;

    fn number_type(&self) -> Option<TelephoneType> {
        None
    }
}

/// Physical and e-mail address.
pub trait Address {
    fn delivery_points(&self) -> Option<Vec<Option<&str>>> {
        None
    }

    fn city(&self) -> Option<&str> {
        None
    }

    fn administrative_area(&self) -> Option<&str> {
        None
    }

    fn postal_code(&self) -> Option<&str> {
        None
    }

    fn country(&self) -> Option<&str> {
        None
    }

    fn electronic_mail_addresses(&self) -> Option<Vec<Option<&str>>> {
        None
    }
}

/// Online location where a resource can be obtained.
pub trait OnlineResource {
    /// Location as a URI.
    fn linkage(&self) -> Option<&str>;

    fn protocol(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    fn function(&self) -> Option<OnLineFunction> {
        None
    }
}

/// ISO 19115 `CI_RoleCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ResourceProvider,
    Custodian,
    Owner,
    User,
    Distributor,
    Originator,
    PointOfContact,
    PrincipalInvestigator,
    Processor,
    Publisher,
    Author,
    Sponsor,
    CoAuthor,
    Collaborator,
    Editor,
    Mediator,
    RightsHolder,
    Contributor,
    Funder,
    Stakeholder,
}

/// ISO 19115 `CI_DateTypeCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    Creation,
    Publication,
    Revision,
    Expiry,
    LastUpdate,
    LastRevision,
    NextUpdate,
    Unavailable,
    InForce,
    Adopted,
    Deprecated,
    Superseded,
    ValidityBegins,
    ValidityExpires,
    Released,
    Distribution,
}

/// ISO 19115 `CI_TelephoneTypeCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelephoneType {
    Voice,
    Facsimile,
    Sms,
}

/// ISO 19115 `CI_OnLineFunctionCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnLineFunction {
    Download,
    Information,
    OfflineAccess,
    Order,
    Search,
    CompleteMetadata,
    BrowseGraphic,
    Upload,
    EmailService,
    Browsing,
    FileAccess,
}
