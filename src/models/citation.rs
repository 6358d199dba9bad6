use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extent::SimpleExtent;
use super::{texts, view};
use crate::metadata::{
    Address, Citation, CitationDate, Contact, DateType, Extent, Identifier, Individual,
    OnLineFunction, OnlineResource, Organisation, Party, Responsibility, Role, Telephone,
    TelephoneType,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleCitation {
    pub title: Option<String>,
    pub alternate_titles: Option<Vec<Option<String>>>,
    pub dates: Option<Vec<Option<SimpleCitationDate>>>,
    pub edition: Option<String>,
    pub identifiers: Option<Vec<Option<SimpleIdentifier>>>,
    pub cited_responsible_parties: Option<Vec<Option<SimpleResponsibility>>>,
    pub other_citation_details: Option<String>,
    pub online_resources: Option<Vec<Option<SimpleOnlineResource>>>,
}

impl SimpleCitation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

impl Citation for SimpleCitation {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn alternate_titles(&self) -> Option<Vec<Option<&str>>> {
        texts(&self.alternate_titles)
    }

    fn dates(&self) -> Option<Vec<Option<&dyn CitationDate>>> {
        view(&self.dates, |e| e as &dyn CitationDate)
    }

    fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    fn identifiers(&self) -> Option<Vec<Option<&dyn Identifier>>> {
        view(&self.identifiers, |e| e as &dyn Identifier)
    }

    fn cited_responsible_parties(&self) -> Option<Vec<Option<&dyn Responsibility>>> {
        view(&self.cited_responsible_parties, |e| e as &dyn Responsibility)
    }

    fn other_citation_details(&self) -> Option<&str> {
        self.other_citation_details.as_deref()
    }

    fn online_resources(&self) -> Option<Vec<Option<&dyn OnlineResource>>> {
        view(&self.online_resources, |e| e as &dyn OnlineResource)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleCitationDate {
    pub date: Option<DateTime<Utc>>,
    pub date_type: Option<DateType>,
}

impl CitationDate for SimpleCitationDate {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    fn date_type(&self) -> Option<DateType> {
        self.date_type
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleIdentifier {
    pub code: Option<String>,
    pub code_space: Option<String>,
    pub version: Option<String>,
    pub authority: Option<Box<SimpleCitation>>,
}

impl SimpleIdentifier {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }
}

impl Identifier for SimpleIdentifier {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn code_space(&self) -> Option<&str> {
        self.code_space.as_deref()
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn authority(&self) -> Option<&dyn Citation> {
        self.authority.as_deref().map(|e| e as &dyn Citation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleResponsibility {
    pub role: Option<Role>,
    pub extents: Option<Vec<Option<SimpleExtent>>>,
    pub parties: Option<Vec<Option<SimpleParty>>>,
}

impl Responsibility for SimpleResponsibility {
    fn role(&self) -> Option<Role> {
        self.role
    }

    fn extents(&self) -> Option<Vec<Option<&dyn Extent>>> {
        view(&self.extents, |e| e as &dyn Extent)
    }

    fn parties(&self) -> Option<Vec<Option<&dyn Party>>> {
        view(&self.parties, |e| e as &dyn Party)
    }
}

/// Individual or organisation, tagged by `kind` in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimpleParty {
    Individual(SimpleIndividual),
    Organisation(SimpleOrganisation),
}

impl Party for SimpleParty {
    fn name(&self) -> Option<&str> {
        match self {
            Self::Individual(e) => e.name(),
            Self::Organisation(e) => e.name(),
        }
    }

    fn contact_info(&self) -> Option<Vec<Option<&dyn Contact>>> {
        match self {
            Self::Individual(e) => e.contact_info(),
            Self::Organisation(e) => e.contact_info(),
        }
    }

    fn as_individual(&self) -> Option<&dyn Individual> {
        match self {
            Self::Individual(e) => Some(e),
            Self::Organisation(_) => None,
        }
    }

    fn as_organisation(&self) -> Option<&dyn Organisation> {
        match self {
            Self::Individual(_) => None,
            Self::Organisation(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleIndividual {
    pub name: Option<String>,
    pub position_name: Option<String>,
    pub contact_info: Option<Vec<Option<SimpleContact>>>,
}

impl Party for SimpleIndividual {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn contact_info(&self) -> Option<Vec<Option<&dyn Contact>>> {
        view(&self.contact_info, |e| e as &dyn Contact)
    }

    fn as_individual(&self) -> Option<&dyn Individual> {
        Some(self)
    }
}

impl Individual for SimpleIndividual {
    fn position_name(&self) -> Option<&str> {
        self.position_name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleOrganisation {
    pub name: Option<String>,
    pub contact_info: Option<Vec<Option<SimpleContact>>>,
    pub individuals: Option<Vec<Option<SimpleIndividual>>>,
}

impl Party for SimpleOrganisation {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn contact_info(&self) -> Option<Vec<Option<&dyn Contact>>> {
        view(&self.contact_info, |e| e as &dyn Contact)
    }

    fn as_organisation(&self) -> Option<&dyn Organisation> {
        Some(self)
    }
}

impl Organisation for SimpleOrganisation {
    fn individuals(&self) -> Option<Vec<Option<&dyn Individual>>> {
        view(&self.individuals, |e| e as &dyn Individual)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleContact {
    pub phones: Option<Vec<Option<SimpleTelephone>>>,
    pub addresses: Option<Vec<Option<SimpleAddress>>>,
    pub online_resources: Option<Vec<Option<SimpleOnlineResource>>>,
    pub hours_of_service: Option<String>,
    pub contact_instructions: Option<String>,
}

impl Contact for SimpleContact {
    fn phones(&self) -> Option<Vec<Option<&dyn Telephone>>> {
        view(&self.phones, |e| e as &dyn Telephone)
    }

    fn addresses(&self) -> Option<Vec<Option<&dyn Address>>> {
        view(&self.addresses, |e| e as &dyn Address)
    }

    fn online_resources(&self) -> Option<Vec<Option<&dyn OnlineResource>>> {
        view(&self.online_resources, |e| e as &dyn OnlineResource)
    }

    fn hours_of_service(&self) -> Option<&str> {
        self.hours_of_service.as_deref()
    }

    fn contact_instructions(&self) -> Option<&str> {
        self.contact_instructions.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleTelephone {
    pub number: Option<String>,
    pub number_type: Option<TelephoneType>,
}

impl Telephone for SimpleTelephone {
    fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    fn number_type(&self) -> Option<TelephoneType> {
        self.number_type
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleAddress {
    pub delivery_points: Option<Vec<Option<String>>>,
    pub city: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub electronic_mail_addresses: Option<Vec<Option<String>>>,
}

impl Address for SimpleAddress {
    fn delivery_points(&self) -> Option<Vec<Option<&str>>> {
        texts(&self.delivery_points)
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn administrative_area(&self) -> Option<&str> {
        self.administrative_area.as_deref()
    }

    fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    fn electronic_mail_addresses(&self) -> Option<Vec<Option<&str>>> {
        texts(&self.electronic_mail_addresses)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleOnlineResource {
    pub linkage: Option<String>,
    pub protocol: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub function: Option<OnLineFunction>,
}

impl SimpleOnlineResource {
    pub fn new(linkage: impl Into<String>) -> Self {
        Self {
            linkage: Some(linkage.into()),
            ..Self::default()
        }
    }
}

impl OnlineResource for SimpleOnlineResource {
    fn linkage(&self) -> Option<&str> {
        self.linkage.as_deref()
    }

    fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn function(&self) -> Option<OnLineFunction> {
        self.function
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_from_yaml() {
        let citation: SimpleCitation = serde_yaml::from_str(
            r#"
title: World Ocean Atlas
alternate_titles: [WOA, ~]
identifiers:
  - code: WOA18
    authority:
      title: NOAA
cited_responsible_parties:
  - role: originator
    parties:
      - kind: organisation
        name: National Centers for Environmental Information
        individuals:
          - position_name: Data manager
"#,
        )
        .unwrap();

        assert_eq!(citation.title(), Some("World Ocean Atlas"));
        assert_eq!(citation.alternate_titles(), Some(vec![Some("WOA"), None]));

        let identifier = citation.identifiers().unwrap()[0].unwrap();
        assert_eq!(identifier.code(), Some("WOA18"));
        assert_eq!(identifier.authority().unwrap().title(), Some("NOAA"));

        let responsibility = citation.cited_responsible_parties().unwrap()[0].unwrap();
        assert_eq!(responsibility.role(), Some(Role::Originator));
        let party = responsibility.parties().unwrap()[0].unwrap();
        assert!(party.as_individual().is_none());
        let organisation = party.as_organisation().unwrap();
        let individual = organisation.individuals().unwrap()[0].unwrap();
        assert_eq!(individual.position_name(), Some("Data manager"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<SimpleTelephone, _> = serde_yaml::from_str("numbr: '+1 555'\n");
        assert!(result.is_err());
    }
}
