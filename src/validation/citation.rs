use std::sync::Arc;

use url::Url;

use super::assert::non_null_elements;
use super::config::ValidatorConfig;
use super::container::Context;
use super::error::{Result, ValidationError};
use super::validator::{Package, Presence, Validator};
use crate::metadata::{
    Address, Citation, CitationDate, Contact, Identifier, Individual, OnlineResource,
    Organisation, Party, Responsibility, Telephone,
};

/// Validates [`Citation`] and related objects: identifiers, responsible
/// parties and their contact information.
#[derive(Debug, Clone)]
pub struct CitationValidator {
    base: Validator,
}

impl CitationValidator {
    pub fn new(config: Arc<ValidatorConfig>) -> Self {
        Self {
            base: Validator::new(config, Package::Citation),
        }
    }

    pub fn base(&self) -> &Validator {
        &self.base
    }

    pub fn validate(&self, ctx: &Context<'_>, object: Option<&dyn Citation>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        self.base
            .mandatory("Citation: must have a title.", &object.title())?;
        non_null_elements(
            "Citation: alternate titles can not contain null element.",
            object.alternate_titles(),
        )?;
        for date in non_null_elements(
            "Citation: dates can not contain null element.",
            object.dates(),
        )? {
            ctx.validate_citation_date(Some(date))?;
        }
        for identifier in non_null_elements(
            "Citation: identifiers can not contain null element.",
            object.identifiers(),
        )? {
            ctx.validate_identifier(Some(identifier))?;
        }
        for responsibility in non_null_elements(
            "Citation: cited responsible parties can not contain null element.",
            object.cited_responsible_parties(),
        )? {
            ctx.validate_responsibility(Some(responsibility))?;
        }
        for resource in non_null_elements(
            "Citation: online resources can not contain null element.",
            object.online_resources(),
        )? {
            ctx.validate_online_resource(Some(resource))?;
        }
        Ok(())
    }

    pub fn validate_date(&self, _ctx: &Context<'_>, object: Option<&dyn CitationDate>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        self.base
            .mandatory("CitationDate: must have a date.", &object.date())?;
        self.base
            .mandatory("CitationDate: must have a date type.", &object.date_type())
    }

    pub fn validate_identifier(
        &self,
        ctx: &Context<'_>,
        object: Option<&dyn Identifier>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        self.base
            .mandatory("Identifier: must have a code.", &object.code())?;
        ctx.validate_citation(object.authority())
    }

    pub fn validate_responsibility(
        &self,
        ctx: &Context<'_>,
        object: Option<&dyn Responsibility>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        self.base
            .mandatory("Responsibility: must have a role.", &object.role())?;
        for extent in non_null_elements(
            "Responsibility: extents can not contain null element.",
            object.extents(),
        )? {
            ctx.validate_extent(Some(extent))?;
        }
        let parties = object.parties();
        self.base
            .mandatory("Responsibility: must have at least one party.", &parties)?;
        for party in non_null_elements(
            "Responsibility: parties can not contain null element.",
            parties,
        )? {
            ctx.validate_party(Some(party))?;
        }
        Ok(())
    }

    /// Routes to the individual or organisation checks, in that order.
    pub fn dispatch_party(&self, ctx: &Context<'_>, object: Option<&dyn Party>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        if let Some(individual) = object.as_individual() {
            self.validate_individual(ctx, Some(individual))
        } else if let Some(organisation) = object.as_organisation() {
            self.validate_organisation(ctx, Some(organisation))
        } else {
            self.base
                .package()
                .debug("Party of unknown kind, checking common properties only");
            self.validate_party_properties(ctx, object)
        }
    }

    pub fn validate_individual(
        &self,
        ctx: &Context<'_>,
        object: Option<&dyn Individual>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let name = object.name().filter(|name| !name.is_absent());
        self.base.mandatory(
            "Individual: must have a name or a position name.",
            &name.or(object.position_name()),
        )?;
        self.validate_party_properties(ctx, object)
    }

    pub fn validate_organisation(
        &self,
        ctx: &Context<'_>,
        object: Option<&dyn Organisation>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        self.base
            .mandatory("Organisation: must have a name.", &object.name())?;
        self.validate_party_properties(ctx, object)?;
        for individual in non_null_elements(
            "Organisation: individuals can not contain null element.",
            object.individuals(),
        )? {
            ctx.validate_individual(Some(individual))?;
        }
        Ok(())
    }

    fn validate_party_properties<P>(&self, ctx: &Context<'_>, object: &P) -> Result<()>
    where
        P: Party + ?Sized,
    {
        for contact in non_null_elements(
            "Party: contact information can not contain null element.",
            object.contact_info(),
        )? {
            ctx.validate_contact(Some(contact))?;
        }
        Ok(())
    }

    pub fn validate_contact(&self, ctx: &Context<'_>, object: Option<&dyn Contact>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        for phone in non_null_elements(
            "Contact: phones can not contain null element.",
            object.phones(),
        )? {
            ctx.validate_telephone(Some(phone))?;
        }
        for address in non_null_elements(
            "Contact: addresses can not contain null element.",
            object.addresses(),
        )? {
            ctx.validate_address(Some(address))?;
        }
        for resource in non_null_elements(
            "Contact: online resources can not contain null element.",
            object.online_resources(),
        )? {
            ctx.validate_online_resource(Some(resource))?;
        }
        Ok(())
    }

    pub fn validate_telephone(
        &self,
        _ctx: &Context<'_>,
        object: Option<&dyn Telephone>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        self.base
            .mandatory("Telephone: must have a number.", &object.number())
    }

    pub fn validate_address(&self, _ctx: &Context<'_>, object: Option<&dyn Address>) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        non_null_elements(
            "Address: delivery points can not contain null element.",
            object.delivery_points(),
        )?;
        non_null_elements(
            "Address: electronic mail addresses can not contain null element.",
            object.electronic_mail_addresses(),
        )?;
        Ok(())
    }

    /// The linkage is mandatory and, when present, must be an absolute URI.
    pub fn validate_online_resource(
        &self,
        _ctx: &Context<'_>,
        object: Option<&dyn OnlineResource>,
    ) -> Result<()> {
        let Some(object) = object else {
            return Ok(());
        };
        let linkage = object.linkage();
        self.base
            .mandatory("OnlineResource: must have a linkage.", &linkage)?;
        if let Some(linkage) = linkage.filter(|linkage| !linkage.is_absent()) {
            Url::parse(linkage.trim()).map_err(|e| {
                ValidationError::inconsistent(format!(
                    "OnlineResource: linkage \"{linkage}\" is not a valid URI ({e})."
                ))
            })?;
        }
        Ok(())
    }
}
