use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::config::ValidatorConfig;
use super::error::{Result, ValidationError};
use crate::metadata::{
    Address, Citation, CitationDate, Contact, DateType, Extent, GeographicExtent, Identifier,
    Individual, OnLineFunction, OnlineResource, Party, Responsibility, Role, Telephone,
    TelephoneType, TemporalExtent, TemporalPrimitive, VerticalExtent,
};

/// Standard package a validator is responsible for.
///
/// Each package logs under its own target, `geoconform::citation` or
/// `geoconform::extent`, and tags its events with a `package` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Package {
    Citation,
    Extent,
}

impl Package {
    pub fn name(self) -> &'static str {
        match self {
            Package::Citation => "citation",
            Package::Extent => "extent",
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            Package::Citation => "geoconform::citation",
            Package::Extent => "geoconform::extent",
        }
    }

    pub(crate) fn warn(self, message: impl fmt::Display) {
        match self {
            Package::Citation => {
                warn!(target: "geoconform::citation", package = %"citation", "{message}")
            }
            Package::Extent => warn!(target: "geoconform::extent", package = %"extent", "{message}"),
        }
    }

    pub(crate) fn debug(self, message: impl fmt::Display) {
        match self {
            Package::Citation => {
                debug!(target: "geoconform::citation", package = %"citation", "{message}")
            }
            Package::Extent => {
                debug!(target: "geoconform::extent", package = %"extent", "{message}")
            }
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Policy primitives shared by the package validators.
///
/// `mandatory` and `forbidden` either fail or log depending on the shared
/// [`ValidatorConfig`]; the logged text is the message the failure would carry.
#[derive(Debug, Clone)]
pub struct Validator {
    config: Arc<ValidatorConfig>,
    package: Package,
}

impl Validator {
    /// Slack for floating-point comparisons.
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    pub fn new(config: Arc<ValidatorConfig>, package: Package) -> Self {
        Self { config, package }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn package(&self) -> Package {
        self.package
    }

    pub fn mandatory<T: Presence + ?Sized>(&self, message: &str, value: &T) -> Result<()> {
        if value.is_absent() {
            self.report(
                self.config.require_mandatory_attributes,
                ValidationError::missing(message),
            )
        } else {
            Ok(())
        }
    }

    pub fn forbidden<T: Presence + ?Sized>(&self, message: &str, value: &T) -> Result<()> {
        if value.is_absent() {
            Ok(())
        } else {
            self.report(
                self.config.enforce_forbidden_attributes,
                ValidationError::forbidden(message),
            )
        }
    }

    /// Mandatory when `condition` holds, forbidden otherwise.
    pub fn conditional<T: Presence + ?Sized>(
        &self,
        message: &str,
        condition: bool,
        value: &T,
    ) -> Result<()> {
        if condition {
            self.mandatory(message, value)
        } else {
            self.forbidden(message, value)
        }
    }

    fn report(&self, enforce: bool, error: ValidationError) -> Result<()> {
        if enforce {
            return Err(error);
        }
        self.package.warn(error);
        Ok(())
    }
}

/// Whether a property value counts as absent for `mandatory`/`forbidden`.
///
/// `None`, empty or blank text and empty collections are absent.
pub trait Presence {
    fn is_absent(&self) -> bool;
}

impl<T: Presence> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(Presence::is_absent)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl Presence for str {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Presence for String {
    fn is_absent(&self) -> bool {
        self.as_str().is_absent()
    }
}

impl<T> Presence for [T] {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )*
    };
}

always_present!(
    bool,
    f64,
    DateTime<Utc>,
    TemporalPrimitive,
    Role,
    DateType,
    TelephoneType,
    OnLineFunction,
    dyn Citation + '_,
    dyn CitationDate + '_,
    dyn Identifier + '_,
    dyn Responsibility + '_,
    dyn Party + '_,
    dyn Individual + '_,
    dyn Contact + '_,
    dyn Telephone + '_,
    dyn Address + '_,
    dyn OnlineResource + '_,
    dyn Extent + '_,
    dyn GeographicExtent + '_,
    dyn VerticalExtent + '_,
    dyn TemporalExtent + '_,
);
