//! Email, URL and IP address constraints
//!
//! Thin constraint wrappers over the predicates in [`is`](crate::is). All of
//! them skip the empty string.

use std::borrow::Cow;
use std::net::IpAddr;

use crate::code;
use crate::foundation::constraint::{Constraint, StringConstraint};
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::foundation::template::TemplateParameterList;
use crate::is::{self, IpRestriction};
use crate::message;
use crate::validators::rule::{Rule, param, rule_methods};

// ============================================================================
// EMAIL
// ============================================================================

/// Email address check, loose or HTML5.
#[derive(Debug, Clone)]
pub struct Email {
    html5: bool,
    rule: Rule,
}

/// Value must look like an email address (see [`is::email`]).
pub fn is_email() -> Email {
    Email {
        html5: false,
        rule: Rule::new(code::INVALID_EMAIL, message::INVALID_EMAIL),
    }
}

/// Value must be an email address per the HTML5 grammar.
pub fn is_html5_email() -> Email {
    Email {
        html5: true,
        rule: Rule::new(code::INVALID_EMAIL, message::INVALID_EMAIL),
    }
}

rule_methods!(Email);

impl Constraint for Email {
    fn name(&self) -> &str {
        if self.html5 { "HTML5Email" } else { "Email" }
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for Email {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || self.rule.is_skipped(scope) {
            return Ok(());
        }
        let valid = if self.html5 { is::html5_email(value) } else { is::email(value) };
        self.rule.check(valid, scope, [param("{{ value }}", value)])
    }
}

// ============================================================================
// URL
// ============================================================================

/// URL check with a configurable schema list.
#[derive(Debug, Clone)]
pub struct Url {
    schemas: Vec<Cow<'static, str>>,
    rule: Rule,
}

/// Value must be an absolute `http` or `https` URL.
pub fn is_url() -> Url {
    Url {
        schemas: is::DEFAULT_URL_SCHEMAS.iter().map(|s| Cow::Borrowed(*s)).collect(),
        rule: Rule::new(code::INVALID_URL, message::INVALID_URL),
    }
}

impl Url {
    /// Replaces the accepted schemas.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_schemas<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.schemas = schemas.into_iter().map(Into::into).collect();
        self
    }

    /// Also accepts protocol-relative URLs such as `//example.com`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_relative_schema(mut self) -> Self {
        if !self.schemas.iter().any(|s| s.is_empty()) {
            self.schemas.push(Cow::Borrowed(""));
        }
        self
    }
}

rule_methods!(Url);

impl Constraint for Url {
    fn name(&self) -> &str {
        "URL"
    }

    fn set_up(&self) -> Result<(), FatalError> {
        if self.schemas.is_empty() {
            return Err(FatalError::set_up(self.name(), "empty list of schemas"));
        }
        Ok(())
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for Url {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || self.rule.is_skipped(scope) {
            return Ok(());
        }
        self.rule
            .check(is::url(value, &self.schemas), scope, [param("{{ value }}", value)])
    }
}

// ============================================================================
// IP
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IpVersion {
    Any,
    V4,
    V6,
}

/// IP address check with optional range restrictions.
#[derive(Debug, Clone)]
pub struct Ip {
    version: IpVersion,
    restrictions: Vec<IpRestriction>,
    rule: Rule,
    prohibited_rule: Rule,
}

impl Ip {
    fn new(version: IpVersion) -> Self {
        Self {
            version,
            restrictions: Vec::new(),
            rule: Rule::new(code::INVALID_IP, message::INVALID_IP),
            prohibited_rule: Rule::new(code::PROHIBITED_IP, message::PROHIBITED_IP),
        }
    }

    /// Rejects addresses from private ranges.
    #[must_use = "builder methods must be chained or built"]
    pub fn deny_private(mut self) -> Self {
        self.restrictions.push(IpRestriction::DenyPrivate);
        self
    }

    /// Message used when an address is valid but prohibited.
    #[must_use = "builder methods must be chained or built"]
    pub fn prohibited_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.prohibited_rule.set_message(message.into(), TemplateParameterList::new());
        self
    }

    fn parse(&self, value: &str) -> Option<IpAddr> {
        let address = value.parse::<IpAddr>().ok()?;
        match (self.version, address) {
            (IpVersion::Any, _) | (IpVersion::V4, IpAddr::V4(_)) | (IpVersion::V6, IpAddr::V6(_)) => {
                Some(address)
            }
            _ => None,
        }
    }
}

/// Value must be an IPv4 or IPv6 address.
pub fn is_ip() -> Ip {
    Ip::new(IpVersion::Any)
}

/// Value must be an IPv4 address.
pub fn is_ipv4() -> Ip {
    Ip::new(IpVersion::V4)
}

/// Value must be an IPv6 address.
pub fn is_ipv6() -> Ip {
    Ip::new(IpVersion::V6)
}

rule_methods!(Ip);

impl Constraint for Ip {
    fn name(&self) -> &str {
        match self.version {
            IpVersion::Any => "IP",
            IpVersion::V4 => "IPv4",
            IpVersion::V6 => "IPv6",
        }
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for Ip {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || self.rule.is_skipped(scope) {
            return Ok(());
        }
        let Some(address) = self.parse(value) else {
            return Err(self.rule.violation(scope, [param("{{ value }}", value)]));
        };
        let prohibited = self.restrictions.iter().any(|r| r.prohibits(address));

        self.prohibited_rule
            .check(!prohibited, scope, [param("{{ value }}", value)])
    }
}
