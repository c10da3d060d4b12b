//! Pure string predicates
//!
//! The checks behind the web constraints, usable without a validator:
//!
//! ```rust,ignore
//! use nebula_validation::is;
//!
//! assert!(is::email("user@example.com"));
//! assert!(is::url("//example.com", &["", "https"]));
//! assert!(is::ipv4("192.168.0.1"));
//! ```

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

static LOOSE_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@\S+\.\S+$").unwrap());

static HTML5_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .unwrap()
});

/// Schemas accepted by [`url`] when none are given.
#[cfg(feature = "web")]
pub const DEFAULT_URL_SCHEMAS: [&str; 2] = ["http", "https"];

// ============================================================================
// EMAIL
// ============================================================================

/// Loose email check: something, an `@`, and a host containing a dot.
#[must_use]
pub fn email(value: &str) -> bool {
    LOOSE_EMAIL_REGEX.is_match(value)
}

/// Email check using the HTML5 `input[type=email]` grammar.
#[must_use]
pub fn html5_email(value: &str) -> bool {
    HTML5_EMAIL_REGEX.is_match(value)
}

// ============================================================================
// URL
// ============================================================================

/// Absolute URL with a host and one of `schemas`.
///
/// An empty `schemas` means [`DEFAULT_URL_SCHEMAS`]. An empty string among
/// the schemas also accepts protocol-relative URLs such as
/// `//example.com`.
#[cfg(feature = "web")]
#[must_use]
pub fn url<S: AsRef<str>>(value: &str, schemas: &[S]) -> bool {
    if value.is_empty() {
        return false;
    }
    let allowed = |scheme: &str| {
        if schemas.is_empty() {
            DEFAULT_URL_SCHEMAS.contains(&scheme)
        } else {
            schemas.iter().any(|s| s.as_ref().eq_ignore_ascii_case(scheme))
        }
    };

    if let Some(relative) = value.strip_prefix("//") {
        return allowed("") && has_host(&format!("http://{relative}"));
    }
    match url::Url::parse(value) {
        Ok(parsed) => allowed(parsed.scheme()) && parsed.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

#[cfg(feature = "web")]
fn has_host(value: &str) -> bool {
    url::Url::parse(value)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| !h.is_empty()))
        .unwrap_or(false)
}

// ============================================================================
// IP
// ============================================================================

/// Restriction applied on top of a syntactically valid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IpRestriction {
    /// Rejects private ranges (`10/8`, `172.16/12`, `192.168/16`, `fc00::/7`).
    DenyPrivate,
}

impl IpRestriction {
    /// Returns `true` when `address` is prohibited.
    #[must_use]
    pub fn prohibits(self, address: IpAddr) -> bool {
        match self {
            Self::DenyPrivate => is_private(address),
        }
    }
}

fn is_private(address: IpAddr) -> bool {
    match address {
        IpAddr::V4(v4) => v4.is_private(),
        IpAddr::V6(v6) => (v6.segments()[0] & 0xfe00) == 0xfc00,
    }
}

/// IPv4 or IPv6 address.
#[must_use]
pub fn ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// IPv4 address in dotted-decimal form.
#[must_use]
pub fn ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// IPv6 address.
#[must_use]
pub fn ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("user@localhost", false)]
    #[case("@example.com", false)]
    #[case("user@exa mple.com", false)]
    fn test_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(email(value), expected);
    }

    #[rstest]
    #[case("user.name+tag@example.com", true)]
    #[case("user@example", false)]
    #[case("us er@example.com", false)]
    #[case("user@-example.com", false)]
    fn test_html5_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(html5_email(value), expected);
    }

    #[test]
    fn test_email_patterns_compile() {
        assert!(LazyLock::force(&LOOSE_EMAIL_REGEX).is_match("a@b.c"));
        assert!(LazyLock::force(&HTML5_EMAIL_REGEX).is_match("a@b.c"));
    }

    #[cfg(feature = "web")]
    #[test]
    fn test_url_default_schemas() {
        let none: &[&str] = &[];
        assert!(url("https://example.com/path?q=1", none));
        assert!(url("http://example.com", none));
        assert!(!url("ftp://example.com", none));
        assert!(!url("example.com", none));
        assert!(!url("", none));
    }

    #[cfg(feature = "web")]
    #[test]
    fn test_url_custom_and_relative_schemas() {
        assert!(url("ftp://example.com", &["ftp"]));
        assert!(!url("//example.com", &["https"]));
        assert!(url("//example.com", &["", "https"]));
    }

    #[test]
    fn test_ip() {
        assert!(ip("127.0.0.1"));
        assert!(ip("::1"));
        assert!(ipv4("10.0.0.1"));
        assert!(!ipv4("::1"));
        assert!(ipv6("fe80::1"));
        assert!(!ipv6("10.0.0.1"));
        assert!(!ip("256.0.0.1"));
    }

    #[test]
    fn test_deny_private() {
        let private: IpAddr = "192.168.1.1".parse().unwrap();
        let public: IpAddr = "8.8.8.8".parse().unwrap();
        let unique_local: IpAddr = "fd00::1".parse().unwrap();

        assert!(IpRestriction::DenyPrivate.prohibits(private));
        assert!(!IpRestriction::DenyPrivate.prohibits(public));
        assert!(IpRestriction::DenyPrivate.prohibits(unique_local));
    }
}
