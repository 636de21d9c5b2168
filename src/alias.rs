//! Alias composition: `service+suffix@domain`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ConfigError;

static SERVICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9 _-]+$").expect("service pattern is a valid regex")
});

/// A validated service name.
///
/// Accepts letters, digits, spaces, hyphens and underscores. Not persisted;
/// only used to build the local part of an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validates a service name.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServiceName`] if the name is blank or
    /// contains other characters.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidServiceName {
                value: name.to_string(),
                reason: "service name is required",
            });
        }
        if !SERVICE_PATTERN.is_match(trimmed) {
            return Err(ConfigError::InvalidServiceName {
                value: name.to_string(),
                reason: "only letters, numbers, spaces, hyphens and underscores are allowed",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The name as given (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as used in an address: lowercase, whitespace runs become `-`.
    #[must_use]
    pub fn local_part(&self) -> String {
        self.0
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A composed email alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    service: String,
    suffix: String,
    domain: String,
}

impl Alias {
    /// Composes an alias from its parts.
    #[must_use]
    pub fn new(service: &ServiceName, suffix: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            service: service.local_part(),
            suffix: suffix.into(),
            domain: domain.into(),
        }
    }

    /// The generated suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The domain part.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The local part, `service+suffix`.
    #[must_use]
    pub fn local_part(&self) -> String {
        format!("{}+{}", self.service, self.suffix)
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}@{}", self.service, self.suffix, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod service_name {
        use super::*;

        #[test]
        fn accepts_letters_digits_spaces_hyphens_underscores() {
            for name in ["github", "My Bank", "shop-2", "news_letter", "ABC 123"] {
                assert!(ServiceName::parse(name).is_ok(), "{name} should be valid");
            }
        }

        #[test]
        fn rejects_blank_names() {
            for name in ["", "   ", "\t"] {
                let err = ServiceName::parse(name).unwrap_err();
                assert!(err.to_string().contains("required"));
            }
        }

        #[test]
        fn rejects_other_characters() {
            for name in ["git+hub", "a@b", "café", "x.y", "slash/name"] {
                let err = ServiceName::parse(name).unwrap_err();
                assert!(
                    matches!(err, ConfigError::InvalidServiceName { .. }),
                    "{name} should be rejected"
                );
            }
        }

        #[test]
        fn trims_surrounding_whitespace() {
            let name = ServiceName::parse("  github  ").unwrap();
            assert_eq!(name.as_str(), "github");
        }

        #[test]
        fn local_part_lowercases_and_joins_words() {
            let name = ServiceName::parse("My   Big Bank").unwrap();
            assert_eq!(name.local_part(), "my-big-bank");
        }
    }

    mod alias {
        use super::*;

        #[test]
        fn displays_as_email_address() {
            let service = ServiceName::parse("github").unwrap();
            let alias = Alias::new(&service, "x7k2p", "example.com");

            assert_eq!(alias.to_string(), "github+x7k2p@example.com");
            assert_eq!(alias.local_part(), "github+x7k2p");
            assert_eq!(alias.suffix(), "x7k2p");
            assert_eq!(alias.domain(), "example.com");
        }

        #[test]
        fn uses_normalized_service_name() {
            let service = ServiceName::parse("Online Shop").unwrap();
            let alias = Alias::new(&service, "brave-otter", "mail.me");

            assert_eq!(alias.to_string(), "online-shop+brave-otter@mail.me");
        }
    }
}
