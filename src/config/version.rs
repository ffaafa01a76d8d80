//! Stripe API version definitions.
//!
//! This module provides the [`ApiVersion`] enum sent in the `Stripe-Version`
//! header of every request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Stripe API version.
///
/// Stripe versions are dated (`YYYY-MM-DD`), and releases from late 2024
/// onwards also carry a release name suffix (`2024-09-30.acacia`). This enum
/// provides variants for known versions plus a `Custom` variant for any
/// other well-formed version, older or newer. The value is only ever sent
/// verbatim, so versions are not ordered.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// let version: ApiVersion = "2024-06-20".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_06_20);
/// assert_eq!(format!("{}", ApiVersion::V2024_06_20), "2024-06-20");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2023-08-16
    V2023_08_16,
    /// API version 2023-10-16
    V2023_10_16,
    /// API version 2024-04-10
    V2024_04_10,
    /// API version 2024-06-20
    V2024_06_20,
    /// Any other well-formed version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2024_06_20
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: YYYY-MM-DD with an optional ".name" release suffix
        let (date, name) = s.split_once('.').map_or((s, None), |(d, n)| (d, Some(n)));

        if let Some(name) = name {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase()) {
                return false;
            }
        }

        let parts: Vec<&str> = date.split('-').collect();
        if parts.len() != 3 {
            return false;
        }

        let lengths_ok = parts[0].len() == 4 && parts[1].len() == 2 && parts[2].len() == 2;
        lengths_ok && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2023_08_16 => "2023-08-16",
            Self::V2023_10_16 => "2023-10-16",
            Self::V2024_04_10 => "2024-04-10",
            Self::V2024_06_20 => "2024-06-20",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2023-08-16" => Ok(Self::V2023_08_16),
            "2023-10-16" => Ok(Self::V2023_10_16),
            "2024-04-10" => Ok(Self::V2024_04_10),
            "2024-06-20" => Ok(Self::V2024_06_20),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2023-10-16".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2023_10_16
        );
        assert_eq!(
            " 2024-06-20 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2024_06_20
        );
    }

    #[test]
    fn test_api_version_parses_named_releases_as_custom() {
        let version: ApiVersion = "2024-09-30.acacia".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2024-09-30.acacia".to_string()));
        assert_eq!(version.to_string(), "2024-09-30.acacia");
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2024-06".parse::<ApiVersion>().is_err());
        assert!("2024-6-20".parse::<ApiVersion>().is_err());
        assert!("2024-06-20.".parse::<ApiVersion>().is_err());
        assert!("2024-06-20.ac4cia".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_latest_is_default() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }

    #[test]
    fn test_api_version_keeps_older_dates_verbatim() {
        let version: ApiVersion = "2020-08-27".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2020-08-27".to_string()));
        assert_ne!(version, ApiVersion::V2023_08_16);
        assert_eq!(version.to_string(), "2020-08-27");
    }
}
