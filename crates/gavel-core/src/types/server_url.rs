//! Manager server URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, TransportError};

/// A validated base URL for the manager service.
///
/// Must be HTTPS, or HTTP for localhost. Endpoint URLs are derived as
/// `{base}/{service}/{method}`.
///
/// # Example
///
/// ```
/// use gavel_core::ServerUrl;
///
/// let server = ServerUrl::new("https://judge.example.com").unwrap();
/// assert_eq!(
///     server.endpoint_url("manager", "getProfiles"),
///     "https://judge.example.com/manager/getProfiles"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, lacks a host, or uses
    /// a scheme other than HTTPS (HTTP allowed only for localhost).
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| TransportError::Http {
            message: format!("invalid server URL '{}': {}", s, e),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the endpoint URL for a given service and method.
    pub fn endpoint_url(&self, service: &str, method: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}/{}", base, service, method)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(TransportError::Http {
                message: format!("server URL '{}' must be absolute", original),
            }
            .into());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(TransportError::Http {
                message: format!(
                    "server URL '{}' must use HTTPS (HTTP allowed only for localhost)",
                    original
                ),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(TransportError::Http {
                message: format!("server URL '{}' must have a host", original),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
