//! Protocol names and URI scheme detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector for the built-in download variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Ftp,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown protocol: {0}")]
    UnknownName(String),
    #[error("cannot determine protocol for {0}")]
    UnknownScheme(String),
}

impl Protocol {
    pub const ALL: [Protocol; 2] = [Protocol::Http, Protocol::Ftp];

    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Ftp => "ftp",
        }
    }

    /// Detect the protocol from a URI scheme (`http`/`https`, `ftp`/`ftps`).
    pub fn from_uri(uri: &str) -> Result<Self, ProtocolError> {
        let parsed =
            url::Url::parse(uri).map_err(|_| ProtocolError::UnknownScheme(uri.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Protocol::Http),
            "ftp" | "ftps" => Ok(Protocol::Ftp),
            _ => Err(ProtocolError::UnknownScheme(uri.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "ftp" => Ok(Protocol::Ftp),
            _ => Err(ProtocolError::UnknownName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("FTP".parse::<Protocol>().unwrap(), Protocol::Ftp);
        assert_eq!(
            "gopher".parse::<Protocol>().unwrap_err(),
            ProtocolError::UnknownName("gopher".to_string())
        );
    }

    #[test]
    fn detect_from_scheme() {
        assert_eq!(Protocol::from_uri("http://www.baidu.com").unwrap(), Protocol::Http);
        assert_eq!(Protocol::from_uri("https://example.com/a.iso").unwrap(), Protocol::Http);
        assert_eq!(Protocol::from_uri("ftp://www.baidu.com").unwrap(), Protocol::Ftp);
        assert_eq!(Protocol::from_uri("FTPS://mirror.example.org/x").unwrap(), Protocol::Ftp);
    }

    #[test]
    fn unknown_or_unparseable_scheme() {
        assert!(matches!(
            Protocol::from_uri("gopher://example.com"),
            Err(ProtocolError::UnknownScheme(_))
        ));
        assert!(matches!(
            Protocol::from_uri("not a uri"),
            Err(ProtocolError::UnknownScheme(_))
        ));
    }
}
