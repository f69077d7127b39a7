//! Built-in variants and the factories that bind them to a runner.
//!
//! Wiring is always two-step: build the variant, then bind it into a
//! [`Runner`] and hand the pair out as a [`Downloader`]. Callers never see a
//! runner without its variant.

mod ftp;
mod http;

pub use ftp::Ftp;
pub use http::Http;

use crate::protocol::{Protocol, ProtocolError};
use crate::runner::{Downloader, Runner};

pub fn new_http_downloader() -> Box<dyn Downloader> {
    Box::new(Runner::new(Http))
}

pub fn new_ftp_downloader() -> Box<dyn Downloader> {
    Box::new(Runner::new(Ftp))
}

pub fn for_protocol(protocol: Protocol) -> Box<dyn Downloader> {
    match protocol {
        Protocol::Http => new_http_downloader(),
        Protocol::Ftp => new_ftp_downloader(),
    }
}

/// Pick a downloader from the URI scheme, falling back to `fallback` when the
/// scheme is not recognised.
pub fn for_uri(uri: &str, fallback: Option<Protocol>) -> Result<Box<dyn Downloader>, ProtocolError> {
    let protocol = match Protocol::from_uri(uri) {
        Ok(p) => p,
        Err(e) => match fallback {
            Some(p) => {
                tracing::debug!(uri, fallback = %p, "scheme not recognised, using fallback");
                p
            }
            None => return Err(e),
        },
    };
    Ok(for_protocol(protocol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_bind_matching_variant() {
        assert_eq!(new_http_downloader().name(), "http");
        assert_eq!(new_ftp_downloader().name(), "ftp");
        for p in Protocol::ALL {
            assert_eq!(for_protocol(p).name(), p.as_str());
        }
    }

    #[test]
    fn override_flag_comes_from_variant() {
        assert!(new_http_downloader().overrides_save());
        assert!(!new_ftp_downloader().overrides_save());
    }

    #[test]
    fn for_uri_uses_scheme_before_fallback() {
        let dl = for_uri("ftp://mirror.example.org/pool", Some(Protocol::Http)).unwrap();
        assert_eq!(dl.name(), "ftp");
    }

    #[test]
    fn for_uri_fallback_and_error() {
        let dl = for_uri("mirror.example.org/pool", Some(Protocol::Http)).unwrap();
        assert_eq!(dl.name(), "http");
        assert!(for_uri("mirror.example.org/pool", None).is_err());
    }
}
