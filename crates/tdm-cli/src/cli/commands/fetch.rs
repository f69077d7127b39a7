//! `tdm fetch <uri>...` – run the download procedure for each URI.

use anyhow::{Context, Result};
use std::io::Write;
use tdm_core::config::TdmConfig;
use tdm_core::{variants, Protocol};

/// `via` wins over scheme detection; the configured default only applies to
/// URIs whose scheme is not recognised.
pub fn run_fetch(
    out: &mut dyn Write,
    cfg: &TdmConfig,
    uris: &[String],
    via: Option<Protocol>,
) -> Result<()> {
    for uri in uris {
        let mut downloader = match via {
            Some(p) => variants::for_protocol(p),
            None => variants::for_uri(uri, cfg.default_protocol)?,
        };
        tracing::info!(uri = %uri, variant = downloader.name(), "fetch");
        downloader
            .download(uri, out)
            .with_context(|| format!("fetch {uri}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch(cfg: &TdmConfig, uris: &[&str], via: Option<Protocol>) -> Result<String> {
        let uris: Vec<String> = uris.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        run_fetch(&mut out, cfg, &uris, via)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn fetch_detects_scheme_per_uri() {
        let text = fetch(
            &TdmConfig::default(),
            &["http://www.baidu.com", "ftp://www.baidu.com"],
            None,
        )
        .unwrap();
        assert_eq!(
            text,
            "prepare downloading\n\
             download http://www.baidu.com via http\n\
             http save\n\
             finish downloading\n\
             prepare downloading\n\
             download ftp://www.baidu.com via ftp\n\
             default save\n\
             finish downloading\n"
        );
    }

    #[test]
    fn fetch_via_overrides_scheme() {
        let text = fetch(&TdmConfig::default(), &["http://example.com"], Some(Protocol::Ftp)).unwrap();
        assert!(text.contains("download http://example.com via ftp\n"));
        assert!(text.contains("default save\n"));
    }

    #[test]
    fn fetch_unknown_scheme_uses_configured_default() {
        let cfg = TdmConfig {
            default_protocol: Some(Protocol::Http),
            ..TdmConfig::default()
        };
        let text = fetch(&cfg, &["example.com/file.iso"], None).unwrap();
        assert!(text.contains("download example.com/file.iso via http\n"));
    }

    #[test]
    fn fetch_unknown_scheme_without_default_fails() {
        let err = fetch(&TdmConfig::default(), &["example.com/file.iso"], None).unwrap_err();
        assert!(err.to_string().contains("cannot determine protocol"));
    }
}
