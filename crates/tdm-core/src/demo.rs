//! Canonical demo: one HTTP run, a separator line, one FTP run.

use crate::phase::RunReport;
use crate::variants;
use std::io::Write;

pub const DEMO_HTTP_URI: &str = "http://www.baidu.com";
pub const DEMO_FTP_URI: &str = "ftp://www.baidu.com";
pub const DEFAULT_SEPARATOR: &str = "///////////////////";

/// Run both built-in variants in order, with `separator` on its own line between them.
pub fn run_demo(out: &mut dyn Write, separator: &str) -> anyhow::Result<Vec<RunReport>> {
    let mut reports = Vec::with_capacity(2);

    let mut downloader = variants::new_http_downloader();
    reports.push(downloader.download(DEMO_HTTP_URI, out)?);

    writeln!(out, "{separator}")?;

    downloader = variants::new_ftp_downloader();
    reports.push(downloader.download(DEMO_FTP_URI, out)?);

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::{Phase, PhaseSource};

    #[test]
    fn demo_prints_both_scenarios_with_separator() {
        let mut out = Vec::new();
        let reports = run_demo(&mut out, "---").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "prepare downloading",
                "download http://www.baidu.com via http",
                "http save",
                "finish downloading",
                "---",
                "prepare downloading",
                "download ftp://www.baidu.com via ftp",
                "default save",
                "finish downloading",
            ]
        );
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].source_of(Phase::Save), Some(PhaseSource::Variant));
        assert_eq!(reports[1].source_of(Phase::Save), Some(PhaseSource::Default));
    }
}
