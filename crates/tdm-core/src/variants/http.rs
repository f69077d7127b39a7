use crate::variant::Variant;
use std::io::{self, Write};

/// HTTP variant: own download marker and its own save.
#[derive(Debug, Clone, Copy, Default)]
pub struct Http;

impl Variant for Http {
    fn name(&self) -> &'static str {
        "http"
    }

    fn download(&self, uri: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "download {uri} via http")
    }

    fn save(&self) -> Option<String> {
        Some("http save".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_default() {
        assert_eq!(Http.save().as_deref(), Some("http save"));
    }
}
