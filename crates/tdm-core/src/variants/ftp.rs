use crate::variant::Variant;
use std::io::{self, Write};

/// FTP variant: own download marker, runner default save.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ftp;

impl Variant for Ftp {
    fn name(&self) -> &'static str {
        "ftp"
    }

    fn download(&self, uri: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "download {uri} via ftp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_keeps_default() {
        assert!(Ftp.save().is_none());
    }
}
