//! Version banner.

use std::io::{self, Write};

/// Crate version, taken from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `"Version: <VERSION>"`.
pub fn version_banner() -> String {
    format!("Version: {VERSION}")
}

/// Write the banner followed by an empty line.
pub fn print_version<W: Write>(mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", version_banner())?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_contains_cargo_version() {
        assert_eq!(version_banner(), format!("Version: {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn print_version_ends_with_blank_line() {
        let mut buf = Vec::new();
        print_version(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("Version: {VERSION}\n\n"));
    }
}
