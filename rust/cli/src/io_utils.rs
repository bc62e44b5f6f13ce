//! File helpers for loading pack files.

use std::path::Path;

use euchre_engine::pack::Pack;

use crate::error::CliError;

/// Read a text file, dropping a leading UTF-8 BOM.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    let mut content = std::fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Error opening {}: {}", path.display(), e))
    })?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Load a pack file: 24 `"<Rank> of <Suit>"` entries in deal order.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use euchre_cli::io_utils::load_pack;
///
/// let pack = load_pack(Path::new("pack.in")).unwrap();
/// assert_eq!(pack.remaining(), 24);
/// ```
pub fn load_pack(path: &Path) -> Result<Pack, CliError> {
    let text = read_text(path)?;
    text.parse::<Pack>().map_err(|e| {
        CliError::InvalidInput(format!("Invalid pack file {}: {}", path.display(), e))
    })
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn canonical() -> String {
        Pack::new()
            .cards()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}hello".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_load_pack_with_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}{}\n", canonical()).unwrap();
        let pack = load_pack(file.path()).unwrap();
        assert_eq!(pack, Pack::new());
    }

    #[test]
    fn test_load_pack_missing_file() {
        let err = load_pack(Path::new("definitely/not/here.in")).unwrap_err();
        assert!(err.to_string().contains("Error opening"));
    }

    #[test]
    fn test_load_pack_short_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Nine of Spades\nTen of Spades\n").unwrap();
        let err = load_pack(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("only 2 cards"));
    }
}
