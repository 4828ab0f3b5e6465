//! Reader configuration

use serde::{Deserialize, Serialize};

/// Options for reading whitespace-delimited text
///
/// The defaults read every line, blank ones included, exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextReaderOptions {
    /// Whether to skip lines that are empty after trimming
    pub skip_empty_lines: bool,

    /// Whether to strip a BOM (byte order mark) from the first line
    pub strip_bom: bool,

    /// Maximum line length in bytes
    pub max_line_length: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_every_line() {
        let options = TextReaderOptions::default();
        assert!(!options.skip_empty_lines);
        assert!(!options.strip_bom);
        assert_eq!(options.max_line_length, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: TextReaderOptions =
            serde_json::from_str(r#"{"max_line_length": 4096}"#).unwrap();
        assert_eq!(
            options,
            TextReaderOptions {
                max_line_length: Some(4096),
                ..Default::default()
            }
        );
    }
}
