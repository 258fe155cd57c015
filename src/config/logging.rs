//! Log output configuration.

use serde::Deserialize;

/// Log line format.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Log output configuration. Filtering is controlled by `RUST_LOG`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Output format (default: text).
    #[serde(default)]
    pub format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: LogFormat,
        }

        let w: Wrapper = toml::from_str(r#"format = "text""#).unwrap();
        assert_eq!(w.format, LogFormat::Text);

        let w: Wrapper = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(w.format, LogFormat::Json);

        assert!(toml::from_str::<Wrapper>(r#"format = "xml""#).is_err());
    }
}
