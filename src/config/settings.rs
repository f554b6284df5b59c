use crate::counter::{CommentSyntax, DEFAULT_MULTI_LINE, DEFAULT_SINGLE_LINE};
use crate::error::Result;
use crate::output::OutputFormat;

use super::Config;

/// Values given on the command line. `None` / `false` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingOverrides {
    pub single: Option<String>,
    pub multi: Option<String>,
    pub verbose: bool,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSettings {
    pub syntax: CommentSyntax,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl CountSettings {
    /// Merge command-line overrides over the config file over built-in defaults.
    ///
    /// # Errors
    /// Returns `CocoError::Config` if the effective multi-line value is malformed.
    pub fn resolve(overrides: &SettingOverrides, config: &Config) -> Result<Self> {
        let single = overrides
            .single
            .as_deref()
            .or(config.comments.single.as_deref())
            .unwrap_or(DEFAULT_SINGLE_LINE);
        let multi = overrides
            .multi
            .as_deref()
            .or(config.comments.multi.as_deref())
            .unwrap_or(DEFAULT_MULTI_LINE);

        Ok(Self {
            syntax: CommentSyntax::from_spec(single, multi)?,
            verbose: overrides.verbose || config.output.verbose.unwrap_or(false),
            format: overrides
                .format
                .or(config.output.format)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommentsConfig, OutputConfig};
    use crate::error::CocoError;

    fn file_config(single: &str, multi: &str) -> Config {
        Config {
            comments: CommentsConfig {
                single: Some(single.to_string()),
                multi: Some(multi.to_string()),
            },
            output: OutputConfig {
                verbose: Some(true),
                format: Some(OutputFormat::Json),
            },
        }
    }

    #[test]
    fn defaults_without_config_or_flags() {
        let settings =
            CountSettings::resolve(&SettingOverrides::default(), &Config::default()).unwrap();
        assert_eq!(settings, CountSettings::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let settings =
            CountSettings::resolve(&SettingOverrides::default(), &file_config("#", "")).unwrap();

        assert_eq!(settings.syntax, CommentSyntax::new("#", None));
        assert!(settings.verbose);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn flags_override_config_file() {
        let overrides = SettingOverrides {
            single: Some("--".to_string()),
            multi: Some("{- -}".to_string()),
            verbose: false,
            format: Some(OutputFormat::Text),
        };
        let settings = CountSettings::resolve(&overrides, &file_config("#", "")).unwrap();

        assert_eq!(settings.syntax, CommentSyntax::new("--", Some(("{-", "-}"))));
        assert_eq!(settings.format, OutputFormat::Text);
        // A flag cannot switch off verbose output requested by the file.
        assert!(settings.verbose);
    }

    #[test]
    fn malformed_multi_from_config_is_error() {
        let err = CountSettings::resolve(&SettingOverrides::default(), &file_config("#", "/*"))
            .unwrap_err();
        assert!(matches!(err, CocoError::Config(_)));
    }

    #[test]
    fn flag_can_disable_multi_line() {
        let overrides = SettingOverrides {
            multi: Some(String::new()),
            ..SettingOverrides::default()
        };
        let settings = CountSettings::resolve(&overrides, &Config::default()).unwrap();
        assert!(settings.syntax.multi_line.is_none());
        assert_eq!(settings.syntax.single_line, "//");
    }
}
