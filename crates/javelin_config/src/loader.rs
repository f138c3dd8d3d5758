//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::options::{CompilerOptions, JavaVersion};
use crate::types::ConfigFile;
use javelin_problem::Irritant;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "javelin.toml";

/// Everything a `javelin.toml` file configures.
#[derive(Debug, Clone, Default)]
pub struct JavelinConfig {
    /// Problem reporting policy.
    pub options: CompilerOptions,
    /// Tracing output of the host.
    pub logging: LoggingConfig,
}

/// Loads and validates `<project_dir>/javelin.toml`.
pub fn load_config(project_dir: &Path) -> Result<JavelinConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    tracing::debug!(path = %config_path.display(), "loading configuration");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `javelin.toml` document.
pub fn load_config_from_str(content: &str) -> Result<JavelinConfig, ConfigError> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    let options = build_options(&file)?;
    validate_options(&options)?;
    Ok(JavelinConfig {
        options,
        logging: file.logging,
    })
}

/// Applies every set value of `file` on top of the defaults.
fn build_options(file: &ConfigFile) -> Result<CompilerOptions, ConfigError> {
    let mut options = CompilerOptions::default();
    for (name, level) in &file.problems {
        let irritant =
            Irritant::from_name(name).ok_or_else(|| ConfigError::UnknownIrritant(name.clone()))?;
        options = options.with_severity(irritant, *level);
    }

    let javadoc = &file.javadoc;
    if let Some(enabled) = javadoc.enabled {
        options.doc_comment_support = enabled;
    }
    if let Some(report) = javadoc.report_invalid_tags {
        options.report_invalid_javadoc_tags = report;
    }
    if let Some(report) = javadoc.deprecated_ref {
        options.report_invalid_javadoc_tags_deprecated_ref = report;
    }
    if let Some(report) = javadoc.not_visible_ref {
        options.report_invalid_javadoc_tags_not_visible_ref = report;
    }
    if let Some(policy) = javadoc.missing_tag_description {
        options.missing_javadoc_tag_description = policy;
    }

    let compliance = &file.compliance;
    if let Some(level) = compliance.compliance {
        options.compliance = level;
        options.source = level;
    }
    if let Some(level) = compliance.source {
        options.source = level;
    }
    if let Some(enabled) = compliance.enable_preview {
        options.enable_preview = enabled;
    }

    let handling = &file.handling;
    if let Some(fatal) = handling.treat_optional_error_as_fatal {
        options.treat_optional_error_as_fatal = fatal;
    }
    if let Some(suppress) = handling.suppress_warnings {
        options.suppress_warnings = suppress;
    }
    if let Some(suppress) = handling.suppress_optional_errors {
        options.suppress_optional_errors = suppress;
    }
    if let Some(ignore) = handling.ignore_source_folder_warnings {
        options.ignore_source_folder_warnings = ignore;
    }
    Ok(options)
}

/// Checks that the language levels are consistent.
fn validate_options(options: &CompilerOptions) -> Result<(), ConfigError> {
    if options.compliance > JavaVersion::LATEST {
        return Err(ConfigError::ValidationError(format!(
            "compliance {} is newer than the supported {}",
            options.compliance,
            JavaVersion::LATEST
        )));
    }
    if options.source > options.compliance {
        return Err(ConfigError::ValidationError(format!(
            "source {} exceeds compliance {}",
            options.source, options.compliance
        )));
    }
    if options.enable_preview && options.compliance != JavaVersion::LATEST {
        return Err(ConfigError::ValidationError(format!(
            "preview features require compliance {}",
            JavaVersion::LATEST
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MissingTagDescription;
    use javelin_problem::{Level, SeverityFlags};

    #[test]
    fn empty_file_keeps_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.options, CompilerOptions::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[problems]
unused_import = "error"
dead_code = "ignore"
unnecessary_else = "info"

[javadoc]
enabled = true
report_invalid_tags = true
deprecated_ref = false
missing_tag_description = "all_standard_tags"

[compliance]
compliance = "11"
source = "1.8"

[handling]
treat_optional_error_as_fatal = false
suppress_optional_errors = true

[logging]
level = "debug"
json = true
"#;
        let config = load_config_from_str(toml).unwrap();
        let options = &config.options;
        assert_eq!(
            options.level_of(Irritant::UnusedImport),
            SeverityFlags::ERROR | SeverityFlags::OPTIONAL
        );
        assert_eq!(options.severity(Irritant::DeadCode), Level::Ignore);
        assert_eq!(options.severity(Irritant::UnnecessaryElse), Level::Info);
        assert!(options.doc_comment_support);
        assert!(options.report_invalid_javadoc_tags);
        assert!(!options.report_invalid_javadoc_tags_deprecated_ref);
        assert!(options.report_invalid_javadoc_tags_not_visible_ref);
        assert_eq!(
            options.missing_javadoc_tag_description,
            MissingTagDescription::AllStandardTags
        );
        assert_eq!(options.compliance, JavaVersion::new(11));
        assert_eq!(options.source, JavaVersion::JAVA_8);
        assert!(options.suppress_optional_errors);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn numeric_versions() {
        let config = load_config_from_str("[compliance]\ncompliance = 21\nsource = 1.8\n").unwrap();
        assert_eq!(config.options.compliance, JavaVersion::new(21));
        assert_eq!(config.options.source, JavaVersion::JAVA_8);
    }

    #[test]
    fn compliance_implies_source() {
        let config = load_config_from_str("[compliance]\ncompliance = \"1.5\"\n").unwrap();
        assert_eq!(config.options.source, JavaVersion::JAVA_5);
    }

    #[test]
    fn unknown_irritant_errors() {
        let err = load_config_from_str("[problems]\nunused_everything = \"error\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownIrritant(name) if name == "unused_everything"));
    }

    #[test]
    fn unknown_level_errors() {
        let err = load_config_from_str("[problems]\nunused_import = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_section_errors() {
        let err = load_config_from_str("[lint]\ndeny = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn source_above_compliance_errors() {
        let toml = "[compliance]\ncompliance = \"1.8\"\nsource = \"11\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn preview_requires_latest_compliance() {
        let toml = "[compliance]\ncompliance = \"17\"\nenable_preview = true\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[problems]\nunused_import = \"ignore\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.options.severity(Irritant::UnusedImport), Level::Ignore);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
