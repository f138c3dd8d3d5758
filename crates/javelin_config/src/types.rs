//! Configuration types deserialized from `javelin.toml`.

use crate::logging::LoggingConfig;
use crate::options::{JavaVersion, MissingTagDescription};
use javelin_problem::Level;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The raw contents of a `javelin.toml` file.
///
/// Every section is optional; omitted values keep the compiler defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Irritant name to level, e.g. `unused_import = "error"`.
    #[serde(default)]
    pub problems: BTreeMap<String, Level>,
    /// Doc-comment checking.
    #[serde(default)]
    pub javadoc: JavadocSection,
    /// Language levels.
    #[serde(default)]
    pub compliance: ComplianceSection,
    /// Error-handling and suppression toggles.
    #[serde(default)]
    pub handling: HandlingSection,
    /// Tracing output of the host.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `[javadoc]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JavadocSection {
    /// Doc comments are checked at all.
    pub enabled: Option<bool>,
    /// Malformed tags are reported.
    pub report_invalid_tags: Option<bool>,
    /// References to deprecated elements are reported.
    pub deprecated_ref: Option<bool>,
    /// References to invisible elements are reported.
    pub not_visible_ref: Option<bool>,
    /// Which tags must carry a description.
    pub missing_tag_description: Option<MissingTagDescription>,
}

/// The `[compliance]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplianceSection {
    /// Compliance level.
    pub compliance: Option<JavaVersion>,
    /// Source level; defaults to the compliance level.
    pub source: Option<JavaVersion>,
    /// Preview features are enabled.
    pub enable_preview: Option<bool>,
}

/// The `[handling]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlingSection {
    /// Options configured as errors also stop code generation.
    pub treat_optional_error_as_fatal: Option<bool>,
    /// `@SuppressWarnings` is honored.
    pub suppress_warnings: Option<bool>,
    /// `@SuppressWarnings` may silence options configured as errors.
    pub suppress_optional_errors: Option<bool>,
    /// Optional problems are reported even in units that ignore them.
    pub ignore_source_folder_warnings: Option<bool>,
}
