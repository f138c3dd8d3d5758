//! The immutable per-session compiler options read by the reporter.

use javelin_problem::{Irritant, Level, SeverityFlags};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// A Java language version, stored as its feature release number.
///
/// `1.5` and `5` denote the same version. Versions up to 8 display in the
/// historical `1.x` form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct JavaVersion(u32);

impl JavaVersion {
    /// Java 1.4.
    pub const JAVA_1_4: JavaVersion = JavaVersion(4);
    /// Java 5, the first release with generics and enums.
    pub const JAVA_5: JavaVersion = JavaVersion(5);
    /// Java 8.
    pub const JAVA_8: JavaVersion = JavaVersion(8);
    /// Java 9, the first release with modules.
    pub const JAVA_9: JavaVersion = JavaVersion(9);
    /// Java 17.
    pub const JAVA_17: JavaVersion = JavaVersion(17);
    /// The newest version the reporter knows about.
    pub const LATEST: JavaVersion = JavaVersion(23);

    /// Creates a version from its feature release number.
    pub const fn new(release: u32) -> Self {
        Self(release)
    }

    /// Returns the feature release number.
    pub const fn release(self) -> u32 {
        self.0
    }

    /// Parses `"1.8"`, `"8"`, or `"17"`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits = text.strip_prefix("1.").unwrap_or(text);
        let release: u32 = digits.parse().ok()?;
        if release == 0 || (text.starts_with("1.") && release > 8) {
            return None;
        }
        Some(Self(release))
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 8 {
            write!(f, "1.{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for JavaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = JavaVersion;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a Java version such as \"1.8\" or 17")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                JavaVersion::parse(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .ok()
                    .filter(|release| *release > 0)
                    .map(JavaVersion)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .ok()
                    .filter(|release| *release > 0)
                    .map(JavaVersion)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                // a bare `1.8` in TOML is a float
                JavaVersion::parse(&v.to_string())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

/// Which doc-comment tags must carry a description.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTagDescription {
    /// No tag needs a description.
    NoTag,
    /// Only `@return` needs a description.
    #[default]
    ReturnTag,
    /// Every standard tag needs a description.
    AllStandardTags,
}

/// Per-session problem reporting policy.
///
/// Built once, then shared read-only by every reporter of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerOptions {
    severities: BTreeMap<Irritant, Level>,
    /// Doc comments are parsed and checked at all.
    pub doc_comment_support: bool,
    /// Malformed doc-comment tags are reported.
    pub report_invalid_javadoc_tags: bool,
    /// Doc-comment references to deprecated elements are reported.
    pub report_invalid_javadoc_tags_deprecated_ref: bool,
    /// Doc-comment references to invisible elements are reported.
    pub report_invalid_javadoc_tags_not_visible_ref: bool,
    /// Which tags must carry a description.
    pub missing_javadoc_tag_description: MissingTagDescription,
    /// Compliance level.
    pub compliance: JavaVersion,
    /// Source level.
    pub source: JavaVersion,
    /// Preview language features are enabled.
    pub enable_preview: bool,
    /// Options configured as errors also stop code generation.
    pub treat_optional_error_as_fatal: bool,
    /// `@SuppressWarnings` is honored.
    pub suppress_warnings: bool,
    /// `@SuppressWarnings` may also silence options configured as errors.
    pub suppress_optional_errors: bool,
    /// Optional problems are reported even in units that ignore them.
    pub ignore_source_folder_warnings: bool,
}

impl CompilerOptions {
    /// Returns the level configured for `irritant`.
    pub fn severity(&self, irritant: Irritant) -> Level {
        self.severities
            .get(&irritant)
            .copied()
            .unwrap_or_else(|| default_level(irritant))
    }

    /// Returns these options with `irritant` set to `level`.
    pub fn with_severity(mut self, irritant: Irritant, level: Level) -> Self {
        self.severities.insert(irritant, level);
        self
    }

    /// Returns these options with every irritant set to `level`.
    pub fn with_all_severities(mut self, level: Level) -> Self {
        for irritant in Irritant::ALL {
            self.severities.insert(*irritant, level);
        }
        self
    }

    /// Returns the severity flags an irritant's problems are raised with.
    ///
    /// A configured error is optional, and also fatal when
    /// `treat_optional_error_as_fatal` is set. Unused `@SuppressWarnings`
    /// tokens never make an error fatal.
    pub fn level_of(&self, irritant: Irritant) -> SeverityFlags {
        match self.severity(irritant) {
            Level::Error
                if self.treat_optional_error_as_fatal
                    && irritant != Irritant::UnusedWarningToken =>
            {
                SeverityFlags::ERROR | SeverityFlags::OPTIONAL | SeverityFlags::FATAL
            }
            Level::Error => SeverityFlags::ERROR | SeverityFlags::OPTIONAL,
            Level::Warning => SeverityFlags::WARNING,
            Level::Info => SeverityFlags::INFO,
            Level::Ignore => SeverityFlags::IGNORE,
        }
    }

    /// Returns `true` if `_` is a reserved keyword at this compliance level.
    pub fn underscore_is_restricted(&self) -> bool {
        self.compliance >= JavaVersion::JAVA_9
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            severities: Irritant::ALL
                .iter()
                .map(|irritant| (*irritant, default_level(*irritant)))
                .collect(),
            doc_comment_support: false,
            report_invalid_javadoc_tags: false,
            report_invalid_javadoc_tags_deprecated_ref: true,
            report_invalid_javadoc_tags_not_visible_ref: true,
            missing_javadoc_tag_description: MissingTagDescription::ReturnTag,
            compliance: JavaVersion::JAVA_17,
            source: JavaVersion::JAVA_17,
            enable_preview: false,
            treat_optional_error_as_fatal: true,
            suppress_warnings: true,
            suppress_optional_errors: false,
            ignore_source_folder_warnings: false,
        }
    }
}

/// The compiler's standard warning set.
fn default_level(irritant: Irritant) -> Level {
    use Irritant as I;
    match irritant {
        I::ForbiddenReference
        | I::NullSpecViolation
        | I::NullAnnotationInferenceConflict => Level::Error,
        I::UnlikelyEqualsArgumentType | I::SuppressWarningsNotAnalysed => Level::Info,
        I::MethodWithConstructorName
        | I::OverriddenPackageDefaultMethod
        | I::UsingDeprecatedApi
        | I::UsingTerminallyDeprecatedApi
        | I::MaskedCatchBlock
        | I::UnusedLocalVariable
        | I::NoImplicitStringConversion
        | I::AssertUsedAsAnIdentifier
        | I::EnumUsedAsAnIdentifier
        | I::UnusedImport
        | I::StaticAccessReceiver
        | I::Task
        | I::NoEffectAssignment
        | I::IncompatibleNonInheritedInterfaceMethod
        | I::UnusedPrivateMember
        | I::FinallyBlockNotCompleting
        | I::UncheckedTypeOperation
        | I::RawTypeReference
        | I::FinalParameterBound
        | I::MissingSerialVersion
        | I::DiscouragedReference
        | I::VarargsArgumentNeedCast
        | I::NullReference
        | I::AnnotationSuperInterface
        | I::TypeHiding
        | I::UnhandledWarningToken
        | I::UnusedWarningToken
        | I::UnusedLabel
        | I::DeadCode
        | I::UnusedTypeArgumentsForMethodInvocation
        | I::ComparingIdentical
        | I::NullUncheckedConversion
        | I::RedundantNullAnnotation
        | I::NonnullParameterAnnotationDropped
        | I::PessimisticNullAnalysisForFreeTypeVariables
        | I::NonNullTypeVariableFromLegacyInvocation
        | I::AnnotatedTypeArgumentToUnannotated
        | I::UnclosedCloseable
        | I::UnlikelyCollectionMethodArgumentType
        | I::ApiLeak
        | I::UnstableAutoModuleName
        | I::PreviewFeatureUsed => Level::Warning,
        _ => Level::Ignore,
    }
}
