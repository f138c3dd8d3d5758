//! Effective severity of a problem under the session's options.
//!
//! Evaluation order matters: literal overrides first, then the doc-comment
//! tag toggles, then the transient restricted-identifier flag, and finally
//! the irritant-driven default.

use javelin_config::{CompilerOptions, MissingTagDescription};
use javelin_problem::{irritant_of, ProblemId, SeverityFlags};

/// Flags the caller sets immediately before reporting one problem.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TransientFlags {
    /// `_` used as an identifier is an error rather than a warning.
    pub underscore_is_error: bool,
}

/// Problems whose severity never depends on the options.
pub static LITERAL_OVERRIDES: &[(ProblemId, SeverityFlags)] = &[
    (ProblemId::VARARGS_CONFLICT, SeverityFlags::WARNING),
    (ProblemId::SWITCH_ON_ENUM_NOT_BELOW_15, SeverityFlags::WARNING),
    (ProblemId::TYPE_COLLIDES_WITH_PACKAGE, SeverityFlags::WARNING),
    (
        ProblemId::REPEATABLE_ANNOTATION_WITH_REPEATING_CONTAINER_ANNOTATION,
        SeverityFlags::WARNING,
    ),
    (ProblemId::TOLERATED_MISPLACED_TYPE_ANNOTATIONS, SeverityFlags::WARNING),
    (ProblemId::PREVIEW_FEATURES_NOT_ALLOWED, SeverityFlags::ERROR),
];

/// The option a doc-comment tag problem depends on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum DocTagToggle {
    InvalidTags,
    DeprecatedRef,
    NotVisibleRef,
    ReturnDescription,
    AllTagDescriptions,
}

static DOC_TAG_TOGGLES: &[(ProblemId, DocTagToggle)] = &[
    (ProblemId::JAVADOC_UNEXPECTED_TAG, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_MISSING_PARAM_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_DUPLICATE_PARAM_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_PARAM_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_DUPLICATE_RETURN_TAG, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_MISSING_THROWS_CLASS_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_THROWS_CLASS, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_DUPLICATE_THROWS_CLASS_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_THROWS_CLASS_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_MISSING_SEE_REFERENCE, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_SEE_REFERENCE, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_SEE_HREF, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_SEE_ARGS, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_TAG, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_UNDEFINED_FIELD, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_AMBIGUOUS_FIELD, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_UNDEFINED_CONSTRUCTOR, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_AMBIGUOUS_CONSTRUCTOR, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_UNDEFINED_METHOD, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_AMBIGUOUS_METHOD, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_PARAMETER_MISMATCH, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_UNDEFINED_TYPE, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_AMBIGUOUS_TYPE, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INTERNAL_TYPE_NAME_PROVIDED, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_UNTERMINATED_INLINE_TAG, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_MALFORMED_SEE_REFERENCE, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_MISSING_HASH_CHARACTER, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_VALUE_REFERENCE, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_UNEXPECTED_TEXT, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_INVALID_PARAM_TAG_NAME, DocTagToggle::InvalidTags),
    (ProblemId::JAVADOC_USING_DEPRECATED_FIELD, DocTagToggle::DeprecatedRef),
    (ProblemId::JAVADOC_USING_DEPRECATED_CONSTRUCTOR, DocTagToggle::DeprecatedRef),
    (ProblemId::JAVADOC_USING_DEPRECATED_METHOD, DocTagToggle::DeprecatedRef),
    (ProblemId::JAVADOC_USING_DEPRECATED_TYPE, DocTagToggle::DeprecatedRef),
    (ProblemId::JAVADOC_NOT_VISIBLE_FIELD, DocTagToggle::NotVisibleRef),
    (ProblemId::JAVADOC_NOT_VISIBLE_CONSTRUCTOR, DocTagToggle::NotVisibleRef),
    (ProblemId::JAVADOC_NOT_VISIBLE_METHOD, DocTagToggle::NotVisibleRef),
    (ProblemId::JAVADOC_NOT_VISIBLE_TYPE, DocTagToggle::NotVisibleRef),
    (ProblemId::JAVADOC_HIDDEN_REFERENCE, DocTagToggle::NotVisibleRef),
    (ProblemId::JAVADOC_EMPTY_RETURN_TAG, DocTagToggle::ReturnDescription),
    (ProblemId::JAVADOC_MISSING_TAG_DESCRIPTION, DocTagToggle::AllTagDescriptions),
];

impl DocTagToggle {
    fn is_on(self, options: &CompilerOptions) -> bool {
        match self {
            DocTagToggle::InvalidTags => options.report_invalid_javadoc_tags,
            DocTagToggle::DeprecatedRef => {
                options.report_invalid_javadoc_tags
                    && options.report_invalid_javadoc_tags_deprecated_ref
            }
            DocTagToggle::NotVisibleRef => {
                options.report_invalid_javadoc_tags
                    && options.report_invalid_javadoc_tags_not_visible_ref
            }
            DocTagToggle::ReturnDescription => {
                options.missing_javadoc_tag_description != MissingTagDescription::NoTag
            }
            DocTagToggle::AllTagDescriptions => {
                options.missing_javadoc_tag_description == MissingTagDescription::AllStandardTags
            }
        }
    }
}

fn lookup<T: Copy>(table: &[(ProblemId, T)], id: ProblemId) -> Option<T> {
    table
        .iter()
        .find(|(entry, _)| *entry == id)
        .map(|(_, value)| *value)
}

/// Returns the severity `id` is reported with.
///
/// The result always carries exactly one level bit. Ids without an irritant
/// are language errors and come back as `ERROR | FATAL`.
pub fn compute_severity(
    id: ProblemId,
    options: &CompilerOptions,
    flags: TransientFlags,
) -> SeverityFlags {
    if let Some(severity) = lookup(LITERAL_OVERRIDES, id) {
        return severity;
    }
    if let Some(toggle) = lookup(DOC_TAG_TOGGLES, id) {
        if !toggle.is_on(options) {
            return SeverityFlags::IGNORE;
        }
    }
    if id == ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER {
        return if flags.underscore_is_error {
            SeverityFlags::ERROR
        } else {
            SeverityFlags::WARNING
        };
    }
    match irritant_of(id) {
        None => SeverityFlags::ERROR | SeverityFlags::FATAL,
        Some(_) if id.is_javadoc() && !options.doc_comment_support => SeverityFlags::IGNORE,
        Some(irritant) => options.level_of(irritant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_problem::{Irritant, Level, KNOWN_PROBLEMS};

    fn javadoc_options() -> CompilerOptions {
        let mut options =
            CompilerOptions::default().with_severity(Irritant::InvalidJavadoc, Level::Warning);
        options.doc_comment_support = true;
        options.report_invalid_javadoc_tags = true;
        options
    }

    #[test]
    fn configurable_problem_uses_its_level() {
        let options = CompilerOptions::default();
        assert_eq!(
            compute_severity(ProblemId::UNUSED_IMPORT, &options, TransientFlags::default()),
            SeverityFlags::WARNING
        );
    }

    #[test]
    fn unconfigurable_problem_is_fatal_error() {
        let options = CompilerOptions::default();
        assert_eq!(
            compute_severity(ProblemId::UNDEFINED_TYPE, &options, TransientFlags::default()),
            SeverityFlags::ERROR | SeverityFlags::FATAL
        );
    }

    #[test]
    fn literal_overrides_ignore_options() {
        let options = CompilerOptions::default().with_all_severities(Level::Error);
        for (id, expected) in LITERAL_OVERRIDES {
            assert_eq!(
                compute_severity(*id, &options, TransientFlags::default()),
                *expected
            );
        }
    }

    #[test]
    fn doc_tag_toggle_off_ignores() {
        let mut options = javadoc_options();
        let flags = TransientFlags::default();
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_INVALID_TAG, &options, flags),
            SeverityFlags::WARNING
        );
        options.report_invalid_javadoc_tags = false;
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_INVALID_TAG, &options, flags),
            SeverityFlags::IGNORE
        );
    }

    #[test]
    fn deprecated_and_not_visible_sub_toggles() {
        let mut options = javadoc_options();
        let flags = TransientFlags::default();
        options.report_invalid_javadoc_tags_deprecated_ref = false;
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_USING_DEPRECATED_METHOD, &options, flags),
            SeverityFlags::IGNORE
        );
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_NOT_VISIBLE_METHOD, &options, flags),
            SeverityFlags::WARNING
        );
        options.report_invalid_javadoc_tags_not_visible_ref = false;
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_HIDDEN_REFERENCE, &options, flags),
            SeverityFlags::IGNORE
        );
    }

    #[test]
    fn missing_description_policy() {
        let mut options = javadoc_options();
        let flags = TransientFlags::default();
        options.missing_javadoc_tag_description = MissingTagDescription::ReturnTag;
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_EMPTY_RETURN_TAG, &options, flags),
            SeverityFlags::WARNING
        );
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_MISSING_TAG_DESCRIPTION, &options, flags),
            SeverityFlags::IGNORE
        );
        options.missing_javadoc_tag_description = MissingTagDescription::NoTag;
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_EMPTY_RETURN_TAG, &options, flags),
            SeverityFlags::IGNORE
        );
        options.missing_javadoc_tag_description = MissingTagDescription::AllStandardTags;
        assert_eq!(
            compute_severity(ProblemId::JAVADOC_MISSING_TAG_DESCRIPTION, &options, flags),
            SeverityFlags::WARNING
        );
    }

    #[test]
    fn doc_comment_support_off_ignores_javadoc_family() {
        let mut options = javadoc_options();
        options.doc_comment_support = false;
        assert_eq!(
            compute_severity(
                ProblemId::JAVADOC_INVALID_TAG,
                &options,
                TransientFlags::default()
            ),
            SeverityFlags::IGNORE
        );
    }

    #[test]
    fn underscore_follows_transient_flag() {
        let options = CompilerOptions::default();
        let id = ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER;
        assert_eq!(
            compute_severity(id, &options, TransientFlags { underscore_is_error: true }),
            SeverityFlags::ERROR
        );
        assert_eq!(
            compute_severity(id, &options, TransientFlags::default()),
            SeverityFlags::WARNING
        );
    }

    #[test]
    fn every_result_has_one_level_bit() {
        let options = javadoc_options();
        for (id, name) in KNOWN_PROBLEMS {
            for flags in [
                TransientFlags::default(),
                TransientFlags { underscore_is_error: true },
            ] {
                let severity = compute_severity(*id, &options, flags);
                assert!(severity.has_single_level(), "{name}: {severity:?}");
            }
        }
    }
}
