//! Properties that hold across the whole problem catalog.

use javelin_config::{CompilerOptions, MissingTagDescription};
use javelin_problem::{
    irritant_of, Category, Irritant, Level, ProblemFamily, ProblemId, SeverityFlags,
    KNOWN_PROBLEMS,
};
use javelin_reporter::{
    compute_severity, irritant_category, problem_category, TransientFlags, CATEGORY_EXCEPTIONS,
    LITERAL_OVERRIDES,
};

const SEVERITIES: [SeverityFlags; 6] = [
    SeverityFlags::IGNORE,
    SeverityFlags::INFO,
    SeverityFlags::WARNING,
    SeverityFlags::ERROR,
    SeverityFlags::from_bits(SeverityFlags::ERROR.bits() | SeverityFlags::OPTIONAL.bits()),
    SeverityFlags::from_bits(SeverityFlags::ERROR.bits() | SeverityFlags::FATAL.bits()),
];

fn id_fallback(id: ProblemId) -> Category {
    if let Some((_, category)) = CATEGORY_EXCEPTIONS.iter().find(|(entry, _)| *entry == id) {
        return *category;
    }
    match id.family() {
        Some(ProblemFamily::Syntax) => Category::Syntax,
        Some(ProblemFamily::Import) => Category::Import,
        Some(ProblemFamily::Type) => Category::Type,
        Some(ProblemFamily::Member) => Category::Member,
        Some(ProblemFamily::Module) => Category::Module,
        Some(ProblemFamily::Compliance) => Category::Compliance,
        Some(ProblemFamily::Preview) => Category::Preview,
        None => Category::Internal,
    }
}

fn everything_enabled() -> CompilerOptions {
    let mut options = CompilerOptions::default();
    options.doc_comment_support = true;
    options.report_invalid_javadoc_tags = true;
    options.missing_javadoc_tag_description = MissingTagDescription::AllStandardTags;
    options
}

#[test]
fn irritant_lookup_is_total() {
    for (id, name) in KNOWN_PROBLEMS {
        if let Some(irritant) = irritant_of(*id) {
            assert!(Irritant::ALL.contains(&irritant), "{name}");
        }
    }
    assert_eq!(irritant_of(ProblemId::from_raw(0)), None);
    assert_eq!(irritant_of(ProblemId::from_raw(u32::MAX & !0x8000_0000)), None);
}

#[test]
fn classification_is_pure() {
    let options = everything_enabled();
    for (id, _) in KNOWN_PROBLEMS {
        assert_eq!(irritant_of(*id), irritant_of(*id));
        let first = compute_severity(*id, &options, TransientFlags::default());
        let second = compute_severity(*id, &options, TransientFlags::default());
        assert_eq!(first, second);
        for severity in SEVERITIES {
            assert_eq!(problem_category(severity, *id), problem_category(severity, *id));
        }
    }
}

#[test]
fn ignored_irritant_ignores_its_problems() {
    let options = everything_enabled().with_all_severities(Level::Ignore);
    for (id, name) in KNOWN_PROBLEMS {
        let overridden = LITERAL_OVERRIDES.iter().any(|(entry, _)| entry == id)
            || *id == ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER;
        if overridden || irritant_of(*id).is_none() {
            continue;
        }
        for flags in [
            TransientFlags::default(),
            TransientFlags { underscore_is_error: true },
        ] {
            assert_eq!(
                compute_severity(*id, &options, flags),
                SeverityFlags::IGNORE,
                "{name}"
            );
        }
    }
}

#[test]
fn every_severity_has_one_level() {
    for options in [
        CompilerOptions::default(),
        everything_enabled(),
        everything_enabled().with_all_severities(Level::Error),
        everything_enabled().with_all_severities(Level::Info),
    ] {
        for (id, name) in KNOWN_PROBLEMS {
            let severity = compute_severity(*id, &options, TransientFlags::default());
            assert!(severity.has_single_level(), "{name}: {severity:?}");
        }
    }
}

#[test]
fn unconfigurable_problems_are_fatal_errors() {
    let options = CompilerOptions::default();
    for (id, name) in KNOWN_PROBLEMS {
        let overridden = LITERAL_OVERRIDES.iter().any(|(entry, _)| entry == id)
            || *id == ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER;
        if overridden || irritant_of(*id).is_some() {
            continue;
        }
        assert_eq!(
            compute_severity(*id, &options, TransientFlags::default()),
            SeverityFlags::ERROR | SeverityFlags::FATAL,
            "{name}"
        );
    }
}

#[test]
fn category_is_always_defined() {
    for (id, name) in KNOWN_PROBLEMS {
        for severity in SEVERITIES {
            let category = problem_category(severity, *id);
            assert!(Category::ALL.contains(&category), "{name}");
        }
    }
    assert_eq!(
        problem_category(SeverityFlags::ERROR, ProblemId::from_raw(0)),
        Category::Internal
    );
}

#[test]
fn fatal_bit_skips_irritant_category() {
    let fatal = SeverityFlags::ERROR | SeverityFlags::FATAL;
    for (id, name) in KNOWN_PROBLEMS {
        let by_irritant = irritant_of(*id).and_then(irritant_category);
        assert_eq!(problem_category(fatal, *id), id_fallback(*id), "{name}");
        if let Some(category) = by_irritant {
            assert_eq!(problem_category(SeverityFlags::WARNING, *id), category, "{name}");
        }
    }
}

#[test]
fn every_irritant_is_configurable_by_name() {
    for irritant in Irritant::ALL {
        let toml = format!("[problems]\n{} = \"error\"\n", irritant.name());
        let options = javelin_conformance::make_options(&toml);
        assert_eq!(options.severity(*irritant), Level::Error);
    }
}
