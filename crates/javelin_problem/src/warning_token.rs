//! `@SuppressWarnings` tokens and the irritants each one silences.

use crate::irritant::{Irritant, IrritantSet};

use Irritant as I;

/// Every recognized token other than `"all"`, sorted by token.
pub static WARNING_TOKENS: &[(&str, &[Irritant])] = &[
    ("boxing", &[I::AutoBoxing]),
    ("cast", &[I::UnnecessaryTypeCheck]),
    ("dep-ann", &[I::MissingDeprecatedAnnotation]),
    ("deprecation", &[I::UsingDeprecatedApi]),
    ("empty", &[I::EmptyStatement]),
    ("exports", &[I::ApiLeak]),
    ("fallthrough", &[I::FallthroughCase]),
    ("finally", &[I::FinallyBlockNotCompleting]),
    (
        "hiding",
        &[
            I::FieldHiding,
            I::LocalVariableHiding,
            I::MaskedCatchBlock,
            I::TypeHiding,
        ],
    ),
    ("incomplete-switch", &[I::MissingEnumConstantCase]),
    (
        "javadoc",
        &[
            I::InvalidJavadoc,
            I::MissingJavadocComments,
            I::MissingJavadocTags,
        ],
    ),
    ("module", &[I::UnstableAutoModuleName]),
    ("nls", &[I::NonExternalizedString]),
    (
        "null",
        &[
            I::NullReference,
            I::PotentialNullReference,
            I::RedundantNullCheck,
            I::NullSpecViolation,
            I::NullAnnotationInferenceConflict,
            I::NullUncheckedConversion,
            I::RedundantNullAnnotation,
            I::MissingNonNullByDefaultAnnotation,
            I::NonnullParameterAnnotationDropped,
            I::PessimisticNullAnalysisForFreeTypeVariables,
            I::NonNullTypeVariableFromLegacyInvocation,
            I::AnnotatedTypeArgumentToUnannotated,
        ],
    ),
    ("preview", &[I::PreviewFeatureUsed]),
    ("rawtypes", &[I::RawTypeReference]),
    ("removal", &[I::UsingTerminallyDeprecatedApi]),
    (
        "resource",
        &[
            I::UnclosedCloseable,
            I::PotentiallyUnclosedCloseable,
            I::ExplicitlyClosedAutoCloseable,
        ],
    ),
    ("restriction", &[I::DiscouragedReference, I::ForbiddenReference]),
    ("serial", &[I::MissingSerialVersion]),
    (
        "static-access",
        &[I::IndirectStaticAccess, I::StaticAccessReceiver],
    ),
    (
        "static-method",
        &[I::MethodCanBeStatic, I::MethodCanBePotentiallyStatic],
    ),
    ("super", &[I::OverridingMethodWithoutSuperInvocation]),
    ("sync-override", &[I::MissingSynchronizedModifierInInheritedMethod]),
    ("synthetic-access", &[I::AccessEmulation]),
    ("unchecked", &[I::UncheckedTypeOperation]),
    (
        "unlikely-arg-type",
        &[
            I::UnlikelyCollectionMethodArgumentType,
            I::UnlikelyEqualsArgumentType,
        ],
    ),
    ("unqualified-field-access", &[I::UnqualifiedFieldAccess]),
    (
        "unused",
        &[
            I::UnusedLocalVariable,
            I::UnusedArgument,
            I::UnusedExceptionParameter,
            I::UnusedImport,
            I::UnusedPrivateMember,
            I::UnusedDeclaredThrownException,
            I::UnusedLabel,
            I::UnusedTypeParameter,
            I::UnusedTypeArgumentsForMethodInvocation,
            I::RedundantSuperinterface,
            I::RedundantSpecificationOfTypeArguments,
            I::DeadCode,
            I::UnusedObjectAllocation,
        ],
    ),
];

/// Returns the irritants silenced by `token`, or `None` for an unknown token.
///
/// `"all"` silences every irritant except task tags.
pub fn irritants_for_token(token: &str) -> Option<IrritantSet> {
    if token == "all" {
        return Some(IrritantSet::all().without(Irritant::Task));
    }
    WARNING_TOKENS
        .binary_search_by(|(candidate, _)| (*candidate).cmp(token))
        .ok()
        .map(|index| IrritantSet::of(WARNING_TOKENS[index].1))
}

/// Returns the token that silences `irritant`, if any.
pub fn token_for_irritant(irritant: Irritant) -> Option<&'static str> {
    WARNING_TOKENS
        .iter()
        .find(|(_, irritants)| irritants.contains(&irritant))
        .map(|(token, _)| *token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_sorted() {
        for pair in WARNING_TOKENS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} out of order", pair[1].0);
        }
    }

    #[test]
    fn known_tokens() {
        let unused = irritants_for_token("unused").unwrap();
        assert!(unused.contains(Irritant::UnusedImport));
        assert!(unused.contains(Irritant::DeadCode));
        assert!(!unused.contains(Irritant::RawTypeReference));

        let hiding = irritants_for_token("hiding").unwrap();
        assert_eq!(hiding.len(), 4);
    }

    #[test]
    fn all_excludes_tasks() {
        let all = irritants_for_token("all").unwrap();
        assert!(!all.contains(Irritant::Task));
        assert!(all.contains(Irritant::UnusedImport));
        assert_eq!(all.len() as usize, Irritant::ALL.len() - 1);
    }

    #[test]
    fn unknown_token() {
        assert_eq!(irritants_for_token("everything"), None);
        assert_eq!(irritants_for_token(""), None);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(token_for_irritant(Irritant::UnusedImport), Some("unused"));
        assert_eq!(token_for_irritant(Irritant::AutoBoxing), Some("boxing"));
        assert_eq!(token_for_irritant(Irritant::Task), None);
    }
}
