//! Display category of a classified problem.
//!
//! Non-fatal problems are categorized through their irritant. Fatal ones,
//! and irritants without a category of their own, go to the id fallback:
//! the exception list first, then the family bits, then [`Category::Internal`].

use javelin_problem::{irritant_of, Category, Irritant, ProblemFamily, ProblemId, SeverityFlags};

/// Ids categorized explicitly ahead of the family tests, in priority order.
pub static CATEGORY_EXCEPTIONS: &[(ProblemId, Category)] = &[
    (ProblemId::IS_CLASS_PATH_CORRECT, Category::Buildpath),
    (ProblemId::CORRUPTED_SIGNATURE, Category::Buildpath),
    (ProblemId::UNDEFINED_MODULE_ADD_READS, Category::Buildpath),
    (ProblemId::MISSING_NULL_ANNOTATION_IMPLICITLY_USED, Category::Buildpath),
    (ProblemId::PROBLEM_NOT_ANALYSED, Category::UnnecessaryCode),
];

/// Returns the category selected by `irritant`, or `None` to fall through
/// to the id-based categories.
pub fn irritant_category(irritant: Irritant) -> Option<Category> {
    use Irritant as I;
    let category = match irritant {
        I::MethodWithConstructorName
        | I::AccessEmulation
        | I::AssertUsedAsAnIdentifier
        | I::EnumUsedAsAnIdentifier
        | I::StaticAccessReceiver
        | I::IndirectStaticAccess
        | I::UnqualifiedFieldAccess
        | I::FinalParameterBound
        | I::AutoBoxing
        | I::AnnotationSuperInterface
        | I::MissingOverrideAnnotation
        | I::MissingDeprecatedAnnotation
        | I::ParameterAssignment
        | I::MethodCanBeStatic
        | I::MethodCanBePotentiallyStatic
        | I::ExplicitlyClosedAutoCloseable => Category::Style,

        I::MaskedCatchBlock
        | I::NoImplicitStringConversion
        | I::NoEffectAssignment
        | I::AccidentalBooleanAssign
        | I::EmptyStatement
        | I::FinallyBlockNotCompleting
        | I::MissingSerialVersion
        | I::VarargsArgumentNeedCast
        | I::NullReference
        | I::PotentialNullReference
        | I::RedundantNullCheck
        | I::MissingEnumConstantCase
        | I::MissingDefaultCase
        | I::FallthroughCase
        | I::OverridingMethodWithoutSuperInvocation
        | I::MissingHashCodeMethod
        | I::DeadCode
        | I::UnusedObjectAllocation
        | I::ComparingIdentical
        | I::MissingSynchronizedModifierInInheritedMethod
        | I::NullSpecViolation
        | I::NullAnnotationInferenceConflict
        | I::NullUncheckedConversion
        | I::MissingNonNullByDefaultAnnotation
        | I::NonnullParameterAnnotationDropped
        | I::AnnotatedTypeArgumentToUnannotated
        | I::PessimisticNullAnalysisForFreeTypeVariables
        | I::NonNullTypeVariableFromLegacyInvocation
        | I::UnclosedCloseable
        | I::PotentiallyUnclosedCloseable
        | I::UnlikelyCollectionMethodArgumentType
        | I::UnlikelyEqualsArgumentType => Category::PotentialBug,

        I::OverriddenPackageDefaultMethod
        | I::IncompatibleNonInheritedInterfaceMethod
        | I::LocalVariableHiding
        | I::FieldHiding
        | I::TypeHiding => Category::NameShadowing,

        I::UnusedLocalVariable
        | I::UnusedArgument
        | I::UnusedExceptionParameter
        | I::UnusedImport
        | I::UnusedPrivateMember
        | I::UnusedDeclaredThrownException
        | I::UnnecessaryTypeCheck
        | I::UnnecessaryElse
        | I::UnnecessaryParentheses
        | I::UnhandledWarningToken
        | I::UnusedWarningToken
        | I::UnusedLabel
        | I::RedundantNullAnnotation
        | I::RedundantSuperinterface
        | I::RedundantSpecificationOfTypeArguments
        | I::UnusedTypeParameter
        | I::UnusedTypeArgumentsForMethodInvocation
        | I::SuppressWarningsNotAnalysed => Category::UnnecessaryCode,

        I::UsingDeprecatedApi | I::UsingTerminallyDeprecatedApi => Category::Deprecation,
        I::NonExternalizedString => Category::Nls,
        I::Task => Category::Task,
        I::MissingJavadocComments | I::MissingJavadocTags | I::InvalidJavadoc => {
            Category::Javadoc
        }
        I::UncheckedTypeOperation | I::RawTypeReference => Category::UncheckedRaw,
        I::ForbiddenReference | I::DiscouragedReference => Category::RestrictedAccess,
        I::ApiLeak | I::UnstableAutoModuleName => Category::Module,

        I::PreviewFeatureUsed => return None,
    };
    Some(category)
}

/// Returns the category of a problem raised with `severity`.
pub fn problem_category(severity: SeverityFlags, id: ProblemId) -> Category {
    if !severity.is_fatal() {
        if let Some(category) = irritant_of(id).and_then(irritant_category) {
            return category;
        }
    }
    id_category(id)
}

fn id_category(id: ProblemId) -> Category {
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
