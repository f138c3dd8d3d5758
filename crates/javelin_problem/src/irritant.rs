//! Irritants: the user-configurable options that govern optional problems.
//!
//! Several problem ids usually share one irritant. The mapping lives in a
//! single table sorted by raw id and searched with a binary search; ids that
//! are absent are not configurable and always surface as hard errors.

use crate::ids::ProblemId;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! irritants {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)*) => {
        /// A user-configurable diagnostic option.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(u8)]
        pub enum Irritant {
            $($(#[$doc])* $variant,)*
        }

        impl Irritant {
            /// Every irritant, in declaration order.
            pub const ALL: &'static [Irritant] = &[$(Irritant::$variant,)*];

            /// Returns the configuration key for this irritant.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Irritant::$variant => $name,)*
                }
            }

            /// Looks up an irritant by its configuration key.
            pub fn from_name(name: &str) -> Option<Irritant> {
                match name {
                    $($name => Some(Irritant::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

irritants! {
    /// A method is named like its declaring class.
    MethodWithConstructorName => "method_with_constructor_name",
    /// A method would override a package-private method it cannot see.
    OverriddenPackageDefaultMethod => "overridden_package_default_method",
    /// Use of a deprecated API.
    UsingDeprecatedApi => "using_deprecated_api",
    /// Use of an API deprecated for removal.
    UsingTerminallyDeprecatedApi => "using_terminally_deprecated_api",
    /// A catch block is hidden by an earlier one.
    MaskedCatchBlock => "masked_catch_block",
    /// A local variable is never read.
    UnusedLocalVariable => "unused_local_variable",
    /// A method parameter is never read.
    UnusedArgument => "unused_argument",
    /// A catch parameter is never read.
    UnusedExceptionParameter => "unused_exception_parameter",
    /// A `char[]` is concatenated into a string.
    NoImplicitStringConversion => "no_implicit_string_conversion",
    /// Access to a private member of an enclosing type needs a synthetic accessor.
    AccessEmulation => "access_emulation",
    /// A string literal lacks an externalization marker.
    NonExternalizedString => "non_externalized_string",
    /// `assert` is used as an identifier.
    AssertUsedAsAnIdentifier => "assert_used_as_an_identifier",
    /// `enum` is used as an identifier.
    EnumUsedAsAnIdentifier => "enum_used_as_an_identifier",
    /// An import is never used.
    UnusedImport => "unused_import",
    /// A static member is reached through an instance.
    StaticAccessReceiver => "static_access_receiver",
    /// A static member is reached through a subtype.
    IndirectStaticAccess => "indirect_static_access",
    /// A task tag was found in a comment.
    Task => "task",
    /// An assignment has no effect.
    NoEffectAssignment => "no_effect_assignment",
    /// An interface method clashes with an inherited non-interface method.
    IncompatibleNonInheritedInterfaceMethod => "incompatible_non_inherited_interface_method",
    /// A private member is never used.
    UnusedPrivateMember => "unused_private_member",
    /// A local variable hides another variable or a field.
    LocalVariableHiding => "local_variable_hiding",
    /// A field hides another field or a variable.
    FieldHiding => "field_hiding",
    /// A type or type parameter hides another type.
    TypeHiding => "type_hiding",
    /// A boolean condition is an assignment.
    AccidentalBooleanAssign => "accidental_boolean_assign",
    /// An empty statement or control-flow body.
    EmptyStatement => "empty_statement",
    /// A declaration has no doc comment.
    MissingJavadocComments => "missing_javadoc_comments",
    /// A doc comment lacks a required tag.
    MissingJavadocTags => "missing_javadoc_tags",
    /// A doc comment is malformed or refers to something invalid.
    InvalidJavadoc => "invalid_javadoc",
    /// A field is accessed without qualification.
    UnqualifiedFieldAccess => "unqualified_field_access",
    /// A declared exception is never thrown.
    UnusedDeclaredThrownException => "unused_declared_thrown_exception",
    /// A finally block does not complete normally.
    FinallyBlockNotCompleting => "finally_block_not_completing",
    /// A cast or instanceof is unnecessary.
    UnnecessaryTypeCheck => "unnecessary_type_check",
    /// An else clause is unnecessary.
    UnnecessaryElse => "unnecessary_else",
    /// Parentheses around an expression are unnecessary.
    UnnecessaryParentheses => "unnecessary_parentheses",
    /// An unchecked generic type operation.
    UncheckedTypeOperation => "unchecked_type_operation",
    /// A raw generic type is referenced.
    RawTypeReference => "raw_type_reference",
    /// A type parameter is bounded by a final type.
    FinalParameterBound => "final_parameter_bound",
    /// A serializable class has no serialVersionUID.
    MissingSerialVersion => "missing_serial_version",
    /// Reference to a forbidden type on the class path.
    ForbiddenReference => "forbidden_reference",
    /// Reference to a discouraged type on the class path.
    DiscouragedReference => "discouraged_reference",
    /// A varargs argument needs an explicit cast.
    VarargsArgumentNeedCast => "varargs_argument_need_cast",
    /// A null reference is dereferenced.
    NullReference => "null_reference",
    /// A potentially null reference is dereferenced.
    PotentialNullReference => "potential_null_reference",
    /// A null check or null assignment is redundant.
    RedundantNullCheck => "redundant_null_check",
    /// A boxing or unboxing conversion.
    AutoBoxing => "auto_boxing",
    /// An annotation type is used as a superinterface.
    AnnotationSuperInterface => "annotation_super_interface",
    /// An overriding method lacks `@Override`.
    MissingOverrideAnnotation => "missing_override_annotation",
    /// A switch over an enum misses some constants.
    MissingEnumConstantCase => "missing_enum_constant_case",
    /// A switch has no default case.
    MissingDefaultCase => "missing_default_case",
    /// A deprecated element lacks `@Deprecated`.
    MissingDeprecatedAnnotation => "missing_deprecated_annotation",
    /// A `@SuppressWarnings` token is not recognized.
    UnhandledWarningToken => "unhandled_warning_token",
    /// A `@SuppressWarnings` token suppresses nothing.
    UnusedWarningToken => "unused_warning_token",
    /// A label is never used.
    UnusedLabel => "unused_label",
    /// A parameter is assigned.
    ParameterAssignment => "parameter_assignment",
    /// A switch case falls through.
    FallthroughCase => "fallthrough_case",
    /// An overriding method does not call the overridden implementation.
    OverridingMethodWithoutSuperInvocation => "overriding_method_without_super_invocation",
    /// A class overrides `equals` without `hashCode`.
    MissingHashCodeMethod => "missing_hash_code_method",
    /// Code that can never execute.
    DeadCode => "dead_code",
    /// An allocated object is discarded.
    UnusedObjectAllocation => "unused_object_allocation",
    /// An expression is compared with itself.
    ComparingIdentical => "comparing_identical",
    /// An override drops the `synchronized` modifier.
    MissingSynchronizedModifierInInheritedMethod => "missing_synchronized_modifier_in_inherited_method",
    /// A null annotation contract is violated.
    NullSpecViolation => "null_spec_violation",
    /// Null annotations conflict with inferred nullness.
    NullAnnotationInferenceConflict => "null_annotation_inference_conflict",
    /// An unannotated value flows into an annotated location.
    NullUncheckedConversion => "null_unchecked_conversion",
    /// A null annotation repeats the default.
    RedundantNullAnnotation => "redundant_null_annotation",
    /// A package lacks a non-null-by-default annotation.
    MissingNonNullByDefaultAnnotation => "missing_non_null_by_default_annotation",
    /// An override drops a non-null parameter annotation.
    NonnullParameterAnnotationDropped => "nonnull_parameter_annotation_dropped",
    /// An annotated type argument flows into an unannotated one.
    AnnotatedTypeArgumentToUnannotated => "annotated_type_argument_to_unannotated",
    /// Pessimistic analysis of a free type variable.
    PessimisticNullAnalysisForFreeTypeVariables => "pessimistic_null_analysis_for_free_type_variables",
    /// A non-null type variable flows from legacy code.
    NonNullTypeVariableFromLegacyInvocation => "non_null_type_variable_from_legacy_invocation",
    /// A superinterface is already implied.
    RedundantSuperinterface => "redundant_superinterface",
    /// A method could be declared static.
    MethodCanBeStatic => "method_can_be_static",
    /// A method could potentially be declared static.
    MethodCanBePotentiallyStatic => "method_can_be_potentially_static",
    /// Explicit type arguments could be inferred.
    RedundantSpecificationOfTypeArguments => "redundant_specification_of_type_arguments",
    /// A type parameter is never used.
    UnusedTypeParameter => "unused_type_parameter",
    /// Type arguments passed to a non-generic method.
    UnusedTypeArgumentsForMethodInvocation => "unused_type_arguments_for_method_invocation",
    /// A closeable resource is never closed.
    UnclosedCloseable => "unclosed_closeable",
    /// A closeable resource may not be closed on every path.
    PotentiallyUnclosedCloseable => "potentially_unclosed_closeable",
    /// An auto-closeable resource is closed explicitly.
    ExplicitlyClosedAutoCloseable => "explicitly_closed_auto_closeable",
    /// A collection method receives an argument of an unlikely type.
    UnlikelyCollectionMethodArgumentType => "unlikely_collection_method_argument_type",
    /// `equals` receives an argument of an unlikely type.
    UnlikelyEqualsArgumentType => "unlikely_equals_argument_type",
    /// A module API exposes an inaccessible type.
    ApiLeak => "api_leak",
    /// An automatic module name is derived from a file name.
    UnstableAutoModuleName => "unstable_auto_module_name",
    /// A preview language feature is used.
    PreviewFeatureUsed => "preview_feature_used",
    /// `@SuppressWarnings` could not be analysed.
    SuppressWarningsNotAnalysed => "suppress_warnings_not_analysed",
}

impl Irritant {
    /// Returns this irritant's bit within an [`IrritantSet`].
    pub const fn bit(self) -> u128 {
        1u128 << (self as u8)
    }
}

impl fmt::Display for Irritant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of irritants packed into a single `u128`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IrritantSet(u128);

impl IrritantSet {
    /// The empty set.
    pub const EMPTY: IrritantSet = IrritantSet(0);

    /// Creates a set holding exactly the given irritants.
    pub fn of(irritants: &[Irritant]) -> Self {
        irritants
            .iter()
            .fold(Self::EMPTY, |set, irritant| set.with(*irritant))
    }

    /// Returns the set of every irritant.
    pub fn all() -> Self {
        Self::of(Irritant::ALL)
    }

    /// Returns this set with `irritant` added.
    pub const fn with(self, irritant: Irritant) -> Self {
        Self(self.0 | irritant.bit())
    }

    /// Returns this set with `irritant` removed.
    pub const fn without(self, irritant: Irritant) -> Self {
        Self(self.0 & !irritant.bit())
    }

    /// Adds `irritant` in place.
    pub fn insert(&mut self, irritant: Irritant) {
        self.0 |= irritant.bit();
    }

    /// Returns the union of two sets.
    pub const fn union(self, other: IrritantSet) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if `irritant` is in the set.
    pub const fn contains(self, irritant: Irritant) -> bool {
        self.0 & irritant.bit() != 0
    }

    /// Returns `true` if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of irritants in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over the irritants in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Irritant> {
        Irritant::ALL
            .iter()
            .copied()
            .filter(move |irritant| self.contains(*irritant))
    }
}

impl FromIterator<Irritant> for IrritantSet {
    fn from_iter<I: IntoIterator<Item = Irritant>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, IrritantSet::with)
    }
}

/// Every configurable problem id, paired with the irritant governing it.
///
/// Sorted by raw id on first access. Doc-comment ids absent from the list
/// fall back to [`Irritant::InvalidJavadoc`] in [`irritant_of`].
pub static IRRITANT_TABLE: Lazy<Vec<(ProblemId, Irritant)>> = Lazy::new(|| {
    let mut table: Vec<(ProblemId, Irritant)> = IRRITANT_ENTRIES.to_vec();
    table.sort_unstable_by_key(|(id, _)| *id);
    table
});

/// Returns the irritant governing `id`, or `None` if it is not configurable.
pub fn irritant_of(id: ProblemId) -> Option<Irritant> {
    match IRRITANT_TABLE.binary_search_by_key(&id, |(entry, _)| *entry) {
        Ok(index) => Some(IRRITANT_TABLE[index].1),
        Err(_) if id.is_javadoc() => Some(Irritant::InvalidJavadoc),
        Err(_) => None,
    }
}

use Irritant as I;

#[rustfmt::skip]
const IRRITANT_ENTRIES: &[(ProblemId, Irritant)] = &[
    (ProblemId::METHOD_BUT_WITH_CONSTRUCTOR_NAME, I::MethodWithConstructorName),
    (ProblemId::OVERRIDING_NON_VISIBLE_METHOD, I::OverriddenPackageDefaultMethod),
    (ProblemId::INCOMPATIBLE_RETURN_TYPE_FOR_NON_INHERITED_INTERFACE_METHOD, I::IncompatibleNonInheritedInterfaceMethod),
    (ProblemId::INCOMPATIBLE_EXCEPTION_IN_THROWS_CLAUSE_FOR_NON_INHERITED_INTERFACE_METHOD, I::IncompatibleNonInheritedInterfaceMethod),
    (ProblemId::OVERRIDING_DEPRECATED_METHOD, I::UsingDeprecatedApi),
    (ProblemId::USING_DEPRECATED_TYPE, I::UsingDeprecatedApi),
    (ProblemId::USING_DEPRECATED_METHOD, I::UsingDeprecatedApi),
    (ProblemId::USING_DEPRECATED_CONSTRUCTOR, I::UsingDeprecatedApi),
    (ProblemId::USING_DEPRECATED_FIELD, I::UsingDeprecatedApi),
    (ProblemId::OVERRIDING_TERMINALLY_DEPRECATED_METHOD, I::UsingTerminallyDeprecatedApi),
    (ProblemId::USING_TERMINALLY_DEPRECATED_TYPE, I::UsingTerminallyDeprecatedApi),
    (ProblemId::USING_TERMINALLY_DEPRECATED_METHOD, I::UsingTerminallyDeprecatedApi),
    (ProblemId::USING_TERMINALLY_DEPRECATED_CONSTRUCTOR, I::UsingTerminallyDeprecatedApi),
    (ProblemId::USING_TERMINALLY_DEPRECATED_FIELD, I::UsingTerminallyDeprecatedApi),
    (ProblemId::LOCAL_VARIABLE_HIDING_LOCAL_VARIABLE, I::LocalVariableHiding),
    (ProblemId::LOCAL_VARIABLE_HIDING_FIELD, I::LocalVariableHiding),
    (ProblemId::ARGUMENT_HIDING_LOCAL_VARIABLE, I::LocalVariableHiding),
    (ProblemId::ARGUMENT_HIDING_FIELD, I::LocalVariableHiding),
    (ProblemId::FIELD_HIDING_LOCAL_VARIABLE, I::FieldHiding),
    (ProblemId::FIELD_HIDING_FIELD, I::FieldHiding),
    (ProblemId::TYPE_PARAMETER_HIDING_TYPE, I::TypeHiding),
    (ProblemId::TYPE_HIDING_TYPE_PARAMETER_FROM_TYPE, I::TypeHiding),
    (ProblemId::TYPE_HIDING_TYPE_PARAMETER_FROM_METHOD, I::TypeHiding),
    (ProblemId::TYPE_HIDING_TYPE, I::TypeHiding),
    (ProblemId::LOCAL_VARIABLE_IS_NEVER_USED, I::UnusedLocalVariable),
    (ProblemId::ARGUMENT_IS_NEVER_USED, I::UnusedArgument),
    (ProblemId::EXCEPTION_PARAMETER_IS_NEVER_USED, I::UnusedExceptionParameter),
    (ProblemId::NO_IMPLICIT_STRING_CONVERSION_FOR_CHAR_ARRAY_EXPRESSION, I::NoImplicitStringConversion),
    (ProblemId::NEED_TO_EMULATE_FIELD_READ_ACCESS, I::AccessEmulation),
    (ProblemId::NEED_TO_EMULATE_FIELD_WRITE_ACCESS, I::AccessEmulation),
    (ProblemId::NEED_TO_EMULATE_METHOD_ACCESS, I::AccessEmulation),
    (ProblemId::NEED_TO_EMULATE_CONSTRUCTOR_ACCESS, I::AccessEmulation),
    (ProblemId::NON_EXTERNALIZED_STRING_LITERAL, I::NonExternalizedString),
    (ProblemId::UNNECESSARY_NLS_TAG, I::NonExternalizedString),
    (ProblemId::USE_ASSERT_AS_AN_IDENTIFIER, I::AssertUsedAsAnIdentifier),
    (ProblemId::USE_ENUM_AS_AN_IDENTIFIER, I::EnumUsedAsAnIdentifier),
    (ProblemId::NON_STATIC_ACCESS_TO_STATIC_METHOD, I::StaticAccessReceiver),
    (ProblemId::NON_STATIC_ACCESS_TO_STATIC_FIELD, I::StaticAccessReceiver),
    (ProblemId::INDIRECT_ACCESS_TO_STATIC_FIELD, I::IndirectStaticAccess),
    (ProblemId::INDIRECT_ACCESS_TO_STATIC_METHOD, I::IndirectStaticAccess),
    (ProblemId::INDIRECT_ACCESS_TO_STATIC_TYPE, I::IndirectStaticAccess),
    (ProblemId::ASSIGNMENT_HAS_NO_EFFECT, I::NoEffectAssignment),
    (ProblemId::UNUSED_PRIVATE_CONSTRUCTOR, I::UnusedPrivateMember),
    (ProblemId::UNUSED_PRIVATE_METHOD, I::UnusedPrivateMember),
    (ProblemId::UNUSED_PRIVATE_FIELD, I::UnusedPrivateMember),
    (ProblemId::UNUSED_PRIVATE_TYPE, I::UnusedPrivateMember),
    (ProblemId::TASK, I::Task),
    (ProblemId::UNUSED_IMPORT, I::UnusedImport),
    (ProblemId::MASKED_CATCH, I::MaskedCatchBlock),
    (ProblemId::POSSIBLE_ACCIDENTAL_BOOLEAN_ASSIGNMENT, I::AccidentalBooleanAssign),
    (ProblemId::SUPERFLUOUS_SEMICOLON, I::EmptyStatement),
    (ProblemId::EMPTY_CONTROL_FLOW_STATEMENT, I::EmptyStatement),
    (ProblemId::UNQUALIFIED_FIELD_ACCESS, I::UnqualifiedFieldAccess),
    (ProblemId::UNUSED_METHOD_DECLARED_THROWN_EXCEPTION, I::UnusedDeclaredThrownException),
    (ProblemId::UNUSED_CONSTRUCTOR_DECLARED_THROWN_EXCEPTION, I::UnusedDeclaredThrownException),
    (ProblemId::FINALLY_MUST_COMPLETE_NORMALLY, I::FinallyBlockNotCompleting),
    (ProblemId::UNNECESSARY_CAST, I::UnnecessaryTypeCheck),
    (ProblemId::UNNECESSARY_INSTANCEOF, I::UnnecessaryTypeCheck),
    (ProblemId::UNNECESSARY_ELSE, I::UnnecessaryElse),
    (ProblemId::UNNECESSARY_PARENTHESES, I::UnnecessaryParentheses),
    (ProblemId::UNSAFE_RAW_CONSTRUCTOR_INVOCATION, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_RAW_METHOD_INVOCATION, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_TYPE_CONVERSION, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_RAW_FIELD_ASSIGNMENT, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_GENERIC_CAST, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_RETURN_TYPE_OVERRIDE, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_RAW_GENERIC_METHOD_INVOCATION, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_RAW_GENERIC_CONSTRUCTOR_INVOCATION, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_ELEMENT_TYPE_CONVERSION, I::UncheckedTypeOperation),
    (ProblemId::UNSAFE_GENERIC_ARRAY_FOR_VARARGS, I::UncheckedTypeOperation),
    (ProblemId::RAW_TYPE_REFERENCE, I::RawTypeReference),
    (ProblemId::FINAL_BOUND_FOR_TYPE_VARIABLE, I::FinalParameterBound),
    (ProblemId::MISSING_SERIAL_VERSION, I::MissingSerialVersion),
    (ProblemId::FORBIDDEN_REFERENCE, I::ForbiddenReference),
    (ProblemId::DISCOURAGED_REFERENCE, I::DiscouragedReference),
    (ProblemId::METHOD_VARARGS_ARGUMENT_NEED_CAST, I::VarargsArgumentNeedCast),
    (ProblemId::CONSTRUCTOR_VARARGS_ARGUMENT_NEED_CAST, I::VarargsArgumentNeedCast),
    (ProblemId::NULL_LOCAL_VARIABLE_REFERENCE, I::NullReference),
    (ProblemId::NULL_EXPRESSION_REFERENCE, I::NullReference),
    (ProblemId::POTENTIAL_NULL_LOCAL_VARIABLE_REFERENCE, I::PotentialNullReference),
    (ProblemId::POTENTIAL_NULL_EXPRESSION_REFERENCE, I::PotentialNullReference),
    (ProblemId::REDUNDANT_NULL_CHECK_ON_NULL_LOCAL_VARIABLE, I::RedundantNullCheck),
    (ProblemId::NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE, I::RedundantNullCheck),
    (ProblemId::REDUNDANT_LOCAL_VARIABLE_NULL_ASSIGNMENT, I::RedundantNullCheck),
    (ProblemId::NULL_LOCAL_VARIABLE_INSTANCEOF_YIELDS_FALSE, I::RedundantNullCheck),
    (ProblemId::REDUNDANT_NULL_CHECK_ON_NON_NULL_LOCAL_VARIABLE, I::RedundantNullCheck),
    (ProblemId::NON_NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE, I::RedundantNullCheck),
    (ProblemId::BOXING_CONVERSION, I::AutoBoxing),
    (ProblemId::UNBOXING_CONVERSION, I::AutoBoxing),
    (ProblemId::ANNOTATION_TYPE_USED_AS_SUPER_INTERFACE, I::AnnotationSuperInterface),
    (ProblemId::MISSING_OVERRIDE_ANNOTATION, I::MissingOverrideAnnotation),
    (ProblemId::MISSING_OVERRIDE_ANNOTATION_FOR_INTERFACE_METHOD_IMPLEMENTATION, I::MissingOverrideAnnotation),
    (ProblemId::MISSING_ENUM_CONSTANT_CASE, I::MissingEnumConstantCase),
    (ProblemId::MISSING_ENUM_CONSTANT_CASE_DESPITE_DEFAULT, I::MissingEnumConstantCase),
    (ProblemId::MISSING_DEFAULT_CASE, I::MissingDefaultCase),
    (ProblemId::MISSING_ENUM_DEFAULT_CASE, I::MissingDefaultCase),
    (ProblemId::FIELD_MISSING_DEPRECATED_ANNOTATION, I::MissingDeprecatedAnnotation),
    (ProblemId::METHOD_MISSING_DEPRECATED_ANNOTATION, I::MissingDeprecatedAnnotation),
    (ProblemId::TYPE_MISSING_DEPRECATED_ANNOTATION, I::MissingDeprecatedAnnotation),
    (ProblemId::UNHANDLED_WARNING_TOKEN, I::UnhandledWarningToken),
    (ProblemId::UNUSED_WARNING_TOKEN, I::UnusedWarningToken),
    (ProblemId::UNUSED_LABEL, I::UnusedLabel),
    (ProblemId::PARAMETER_ASSIGNMENT, I::ParameterAssignment),
    (ProblemId::FALLTHROUGH_CASE, I::FallthroughCase),
    (ProblemId::OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION, I::OverridingMethodWithoutSuperInvocation),
    (ProblemId::SHOULD_IMPLEMENT_HASHCODE, I::MissingHashCodeMethod),
    (ProblemId::DEAD_CODE, I::DeadCode),
    (ProblemId::UNUSED_OBJECT_ALLOCATION, I::UnusedObjectAllocation),
    (ProblemId::COMPARING_IDENTICAL, I::ComparingIdentical),
    (ProblemId::MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD, I::MissingSynchronizedModifierInInheritedMethod),
    (ProblemId::REQUIRED_NON_NULL_BUT_PROVIDED_NULL, I::NullSpecViolation),
    (ProblemId::NULLITY_MISMATCH_TYPE_ARGUMENT, I::NullSpecViolation),
    (ProblemId::MISSING_NULL_ANNOTATION_IMPLICITLY_USED, I::NullSpecViolation),
    (ProblemId::REQUIRED_NON_NULL_BUT_PROVIDED_POTENTIAL_NULL, I::NullAnnotationInferenceConflict),
    (ProblemId::NULL_ANNOTATION_INFERENCE_CONFLICT, I::NullAnnotationInferenceConflict),
    (ProblemId::REQUIRED_NON_NULL_BUT_PROVIDED_UNKNOWN, I::NullUncheckedConversion),
    (ProblemId::NULLITY_UNCHECKED_TYPE_ANNOTATION_DETAIL, I::NullUncheckedConversion),
    (ProblemId::NULL_ANNOTATION_IS_REDUNDANT, I::RedundantNullAnnotation),
    (ProblemId::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION_ON_PACKAGE, I::MissingNonNullByDefaultAnnotation),
    (ProblemId::NONNULL_PARAMETER_ANNOTATION_DROPPED, I::NonnullParameterAnnotationDropped),
    (ProblemId::ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED, I::AnnotatedTypeArgumentToUnannotated),
    (ProblemId::PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLE, I::PessimisticNullAnalysisForFreeTypeVariables),
    (ProblemId::NON_NULL_TYPE_VARIABLE_FROM_LEGACY_METHOD, I::NonNullTypeVariableFromLegacyInvocation),
    (ProblemId::REDUNDANT_SUPERINTERFACE, I::RedundantSuperinterface),
    (ProblemId::METHOD_CAN_BE_STATIC, I::MethodCanBeStatic),
    (ProblemId::METHOD_CAN_BE_POTENTIALLY_STATIC, I::MethodCanBePotentiallyStatic),
    (ProblemId::REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS, I::RedundantSpecificationOfTypeArguments),
    (ProblemId::UNUSED_TYPE_PARAMETER, I::UnusedTypeParameter),
    (ProblemId::UNUSED_TYPE_ARGUMENTS_FOR_METHOD_INVOCATION, I::UnusedTypeArgumentsForMethodInvocation),
    (ProblemId::UNCLOSED_CLOSEABLE, I::UnclosedCloseable),
    (ProblemId::UNCLOSED_CLOSEABLE_AT_EXIT, I::UnclosedCloseable),
    (ProblemId::POTENTIALLY_UNCLOSED_CLOSEABLE, I::PotentiallyUnclosedCloseable),
    (ProblemId::POTENTIALLY_UNCLOSED_CLOSEABLE_AT_EXIT, I::PotentiallyUnclosedCloseable),
    (ProblemId::EXPLICITLY_CLOSED_AUTO_CLOSEABLE, I::ExplicitlyClosedAutoCloseable),
    (ProblemId::UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE, I::UnlikelyCollectionMethodArgumentType),
    (ProblemId::UNLIKELY_EQUALS_ARGUMENT_TYPE, I::UnlikelyEqualsArgumentType),
    (ProblemId::NON_PUBLIC_TYPE_IN_API, I::ApiLeak),
    (ProblemId::NOT_EXPORTED_TYPE_IN_API, I::ApiLeak),
    (ProblemId::MISSING_REQUIRES_TRANSITIVE_FOR_TYPE_IN_API, I::ApiLeak),
    (ProblemId::UNSTABLE_AUTO_MODULE_NAME, I::UnstableAutoModuleName),
    (ProblemId::PREVIEW_FEATURE_USED, I::PreviewFeatureUsed),
    (ProblemId::SUPPRESS_WARNINGS_NOT_ANALYSED, I::SuppressWarningsNotAnalysed),
    (ProblemId::JAVADOC_MISSING, I::MissingJavadocComments),
    (ProblemId::JAVADOC_MISSING_PARAM_TAG, I::MissingJavadocTags),
    (ProblemId::JAVADOC_MISSING_RETURN_TAG, I::MissingJavadocTags),
    (ProblemId::JAVADOC_MISSING_THROWS_TAG, I::MissingJavadocTags),
];
