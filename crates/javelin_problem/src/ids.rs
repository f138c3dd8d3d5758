//! The problem identifier catalog and its bit-encoded families.
//!
//! A [`ProblemId`] is a `u32` whose high bits say which part of the language
//! the problem is about and whose low 21 bits are a per-kind ordinal. The
//! category fallback is a handful of masked comparisons against the family
//! bits (see [`ProblemFamily`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem concerns a type.
pub const TYPE_RELATED: u32 = 0x0100_0000;
/// Problem concerns a field.
pub const FIELD_RELATED: u32 = 0x0200_0000;
/// Problem concerns a method.
pub const METHOD_RELATED: u32 = 0x0400_0000;
/// Problem concerns a constructor.
pub const CONSTRUCTOR_RELATED: u32 = 0x0800_0000;
/// Problem concerns an import declaration.
pub const IMPORT_RELATED: u32 = 0x1000_0000;
/// Problem is internal to the compiler's own analysis.
pub const INTERNAL: u32 = 0x2000_0000;
/// Problem is a lexical or syntactic error.
pub const SYNTAX: u32 = 0x4000_0000;
/// Problem was found inside a doc comment.
pub const JAVADOC: u32 = 0x8000_0000;
/// Problem concerns a module declaration.
pub const MODULE_RELATED: u32 = 0x0080_0000;
/// Problem depends on the compliance level.
pub const COMPLIANCE: u32 = 0x0040_0000;
/// Problem concerns a preview language feature.
pub const PREVIEW_RELATED: u32 = 0x0020_0000;
/// Mask selecting the ordinal, dropping every family bit.
pub const IGNORE_CATEGORIES_MASK: u32 = 0x001F_FFFF;

/// Opaque identifier of one diagnostic kind.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(u32);

impl ProblemId {
    /// Creates a `ProblemId` from its raw value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value, family bits included.
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the ordinal with every family bit masked off.
    pub const fn ordinal(self) -> u32 {
        self.0 & IGNORE_CATEGORIES_MASK
    }

    /// Returns `true` if any bit of `mask` is set in this id.
    pub const fn has_any(self, mask: u32) -> bool {
        self.0 & mask != 0
    }

    /// Returns `true` for problems reported from doc comments.
    pub const fn is_javadoc(self) -> bool {
        self.has_any(JAVADOC)
    }

    /// Returns the first family whose range test matches, in fallback order.
    pub fn family(self) -> Option<ProblemFamily> {
        ProblemFamily::FALLBACK_ORDER
            .iter()
            .copied()
            .find(|family| family.contains(self))
    }

    /// Returns the catalog name of this id, if it is a known problem.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_PROBLEMS
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

/// A bit-range family of problem ids.
///
/// The member family covers fields, methods, and constructors alike.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemFamily {
    /// Lexical and syntactic problems.
    Syntax,
    /// Import declaration problems.
    Import,
    /// Type problems.
    Type,
    /// Field, method, and constructor problems.
    Member,
    /// Module declaration problems.
    Module,
    /// Compliance-level problems.
    Compliance,
    /// Preview feature problems.
    Preview,
}

impl ProblemFamily {
    /// Families in the order the category fallback tests them.
    pub const FALLBACK_ORDER: [ProblemFamily; 7] = [
        ProblemFamily::Syntax,
        ProblemFamily::Import,
        ProblemFamily::Type,
        ProblemFamily::Member,
        ProblemFamily::Module,
        ProblemFamily::Compliance,
        ProblemFamily::Preview,
    ];

    /// Returns the id bits that place a problem in this family.
    pub const fn mask(self) -> u32 {
        match self {
            ProblemFamily::Syntax => SYNTAX,
            ProblemFamily::Import => IMPORT_RELATED,
            ProblemFamily::Type => TYPE_RELATED,
            ProblemFamily::Member => FIELD_RELATED | METHOD_RELATED | CONSTRUCTOR_RELATED,
            ProblemFamily::Module => MODULE_RELATED,
            ProblemFamily::Compliance => COMPLIANCE,
            ProblemFamily::Preview => PREVIEW_RELATED,
        }
    }

    /// Returns `true` if `id` carries any of this family's bits.
    pub const fn contains(self, id: ProblemId) -> bool {
        id.has_any(self.mask())
    }
}

macro_rules! problem_ids {
    ($($name:ident = $value:expr;)*) => {
        #[allow(missing_docs)]
        impl ProblemId {
            $(pub const $name: ProblemId = ProblemId($value);)*
        }

        /// Every problem id in the catalog, paired with its name.
        pub static KNOWN_PROBLEMS: &[(ProblemId, &str)] = &[
            $((ProblemId::$name, stringify!($name)),)*
        ];
    };
}

problem_ids! {
    // types
    OBJECT_HAS_NO_SUPERCLASS = TYPE_RELATED + 1;
    UNDEFINED_TYPE = TYPE_RELATED + 2;
    NOT_VISIBLE_TYPE = TYPE_RELATED + 3;
    AMBIGUOUS_TYPE = TYPE_RELATED + 4;
    USING_DEPRECATED_TYPE = TYPE_RELATED + 5;
    INTERNAL_TYPE_NAME_PROVIDED = TYPE_RELATED + 6;
    UNUSED_PRIVATE_TYPE = INTERNAL + TYPE_RELATED + 7;
    INCOMPATIBLE_TYPES_IN_EQUALITY_OPERATOR = TYPE_RELATED + 15;
    INCOMPATIBLE_TYPES_IN_CONDITIONAL_OPERATOR = TYPE_RELATED + 16;
    TYPE_MISMATCH = TYPE_RELATED + 17;
    INDIRECT_ACCESS_TO_STATIC_TYPE = INTERNAL + TYPE_RELATED + 18;
    MISSING_ENCLOSING_INSTANCE_FOR_CONSTRUCTOR_CALL = TYPE_RELATED + 20;
    MISSING_ENCLOSING_INSTANCE = TYPE_RELATED + 21;
    INCORRECT_ENCLOSING_INSTANCE_REFERENCE = TYPE_RELATED + 22;
    ILLEGAL_ENCLOSING_INSTANCE_SPECIFICATION = TYPE_RELATED + 23;
    CANNOT_DEFINE_STATIC_INITIALIZER_IN_LOCAL_TYPE = INTERNAL + 24;
    OUTER_LOCAL_MUST_BE_FINAL = INTERNAL + 25;
    CANNOT_DEFINE_INTERFACE_IN_LOCAL_TYPE = INTERNAL + 26;
    ANONYMOUS_CLASS_CANNOT_EXTEND_FINAL_CLASS = TYPE_RELATED + 29;
    TYPE_HIDING_TYPE = TYPE_RELATED + 33;

    // locals and fields
    UNDEFINED_NAME = INTERNAL + FIELD_RELATED + 50;
    UNINITIALIZED_LOCAL_VARIABLE = INTERNAL + 51;
    VARIABLE_TYPE_CANNOT_BE_VOID = INTERNAL + 52;
    REDEFINED_LOCAL = INTERNAL + 55;
    REDEFINED_ARGUMENT = INTERNAL + 56;
    DUPLICATE_FINAL_LOCAL_INITIALIZATION = INTERNAL + 57;
    NON_BLANK_FINAL_LOCAL_ASSIGNMENT = INTERNAL + 58;
    PARAMETER_ASSIGNMENT = INTERNAL + 59;
    FINAL_OUTER_LOCAL_ASSIGNMENT = INTERNAL + 60;
    LOCAL_VARIABLE_IS_NEVER_USED = INTERNAL + 61;
    ARGUMENT_IS_NEVER_USED = INTERNAL + 62;
    BYTECODE_EXCEEDS_64K_LIMIT = INTERNAL + 63;
    TOO_MANY_ARGUMENT_SLOTS = INTERNAL + 65;
    TOO_MANY_LOCAL_VARIABLE_SLOTS = INTERNAL + 66;
    TOO_MANY_ARRAY_DIMENSIONS = INTERNAL + 68;
    UNDEFINED_FIELD = FIELD_RELATED + 70;
    NOT_VISIBLE_FIELD = FIELD_RELATED + 71;
    AMBIGUOUS_FIELD = FIELD_RELATED + 72;
    USING_DEPRECATED_FIELD = FIELD_RELATED + 73;
    NON_STATIC_FIELD_FROM_STATIC_INVOCATION = FIELD_RELATED + 74;
    REFERENCE_TO_FORWARD_FIELD = FIELD_RELATED + INTERNAL + 75;
    NON_STATIC_ACCESS_TO_STATIC_FIELD = INTERNAL + FIELD_RELATED + 76;
    UNUSED_PRIVATE_FIELD = INTERNAL + FIELD_RELATED + 77;
    INDIRECT_ACCESS_TO_STATIC_FIELD = INTERNAL + FIELD_RELATED + 78;
    UNQUALIFIED_FIELD_ACCESS = INTERNAL + FIELD_RELATED + 79;
    FINAL_FIELD_ASSIGNMENT = FIELD_RELATED + 80;
    UNINITIALIZED_BLANK_FINAL_FIELD = FIELD_RELATED + 81;
    DUPLICATE_BLANK_FINAL_FIELD_INITIALIZATION = FIELD_RELATED + 82;
    UNRESOLVED_VARIABLE = FIELD_RELATED + 83;
    LOCAL_VARIABLE_HIDING_LOCAL_VARIABLE = INTERNAL + 90;
    LOCAL_VARIABLE_HIDING_FIELD = INTERNAL + FIELD_RELATED + 91;
    FIELD_HIDING_LOCAL_VARIABLE = INTERNAL + FIELD_RELATED + 92;
    FIELD_HIDING_FIELD = INTERNAL + FIELD_RELATED + 93;
    ARGUMENT_HIDING_LOCAL_VARIABLE = INTERNAL + 94;
    ARGUMENT_HIDING_FIELD = INTERNAL + 95;
    MISSING_SERIAL_VERSION = INTERNAL + 96;
    LAMBDA_REDECLARES_ARGUMENT = INTERNAL + 97;
    LAMBDA_REDECLARES_LOCAL = INTERNAL + 98;

    // methods
    UNDEFINED_METHOD = METHOD_RELATED + 100;
    NOT_VISIBLE_METHOD = METHOD_RELATED + 101;
    AMBIGUOUS_METHOD = METHOD_RELATED + 102;
    USING_DEPRECATED_METHOD = METHOD_RELATED + 103;
    DIRECT_INVOCATION_OF_ABSTRACT_METHOD = METHOD_RELATED + 104;
    VOID_METHOD_RETURNS_VALUE = METHOD_RELATED + 105;
    METHOD_RETURNS_VOID = METHOD_RELATED + 106;
    METHOD_REQUIRES_BODY = INTERNAL + METHOD_RELATED + 107;
    SHOULD_RETURN_VALUE = INTERNAL + METHOD_RELATED + 108;
    METHOD_BUT_WITH_CONSTRUCTOR_NAME = METHOD_RELATED + 110;
    MISSING_RETURN_TYPE = TYPE_RELATED + 111;
    BODY_FOR_NATIVE_METHOD = INTERNAL + METHOD_RELATED + 112;
    BODY_FOR_ABSTRACT_METHOD = INTERNAL + METHOD_RELATED + 113;
    NO_MESSAGE_SEND_ON_BASE_TYPE = METHOD_RELATED + 114;
    PARAMETER_MISMATCH = METHOD_RELATED + 115;
    NO_MESSAGE_SEND_ON_ARRAY_TYPE = METHOD_RELATED + 116;
    NON_STATIC_ACCESS_TO_STATIC_METHOD = INTERNAL + METHOD_RELATED + 117;
    UNUSED_PRIVATE_METHOD = INTERNAL + METHOD_RELATED + 118;
    INDIRECT_ACCESS_TO_STATIC_METHOD = INTERNAL + METHOD_RELATED + 119;
    MISSING_TYPE_IN_METHOD = METHOD_RELATED + 120;
    METHOD_CAN_BE_STATIC = INTERNAL + METHOD_RELATED + 121;
    METHOD_CAN_BE_POTENTIALLY_STATIC = INTERNAL + METHOD_RELATED + 122;

    // constructors
    UNDEFINED_CONSTRUCTOR = CONSTRUCTOR_RELATED + 130;
    NOT_VISIBLE_CONSTRUCTOR = CONSTRUCTOR_RELATED + 131;
    AMBIGUOUS_CONSTRUCTOR = CONSTRUCTOR_RELATED + 132;
    USING_DEPRECATED_CONSTRUCTOR = CONSTRUCTOR_RELATED + 133;
    UNUSED_PRIVATE_CONSTRUCTOR = INTERNAL + METHOD_RELATED + 134;
    INSTANCE_FIELD_DURING_CONSTRUCTOR_INVOCATION = CONSTRUCTOR_RELATED + 135;
    INSTANCE_METHOD_DURING_CONSTRUCTOR_INVOCATION = CONSTRUCTOR_RELATED + 136;
    RECURSIVE_CONSTRUCTOR_INVOCATION = CONSTRUCTOR_RELATED + 137;
    THIS_SUPER_DURING_CONSTRUCTOR_INVOCATION = CONSTRUCTOR_RELATED + 138;
    INVALID_EXPLICIT_CONSTRUCTOR_CALL = CONSTRUCTOR_RELATED + SYNTAX + 139;
    UNDEFINED_CONSTRUCTOR_IN_DEFAULT_CONSTRUCTOR = CONSTRUCTOR_RELATED + 140;

    // expressions and statements
    ARRAY_REFERENCE_REQUIRED = INTERNAL + 150;
    NO_IMPLICIT_STRING_CONVERSION_FOR_CHAR_ARRAY_EXPRESSION = INTERNAL + 151;
    STRING_CONSTANT_IS_EXCEEDING_UTF8_LIMIT = INTERNAL + 152;
    NON_CONSTANT_EXPRESSION = INTERNAL + 153;
    NUMERIC_VALUE_OUT_OF_RANGE = INTERNAL + 154;
    ILLEGAL_CAST = TYPE_RELATED + 156;
    INVALID_CLASS_INSTANTIATION = TYPE_RELATED + 157;
    INVALID_OPERATOR = INTERNAL + 160;
    CODE_CANNOT_BE_REACHED = INTERNAL + 161;
    CANNOT_RETURN_IN_INITIALIZER = INTERNAL + 162;
    INITIALIZER_MUST_COMPLETE_NORMALLY = INTERNAL + 163;
    INVALID_VOID_EXPRESSION = INTERNAL + 164;
    MASKED_CATCH = TYPE_RELATED + 165;
    DUPLICATE_DEFAULT_CASE = INTERNAL + 166;
    UNREACHABLE_CATCH = TYPE_RELATED + METHOD_RELATED + 167;
    UNHANDLED_EXCEPTION = TYPE_RELATED + 168;
    INCORRECT_SWITCH_TYPE = TYPE_RELATED + 169;
    DUPLICATE_CASE = FIELD_RELATED + 170;
    DUPLICATE_LABEL = INTERNAL + 171;
    INVALID_BREAK = INTERNAL + 172;
    INVALID_CONTINUE = INTERNAL + 173;
    UNDEFINED_LABEL = INTERNAL + 174;
    INVALID_TYPE_TO_SYNCHRONIZED = INTERNAL + 175;
    INVALID_NULL_TO_SYNCHRONIZED = INTERNAL + 176;
    CANNOT_THROW_NULL = INTERNAL + 177;
    ASSIGNMENT_HAS_NO_EFFECT = INTERNAL + 178;
    POSSIBLE_ACCIDENTAL_BOOLEAN_ASSIGNMENT = INTERNAL + 179;
    SUPERFLUOUS_SEMICOLON = INTERNAL + 180;
    UNNECESSARY_CAST = INTERNAL + TYPE_RELATED + 181;
    UNNECESSARY_INSTANCEOF = INTERNAL + TYPE_RELATED + 183;
    FINALLY_MUST_COMPLETE_NORMALLY = INTERNAL + 184;
    UNUSED_METHOD_DECLARED_THROWN_EXCEPTION = INTERNAL + 185;
    UNUSED_CONSTRUCTOR_DECLARED_THROWN_EXCEPTION = INTERNAL + 186;
    INVALID_CATCH_BLOCK_SEQUENCE = INTERNAL + TYPE_RELATED + 187;
    EMPTY_CONTROL_FLOW_STATEMENT = INTERNAL + TYPE_RELATED + 188;
    UNNECESSARY_ELSE = INTERNAL + 189;
    NEED_TO_EMULATE_FIELD_READ_ACCESS = FIELD_RELATED + 190;
    NEED_TO_EMULATE_FIELD_WRITE_ACCESS = FIELD_RELATED + 191;
    NEED_TO_EMULATE_METHOD_ACCESS = METHOD_RELATED + 192;
    NEED_TO_EMULATE_CONSTRUCTOR_ACCESS = METHOD_RELATED + 193;
    FALLTHROUGH_CASE = INTERNAL + 194;
    INHERITED_METHOD_HIDES_ENCLOSING_NAME = METHOD_RELATED + 195;
    INHERITED_FIELD_HIDES_ENCLOSING_NAME = FIELD_RELATED + 196;
    INHERITED_TYPE_HIDES_ENCLOSING_NAME = TYPE_RELATED + 197;
    ILLEGAL_USAGE_OF_QUALIFIED_TYPE_REFERENCE = INTERNAL + SYNTAX + 198;
    UNUSED_LABEL = INTERNAL + 199;
    THIS_IN_STATIC_CONTEXT = INTERNAL + 200;
    STATIC_METHOD_REQUESTED = INTERNAL + METHOD_RELATED + 201;
    ILLEGAL_DIMENSION = INTERNAL + 202;
    INVALID_TYPE_EXPRESSION = INTERNAL + 203;
    COMPARING_IDENTICAL = INTERNAL + 211;
    UNNECESSARY_PARENTHESES = INTERNAL + 212;

    // syntax
    PARSING_ERROR = SYNTAX + INTERNAL + 204;
    PARSING_ERROR_NO_SUGGESTION = SYNTAX + INTERNAL + 205;
    INVALID_UNARY_EXPRESSION = SYNTAX + INTERNAL + 206;
    INTERFACE_CANNOT_HAVE_CONSTRUCTORS = SYNTAX + INTERNAL + 207;
    ARRAY_CONSTANTS_ONLY_IN_ARRAY_INITIALIZERS = SYNTAX + INTERNAL + 208;
    PARSING_ERROR_ON_KEYWORD = SYNTAX + INTERNAL + 209;
    PARSING_ERROR_ON_KEYWORD_NO_SUGGESTION = SYNTAX + INTERNAL + 210;
    UNMATCHED_BRACKET = SYNTAX + INTERNAL + 220;
    NO_FIELD_ON_BASE_TYPE = FIELD_RELATED + 221;
    INVALID_EXPRESSION_AS_STATEMENT = SYNTAX + INTERNAL + 222;
    EXPRESSION_SHOULD_BE_A_VARIABLE = SYNTAX + INTERNAL + 223;
    MISSING_SEMICOLON = SYNTAX + INTERNAL + 224;
    INVALID_PARENTHESIZED_EXPRESSION = SYNTAX + INTERNAL + 225;
    PARSING_ERROR_INSERT_TOKEN_BEFORE = SYNTAX + INTERNAL + 230;
    PARSING_ERROR_INSERT_TOKEN_AFTER = SYNTAX + INTERNAL + 231;
    PARSING_ERROR_DELETE_TOKEN = SYNTAX + INTERNAL + 232;
    PARSING_ERROR_DELETE_TOKENS = SYNTAX + INTERNAL + 233;
    PARSING_ERROR_MERGE_TOKENS = SYNTAX + INTERNAL + 234;
    PARSING_ERROR_INVALID_TOKEN = SYNTAX + INTERNAL + 235;
    PARSING_ERROR_MISPLACED_CONSTRUCT = SYNTAX + INTERNAL + 236;
    PARSING_ERROR_REPLACE_TOKENS = SYNTAX + INTERNAL + 237;
    PARSING_ERROR_NO_SUGGESTION_FOR_TOKENS = SYNTAX + INTERNAL + 238;
    PARSING_ERROR_UNEXPECTED_EOF = SYNTAX + INTERNAL + 239;
    PARSING_ERROR_INSERT_TO_COMPLETE = SYNTAX + INTERNAL + 240;
    PARSING_ERROR_INSERT_TO_COMPLETE_SCOPE = SYNTAX + INTERNAL + 241;
    PARSING_ERROR_INSERT_TO_COMPLETE_PHRASE = SYNTAX + INTERNAL + 242;
    END_OF_SOURCE = SYNTAX + INTERNAL + 250;
    INVALID_HEXA = SYNTAX + INTERNAL + 251;
    INVALID_OCTAL = SYNTAX + INTERNAL + 252;
    INVALID_CHARACTER_CONSTANT = SYNTAX + INTERNAL + 253;
    INVALID_ESCAPE = SYNTAX + INTERNAL + 254;
    INVALID_INPUT = SYNTAX + INTERNAL + 255;
    INVALID_UNICODE_ESCAPE = SYNTAX + INTERNAL + 256;
    INVALID_FLOAT = SYNTAX + INTERNAL + 257;
    NULL_SOURCE_STRING = SYNTAX + INTERNAL + 258;
    UNTERMINATED_STRING = SYNTAX + INTERNAL + 259;
    UNTERMINATED_COMMENT = SYNTAX + INTERNAL + 260;
    NON_EXTERNALIZED_STRING_LITERAL = INTERNAL + 261;
    INVALID_DIGIT = SYNTAX + INTERNAL + 262;
    INVALID_LOW_SURROGATE = SYNTAX + INTERNAL + 263;
    INVALID_HIGH_SURROGATE = SYNTAX + INTERNAL + 264;
    UNNECESSARY_NLS_TAG = INTERNAL + 265;
    INVALID_BINARY = SYNTAX + INTERNAL + 266;
    BINARY_LITERAL_NOT_BELOW_17 = SYNTAX + INTERNAL + 267;
    ILLEGAL_UNDERSCORE_POSITION = SYNTAX + INTERNAL + 268;
    UNDERSCORES_IN_LITERALS_NOT_BELOW_17 = SYNTAX + INTERNAL + 269;
    ILLEGAL_HEXA_LITERAL = SYNTAX + INTERNAL + 270;
    MISSING_TYPE_IN_LAMBDA = METHOD_RELATED + 271;
    DISCOURAGED_REFERENCE = TYPE_RELATED + 280;

    // type declarations and hierarchy
    INTERFACE_CANNOT_HAVE_INITIALIZERS = TYPE_RELATED + 300;
    DUPLICATE_MODIFIER_FOR_TYPE = TYPE_RELATED + 301;
    ILLEGAL_MODIFIER_FOR_CLASS = TYPE_RELATED + 302;
    ILLEGAL_MODIFIER_FOR_INTERFACE = TYPE_RELATED + 303;
    ILLEGAL_MODIFIER_FOR_MEMBER_CLASS = TYPE_RELATED + 304;
    ILLEGAL_MODIFIER_FOR_MEMBER_INTERFACE = TYPE_RELATED + 305;
    ILLEGAL_MODIFIER_FOR_LOCAL_CLASS = TYPE_RELATED + 306;
    ILLEGAL_MODIFIER_COMBINATION_FINAL_ABSTRACT_FOR_CLASS = TYPE_RELATED + 308;
    ILLEGAL_VISIBILITY_MODIFIER_FOR_INTERFACE_MEMBER_TYPE = TYPE_RELATED + 309;
    ILLEGAL_VISIBILITY_MODIFIER_COMBINATION_FOR_MEMBER_TYPE = TYPE_RELATED + 310;
    ILLEGAL_STATIC_MODIFIER_FOR_MEMBER_TYPE = TYPE_RELATED + 311;
    SUPERCLASS_MUST_BE_A_CLASS = TYPE_RELATED + 312;
    CLASS_EXTENDS_FINAL_CLASS = TYPE_RELATED + 313;
    DUPLICATE_SUPER_INTERFACE = TYPE_RELATED + 314;
    SUPER_INTERFACE_MUST_BE_AN_INTERFACE = TYPE_RELATED + 315;
    HIERARCHY_CIRCULARITY_SELF_REFERENCE = TYPE_RELATED + 316;
    HIERARCHY_CIRCULARITY = TYPE_RELATED + 317;
    HIDING_ENCLOSING_TYPE = TYPE_RELATED + 318;
    DUPLICATE_NESTED_TYPE = TYPE_RELATED + 319;
    CANNOT_THROW_TYPE = TYPE_RELATED + 320;
    PACKAGE_COLLIDES_WITH_TYPE = TYPE_RELATED + 321;
    TYPE_COLLIDES_WITH_PACKAGE = TYPE_RELATED + 322;
    DUPLICATE_TYPES = TYPE_RELATED + 323;
    IS_CLASS_PATH_CORRECT = TYPE_RELATED + 324;
    PUBLIC_CLASS_MUST_MATCH_FILE_NAME = TYPE_RELATED + 325;
    MUST_SPECIFY_PACKAGE = INTERNAL + 326;
    HIERARCHY_HAS_PROBLEMS = TYPE_RELATED + 327;
    PACKAGE_IS_NOT_EXPECTED_PACKAGE = INTERNAL + 328;
    OBJECT_CANNOT_HAVE_SUPER_TYPES = INTERNAL + 329;
    OBJECT_MUST_BE_CLASS = INTERNAL + 330;
    REDUNDANT_SUPERINTERFACE = TYPE_RELATED + 331;
    SHOULD_IMPLEMENT_HASHCODE = TYPE_RELATED + 332;
    ABSTRACT_METHODS_IN_CONCRETE_CLASS = TYPE_RELATED + 333;
    CORRUPTED_SIGNATURE = INTERNAL + 334;
    INVALID_ENCODING = INTERNAL + 335;
    CANNOT_READ_SOURCE = INTERNAL + 336;

    // imports
    CONFLICTING_IMPORT = IMPORT_RELATED + 385;
    DUPLICATE_IMPORT = IMPORT_RELATED + 386;
    CANNOT_IMPORT_PACKAGE = IMPORT_RELATED + 387;
    UNUSED_IMPORT = INTERNAL + IMPORT_RELATED + 388;
    IMPORT_NOT_FOUND = IMPORT_RELATED + 390 + 1;
    IMPORT_NOT_VISIBLE = IMPORT_RELATED + 390 + 2;
    IMPORT_AMBIGUOUS = IMPORT_RELATED + 390 + 3;
    IMPORT_INTERNAL_NAME_PROVIDED = IMPORT_RELATED + 390 + 4;
    IMPORT_INHERITED_NAME_HIDES_ENCLOSING_NAME = IMPORT_RELATED + 390 + 5;
    INVALID_TYPE_FOR_STATIC_IMPORT = IMPORT_RELATED + 391 + 300;

    // inheritance and overriding
    DUPLICATE_METHOD = METHOD_RELATED + 355;
    ILLEGAL_MODIFIER_FOR_ARGUMENT = METHOD_RELATED + 356;
    DUPLICATE_MODIFIER_FOR_METHOD = METHOD_RELATED + 357;
    ILLEGAL_MODIFIER_FOR_METHOD = METHOD_RELATED + 358;
    OVERRIDING_NON_VISIBLE_METHOD = METHOD_RELATED + 410;
    ABSTRACT_METHOD_CANNOT_BE_OVERRIDDEN = METHOD_RELATED + 411;
    OVERRIDING_DEPRECATED_METHOD = METHOD_RELATED + 412;
    INCOMPATIBLE_RETURN_TYPE_FOR_NON_INHERITED_INTERFACE_METHOD = METHOD_RELATED + 413;
    INCOMPATIBLE_EXCEPTION_IN_THROWS_CLAUSE_FOR_NON_INHERITED_INTERFACE_METHOD =
        METHOD_RELATED + 414;
    ILLEGAL_VARARGS_FOR_NON_VARIABLE_ARITY = METHOD_RELATED + 415;
    FINAL_METHOD_CANNOT_BE_OVERRIDDEN = METHOD_RELATED + 306;
    OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION = METHOD_RELATED + 418;
    MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD = METHOD_RELATED + 419;
    OVERRIDING_TERMINALLY_DEPRECATED_METHOD = METHOD_RELATED + 1400;

    // tasks and warning tokens
    TASK = INTERNAL + 450;
    UNHANDLED_WARNING_TOKEN = INTERNAL + 631;
    UNUSED_WARNING_TOKEN = INTERNAL + 635;
    PROBLEM_NOT_ANALYSED = INTERNAL + 1500;
    SUPPRESS_WARNINGS_NOT_ANALYSED = INTERNAL + 1501;

    // doc comments
    JAVADOC_UNEXPECTED_TAG = JAVADOC + INTERNAL + 470;
    JAVADOC_MISSING_PARAM_TAG = JAVADOC + INTERNAL + 471;
    JAVADOC_MISSING_PARAM_NAME = JAVADOC + INTERNAL + 472;
    JAVADOC_DUPLICATE_PARAM_NAME = JAVADOC + INTERNAL + 473;
    JAVADOC_INVALID_PARAM_NAME = JAVADOC + INTERNAL + 474;
    JAVADOC_MISSING_RETURN_TAG = JAVADOC + INTERNAL + 475;
    JAVADOC_DUPLICATE_RETURN_TAG = JAVADOC + INTERNAL + 476;
    JAVADOC_MISSING_THROWS_TAG = JAVADOC + INTERNAL + 477;
    JAVADOC_MISSING_THROWS_CLASS_NAME = JAVADOC + INTERNAL + 478;
    JAVADOC_INVALID_THROWS_CLASS = JAVADOC + INTERNAL + 479;
    JAVADOC_DUPLICATE_THROWS_CLASS_NAME = JAVADOC + INTERNAL + 480;
    JAVADOC_INVALID_THROWS_CLASS_NAME = JAVADOC + INTERNAL + 481;
    JAVADOC_MISSING_SEE_REFERENCE = JAVADOC + INTERNAL + 482;
    JAVADOC_INVALID_SEE_REFERENCE = JAVADOC + INTERNAL + 483;
    JAVADOC_INVALID_SEE_HREF = JAVADOC + INTERNAL + 484;
    JAVADOC_INVALID_SEE_ARGS = JAVADOC + INTERNAL + 485;
    JAVADOC_MISSING = JAVADOC + INTERNAL + 486;
    JAVADOC_INVALID_TAG = JAVADOC + INTERNAL + 487;
    JAVADOC_UNDEFINED_FIELD = JAVADOC + INTERNAL + 488;
    JAVADOC_NOT_VISIBLE_FIELD = JAVADOC + INTERNAL + 489;
    JAVADOC_AMBIGUOUS_FIELD = JAVADOC + INTERNAL + 490;
    JAVADOC_USING_DEPRECATED_FIELD = JAVADOC + INTERNAL + 491;
    JAVADOC_UNDEFINED_CONSTRUCTOR = JAVADOC + INTERNAL + 492;
    JAVADOC_NOT_VISIBLE_CONSTRUCTOR = JAVADOC + INTERNAL + 493;
    JAVADOC_AMBIGUOUS_CONSTRUCTOR = JAVADOC + INTERNAL + 494;
    JAVADOC_USING_DEPRECATED_CONSTRUCTOR = JAVADOC + INTERNAL + 495;
    JAVADOC_UNDEFINED_METHOD = JAVADOC + INTERNAL + 496;
    JAVADOC_NOT_VISIBLE_METHOD = JAVADOC + INTERNAL + 497;
    JAVADOC_AMBIGUOUS_METHOD = JAVADOC + INTERNAL + 498;
    JAVADOC_USING_DEPRECATED_METHOD = JAVADOC + INTERNAL + 499;
    JAVADOC_NO_MESSAGE_SEND_ON_BASE_TYPE = JAVADOC + INTERNAL + 500;
    JAVADOC_PARAMETER_MISMATCH = JAVADOC + INTERNAL + 501;
    JAVADOC_NO_MESSAGE_SEND_ON_ARRAY_TYPE = JAVADOC + INTERNAL + 502;
    JAVADOC_UNDEFINED_TYPE = JAVADOC + INTERNAL + 503;
    JAVADOC_NOT_VISIBLE_TYPE = JAVADOC + INTERNAL + 504;
    JAVADOC_AMBIGUOUS_TYPE = JAVADOC + INTERNAL + 505;
    JAVADOC_USING_DEPRECATED_TYPE = JAVADOC + INTERNAL + 506;
    JAVADOC_INTERNAL_TYPE_NAME_PROVIDED = JAVADOC + INTERNAL + 507;
    JAVADOC_INHERITED_METHOD_HIDES_ENCLOSING_NAME = JAVADOC + INTERNAL + 508;
    JAVADOC_INHERITED_FIELD_HIDES_ENCLOSING_NAME = JAVADOC + INTERNAL + 509;
    JAVADOC_INHERITED_NAME_HIDES_ENCLOSING_TYPE_NAME = JAVADOC + INTERNAL + 510;
    JAVADOC_AMBIGUOUS_METHOD_REFERENCE = JAVADOC + INTERNAL + 511;
    JAVADOC_UNTERMINATED_INLINE_TAG = JAVADOC + INTERNAL + 512;
    JAVADOC_MALFORMED_SEE_REFERENCE = JAVADOC + INTERNAL + 513;
    JAVADOC_MISSING_HASH_CHARACTER = JAVADOC + INTERNAL + 514;
    JAVADOC_EMPTY_RETURN_TAG = JAVADOC + INTERNAL + 515;
    JAVADOC_INVALID_VALUE_REFERENCE = JAVADOC + INTERNAL + 516;
    JAVADOC_UNEXPECTED_TEXT = JAVADOC + INTERNAL + 517;
    JAVADOC_INVALID_PARAM_TAG_NAME = JAVADOC + INTERNAL + 518;
    JAVADOC_MISSING_TAG_DESCRIPTION = JAVADOC + INTERNAL + 519;
    JAVADOC_HIDDEN_REFERENCE = JAVADOC + INTERNAL + 520;
    JAVADOC_INVALID_MEMBER_TYPE_QUALIFICATION = JAVADOC + INTERNAL + 521;
    JAVADOC_NON_STATIC_TYPE_FROM_STATIC_INVOCATION = JAVADOC + INTERNAL + 468;
    JAVADOC_GENERIC_METHOD_TYPE_ARGUMENT_MISMATCH = JAVADOC + INTERNAL + 460;
    JAVADOC_NON_GENERIC_METHOD = JAVADOC + INTERNAL + 461;
    JAVADOC_INCORRECT_ARITY_FOR_PARAMETERIZED_METHOD = JAVADOC + INTERNAL + 462;
    JAVADOC_PARAMETERIZED_METHOD_ARGUMENT_TYPE_MISMATCH = JAVADOC + INTERNAL + 463;
    JAVADOC_TYPE_ARGUMENTS_FOR_RAW_GENERIC_METHOD = JAVADOC + INTERNAL + 464;
    JAVADOC_GENERIC_CONSTRUCTOR_TYPE_ARGUMENT_MISMATCH = JAVADOC + INTERNAL + 465;
    JAVADOC_NON_GENERIC_CONSTRUCTOR = JAVADOC + INTERNAL + 466;
    JAVADOC_INCORRECT_ARITY_FOR_PARAMETERIZED_CONSTRUCTOR = JAVADOC + INTERNAL + 467;
    JAVADOC_PARAMETERIZED_CONSTRUCTOR_ARGUMENT_TYPE_MISMATCH = JAVADOC + INTERNAL + 469;
    JAVADOC_TYPE_ARGUMENTS_FOR_RAW_GENERIC_CONSTRUCTOR = JAVADOC + INTERNAL + 522;

    // generics
    DUPLICATE_TYPE_VARIABLE = INTERNAL + 520;
    ILLEGAL_TYPE_VARIABLE_SUPER_REFERENCE = INTERNAL + 521;
    NON_STATIC_TYPE_FROM_STATIC_INVOCATION = INTERNAL + 522;
    OBJECT_CANNOT_BE_GENERIC = INTERNAL + 523;
    NON_GENERIC_TYPE = TYPE_RELATED + 524;
    INCORRECT_ARITY_FOR_PARAMETERIZED_TYPE = TYPE_RELATED + 525;
    TYPE_ARGUMENT_MISMATCH = TYPE_RELATED + 526;
    DUPLICATE_METHOD_ERASURE = TYPE_RELATED + 527;
    REFERENCE_TO_FORWARD_TYPE_VARIABLE = TYPE_RELATED + 528;
    BOUND_MUST_BE_AN_INTERFACE = TYPE_RELATED + 529;
    UNSAFE_RAW_CONSTRUCTOR_INVOCATION = TYPE_RELATED + 530;
    UNSAFE_RAW_METHOD_INVOCATION = TYPE_RELATED + 531;
    UNSAFE_TYPE_CONVERSION = TYPE_RELATED + 532;
    INVALID_TYPE_VARIABLE_EXCEPTION_TYPE = TYPE_RELATED + 533;
    INVALID_PARAMETERIZED_EXCEPTION_TYPE = TYPE_RELATED + 534;
    ILLEGAL_GENERIC_ARRAY = TYPE_RELATED + 535;
    UNSAFE_RAW_FIELD_ASSIGNMENT = TYPE_RELATED + 536;
    FINAL_BOUND_FOR_TYPE_VARIABLE = TYPE_RELATED + 537;
    UNDEFINED_TYPE_VARIABLE = INTERNAL + 538;
    SUPER_INTERFACES_COLLIDE = TYPE_RELATED + 539;
    WILDCARD_CONSTRUCTOR_INVOCATION = TYPE_RELATED + 540;
    WILDCARD_METHOD_INVOCATION = TYPE_RELATED + 541;
    WILDCARD_FIELD_ASSIGNMENT = TYPE_RELATED + 542;
    GENERIC_METHOD_TYPE_ARGUMENT_MISMATCH = TYPE_RELATED + 543;
    GENERIC_CONSTRUCTOR_TYPE_ARGUMENT_MISMATCH = TYPE_RELATED + 544;
    UNSAFE_GENERIC_CAST = TYPE_RELATED + 545;
    ILLEGAL_INSTANCEOF_PARAMETERIZED_TYPE = INTERNAL + 546;
    ILLEGAL_INSTANCEOF_TYPE_PARAMETER = INTERNAL + 547;
    NON_GENERIC_METHOD = TYPE_RELATED + 548;
    INCORRECT_ARITY_FOR_PARAMETERIZED_METHOD = TYPE_RELATED + 549;
    PARAMETERIZED_METHOD_ARGUMENT_TYPE_MISMATCH = TYPE_RELATED + 550;
    TYPE_PARAMETER_HIDING_TYPE = TYPE_RELATED + 551;
    RAW_TYPE_REFERENCE = TYPE_RELATED + 552;
    NO_ADDITIONAL_BOUNDS_AFTER_TYPE_VARIABLE = TYPE_RELATED + 553;
    UNSAFE_RETURN_TYPE_OVERRIDE = METHOD_RELATED + 554;
    ILLEGAL_ACCESS_FROM_TYPE_VARIABLE = TYPE_RELATED + 584;
    TYPE_HIDING_TYPE_PARAMETER_FROM_TYPE = TYPE_RELATED + 585;
    TYPE_HIDING_TYPE_PARAMETER_FROM_METHOD = TYPE_RELATED + 586;
    INVALID_USAGE_OF_WILDCARD = SYNTAX + INTERNAL + 587;
    UNUSED_TYPE_ARGUMENTS_FOR_METHOD_INVOCATION = METHOD_RELATED + 588;
    UNSAFE_ELEMENT_TYPE_CONVERSION = TYPE_RELATED + 589;
    UNSAFE_RAW_GENERIC_METHOD_INVOCATION = METHOD_RELATED + 590;
    UNSAFE_RAW_GENERIC_CONSTRUCTOR_INVOCATION = CONSTRUCTOR_RELATED + 591;
    UNSAFE_GENERIC_ARRAY_FOR_VARARGS = METHOD_RELATED + 592;
    REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS = TYPE_RELATED + 593;
    UNUSED_TYPE_PARAMETER = TYPE_RELATED + 594;

    // autoboxing, varargs, enums, annotations
    BOXING_CONVERSION = INTERNAL + 720;
    UNBOXING_CONVERSION = INTERNAL + 721;
    METHOD_VARARGS_ARGUMENT_NEED_CAST = METHOD_RELATED + 591 + 400;
    CONSTRUCTOR_VARARGS_ARGUMENT_NEED_CAST = CONSTRUCTOR_RELATED + 592 + 400;
    VARARGS_CONFLICT = METHOD_RELATED + 594 + 400;
    MISSING_ENUM_CONSTANT_CASE = FIELD_RELATED + 766;
    MISSING_ENUM_CONSTANT_CASE_DESPITE_DEFAULT = FIELD_RELATED + 767;
    MISSING_DEFAULT_CASE = INTERNAL + 768;
    MISSING_ENUM_DEFAULT_CASE = INTERNAL + 769;
    SWITCH_ON_ENUM_NOT_BELOW_15 = TYPE_RELATED + 770;
    USE_ASSERT_AS_AN_IDENTIFIER = INTERNAL + 440;
    USE_ENUM_AS_AN_IDENTIFIER = INTERNAL + 441;
    ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER = SYNTAX + INTERNAL + 443;
    ANNOTATION_TYPE_USED_AS_SUPER_INTERFACE = TYPE_RELATED + 634;
    MISSING_OVERRIDE_ANNOTATION = METHOD_RELATED + 636;
    MISSING_OVERRIDE_ANNOTATION_FOR_INTERFACE_METHOD_IMPLEMENTATION = METHOD_RELATED + 637;
    FIELD_MISSING_DEPRECATED_ANNOTATION = INTERNAL + 629;
    METHOD_MISSING_DEPRECATED_ANNOTATION = INTERNAL + 630;
    TYPE_MISSING_DEPRECATED_ANNOTATION = INTERNAL + 632;
    REPEATABLE_ANNOTATION_WITH_REPEATING_CONTAINER_ANNOTATION = TYPE_RELATED + 902;
    TOLERATED_MISPLACED_TYPE_ANNOTATIONS = SYNTAX + INTERNAL + 892;

    // flow analysis
    NULL_LOCAL_VARIABLE_REFERENCE = INTERNAL + 451;
    POTENTIAL_NULL_LOCAL_VARIABLE_REFERENCE = INTERNAL + 452;
    REDUNDANT_NULL_CHECK_ON_NULL_LOCAL_VARIABLE = INTERNAL + 453;
    NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE = INTERNAL + 454;
    REDUNDANT_LOCAL_VARIABLE_NULL_ASSIGNMENT = INTERNAL + 455;
    NULL_LOCAL_VARIABLE_INSTANCEOF_YIELDS_FALSE = INTERNAL + 456;
    REDUNDANT_NULL_CHECK_ON_NON_NULL_LOCAL_VARIABLE = INTERNAL + 457;
    NON_NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE = INTERNAL + 458;
    DEAD_CODE = INTERNAL + 459;
    EXCEPTION_PARAMETER_IS_NEVER_USED = INTERNAL + 913;
    UNUSED_OBJECT_ALLOCATION = INTERNAL + 460;
    NULL_EXPRESSION_REFERENCE = INTERNAL + 907;
    POTENTIAL_NULL_EXPRESSION_REFERENCE = INTERNAL + 908;
    UNCLOSED_CLOSEABLE = INTERNAL + 885;
    UNCLOSED_CLOSEABLE_AT_EXIT = INTERNAL + 886;
    POTENTIALLY_UNCLOSED_CLOSEABLE = INTERNAL + 887;
    POTENTIALLY_UNCLOSED_CLOSEABLE_AT_EXIT = INTERNAL + 888;
    EXPLICITLY_CLOSED_AUTO_CLOSEABLE = INTERNAL + 889;
    UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE = INTERNAL + 1200;
    UNLIKELY_EQUALS_ARGUMENT_TYPE = INTERNAL + 1201;

    // null annotations
    REQUIRED_NON_NULL_BUT_PROVIDED_NULL = TYPE_RELATED + 910;
    REQUIRED_NON_NULL_BUT_PROVIDED_POTENTIAL_NULL = TYPE_RELATED + 911;
    REQUIRED_NON_NULL_BUT_PROVIDED_UNKNOWN = TYPE_RELATED + 912;
    MISSING_NON_NULL_BY_DEFAULT_ANNOTATION_ON_PACKAGE = INTERNAL + 913 + 100;
    NULL_ANNOTATION_IS_REDUNDANT = INTERNAL + 936;
    NULLITY_MISMATCH_TYPE_ARGUMENT = TYPE_RELATED + 964;
    NULL_ANNOTATION_INFERENCE_CONFLICT = TYPE_RELATED + 965;
    NULLITY_UNCHECKED_TYPE_ANNOTATION_DETAIL = TYPE_RELATED + 966;
    NONNULL_PARAMETER_ANNOTATION_DROPPED = METHOD_RELATED + 967;
    MISSING_NULL_ANNOTATION_IMPLICITLY_USED = INTERNAL + 981;
    ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED = TYPE_RELATED + 982;
    PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLE = INTERNAL + 983;
    NON_NULL_TYPE_VARIABLE_FROM_LEGACY_METHOD = TYPE_RELATED + 984;

    // access restrictions
    FORBIDDEN_REFERENCE = TYPE_RELATED + 1307 + 1000;

    // modules
    DUPLICATE_REQUIRES = MODULE_RELATED + 1301;
    DUPLICATE_EXPORTS = MODULE_RELATED + 1302;
    DUPLICATE_USES = MODULE_RELATED + 1303;
    DUPLICATE_SERVICES = MODULE_RELATED + 1304;
    CYCLIC_MODULE_DEPENDENCY = MODULE_RELATED + 1305;
    ABSTRACT_SERVICE_IMPLEMENTATION = TYPE_RELATED + 1306;
    PACKAGE_DOES_NOT_EXIST_OR_IS_EMPTY = MODULE_RELATED + 1311;
    DUPLICATE_OPENS = MODULE_RELATED + 1313;
    DUPLICATE_MODULE_REF = MODULE_RELATED + 1314;
    INVALID_OPENS_STATEMENT = MODULE_RELATED + 1315;
    ILLEGAL_MODIFIER_FOR_MODULE = MODULE_RELATED + 1318;
    UNDEFINED_MODULE = MODULE_RELATED + 1319;
    CONFLICTING_PACKAGE_FROM_MODULES = MODULE_RELATED + 1320;
    CONFLICTING_PACKAGE_FROM_OTHER_MODULES = MODULE_RELATED + 1321;
    NON_PUBLIC_TYPE_IN_API = INTERNAL + 1322;
    NOT_EXPORTED_TYPE_IN_API = INTERNAL + 1323;
    MISSING_REQUIRES_TRANSITIVE_FOR_TYPE_IN_API = INTERNAL + 1324;
    UNNAMED_PACKAGE_IN_NAMED_MODULE = MODULE_RELATED + 1325;
    UNSTABLE_AUTO_MODULE_NAME = MODULE_RELATED + 1326;
    UNDEFINED_MODULE_ADD_READS = MODULE_RELATED + 1351;

    // deprecation beyond the basic forms
    USING_TERMINALLY_DEPRECATED_TYPE = TYPE_RELATED + 1401;
    USING_TERMINALLY_DEPRECATED_METHOD = METHOD_RELATED + 1402;
    USING_TERMINALLY_DEPRECATED_CONSTRUCTOR = CONSTRUCTOR_RELATED + 1403;
    USING_TERMINALLY_DEPRECATED_FIELD = FIELD_RELATED + 1404;

    // compliance and preview
    FEATURE_NOT_SUPPORTED = COMPLIANCE + 1102;
    PREVIEW_FEATURE_DISABLED = COMPLIANCE + 1103;
    PREVIEW_FEATURE_USED = COMPLIANCE + 1104;
    PREVIEW_FEATURE_NOT_SUPPORTED = COMPLIANCE + 1105;
    PREVIEW_FEATURES_NOT_ALLOWED = PREVIEW_RELATED + 1106;
    SWITCH_CASE_PATTERN_DOMINATED = PREVIEW_RELATED + 1911;
    PATTERN_SWITCH_NULL_ONLY_OR_FIRST = PREVIEW_RELATED + 1912;
    UNNAMED_VARIABLE_MUST_HAVE_INITIALIZER = PREVIEW_RELATED + 2000;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_no_duplicate_values() {
        let mut seen = HashSet::new();
        for (id, name) in KNOWN_PROBLEMS {
            assert!(seen.insert(*id), "duplicate id for {name}");
        }
    }

    #[test]
    fn catalog_is_several_hundred_entries() {
        assert!(KNOWN_PROBLEMS.len() > 300);
    }

    #[test]
    fn ordinal_strips_family_bits() {
        assert_eq!(ProblemId::UNUSED_IMPORT.ordinal(), 388);
        assert_eq!(ProblemId::PARSING_ERROR.ordinal(), 204);
        assert_eq!(ProblemId::JAVADOC_MISSING.ordinal(), 486);
    }

    #[test]
    fn family_follows_fallback_order() {
        // syntax wins over member for explicit constructor calls
        assert_eq!(
            ProblemId::INVALID_EXPLICIT_CONSTRUCTOR_CALL.family(),
            Some(ProblemFamily::Syntax)
        );
        // type wins over member for unreachable catch blocks
        assert_eq!(
            ProblemId::UNREACHABLE_CATCH.family(),
            Some(ProblemFamily::Type)
        );
        assert_eq!(
            ProblemId::UNUSED_IMPORT.family(),
            Some(ProblemFamily::Import)
        );
        assert_eq!(
            ProblemId::UNDEFINED_FIELD.family(),
            Some(ProblemFamily::Member)
        );
        assert_eq!(
            ProblemId::UNDEFINED_MODULE.family(),
            Some(ProblemFamily::Module)
        );
        assert_eq!(
            ProblemId::PREVIEW_FEATURE_USED.family(),
            Some(ProblemFamily::Compliance)
        );
        assert_eq!(
            ProblemId::PREVIEW_FEATURES_NOT_ALLOWED.family(),
            Some(ProblemFamily::Preview)
        );
        assert_eq!(ProblemId::DEAD_CODE.family(), None);
    }

    #[test]
    fn javadoc_bit() {
        assert!(ProblemId::JAVADOC_INVALID_TAG.is_javadoc());
        assert!(!ProblemId::UNUSED_IMPORT.is_javadoc());
    }

    #[test]
    fn display_uses_catalog_name() {
        assert_eq!(ProblemId::UNUSED_IMPORT.to_string(), "UNUSED_IMPORT");
        assert_eq!(ProblemId::from_raw(0x7).to_string(), "0x00000007");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ProblemId::TASK).unwrap();
        assert_eq!(json, (INTERNAL + 450).to_string());
    }
}
