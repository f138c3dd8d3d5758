//! Coarse problem categories used by tooling to group diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The display category of a classified problem.
///
/// The first group is selected through a problem's irritant, the second
/// through the family bits of its id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Code style.
    Style,
    /// Likely programming mistakes.
    PotentialBug,
    /// Names hiding or shadowing other names.
    NameShadowing,
    /// Code that can be removed.
    UnnecessaryCode,
    /// Use of deprecated API.
    Deprecation,
    /// Non-externalized strings.
    Nls,
    /// Task tags found in comments.
    Task,
    /// Doc comment problems.
    Javadoc,
    /// Unchecked or raw generic operations.
    UncheckedRaw,
    /// Access restricted by the build path.
    RestrictedAccess,
    /// Build path or class path configuration.
    Buildpath,
    /// Lexical and syntactic problems.
    Syntax,
    /// Import declarations.
    Import,
    /// Types.
    Type,
    /// Fields, methods, and constructors.
    Member,
    /// Module declarations.
    Module,
    /// Compliance level.
    Compliance,
    /// Preview features.
    Preview,
    /// Everything else.
    Internal,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 19] = [
        Category::Style,
        Category::PotentialBug,
        Category::NameShadowing,
        Category::UnnecessaryCode,
        Category::Deprecation,
        Category::Nls,
        Category::Task,
        Category::Javadoc,
        Category::UncheckedRaw,
        Category::RestrictedAccess,
        Category::Buildpath,
        Category::Syntax,
        Category::Import,
        Category::Type,
        Category::Member,
        Category::Module,
        Category::Compliance,
        Category::Preview,
        Category::Internal,
    ];

    /// Returns the stable numeric code reported to tooling.
    pub const fn code(self) -> u32 {
        match self {
            Category::Task => 0,
            Category::Buildpath => 10,
            Category::Syntax => 20,
            Category::Import => 30,
            Category::Type => 40,
            Category::Member => 50,
            Category::Internal => 60,
            Category::Javadoc => 70,
            Category::Style => 80,
            Category::PotentialBug => 90,
            Category::NameShadowing => 100,
            Category::Deprecation => 110,
            Category::UnnecessaryCode => 120,
            Category::UncheckedRaw => 130,
            Category::Nls => 140,
            Category::RestrictedAccess => 150,
            Category::Module => 160,
            Category::Compliance => 170,
            Category::Preview => 180,
        }
    }

    /// Returns the kebab-case name of this category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Style => "style",
            Category::PotentialBug => "potential-bug",
            Category::NameShadowing => "name-shadowing",
            Category::UnnecessaryCode => "unnecessary-code",
            Category::Deprecation => "deprecation",
            Category::Nls => "nls",
            Category::Task => "task",
            Category::Javadoc => "javadoc",
            Category::UncheckedRaw => "unchecked-raw",
            Category::RestrictedAccess => "restricted-access",
            Category::Buildpath => "buildpath",
            Category::Syntax => "syntax",
            Category::Import => "import",
            Category::Type => "type",
            Category::Member => "member",
            Category::Module => "module",
            Category::Compliance => "compliance",
            Category::Preview => "preview",
            Category::Internal => "internal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<u32> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Category::ALL.len());
    }

    #[test]
    fn display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
