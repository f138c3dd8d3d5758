//! The classified problem handed to a sink.

use crate::category::Category;
use crate::ids::ProblemId;
use crate::irritant::irritant_of;
use crate::severity::{Level, SeverityFlags};
use crate::warning_token::token_for_irritant;
use javelin_source::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully classified problem, ready to be recorded.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CategorizedProblem {
    /// The problem kind.
    pub id: ProblemId,
    /// Level bit and modifiers.
    pub severity: SeverityFlags,
    /// Display category.
    pub category: Category,
    /// Inclusive source range.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based column of `span.start`.
    pub column: u32,
    /// Path of the compilation unit.
    pub file_name: String,
    /// Name of the enclosing declaration, if one was active.
    pub reference: Option<String>,
    /// Arguments identifying the problem's subjects, e.g. fully qualified names.
    pub arguments: Vec<String>,
    /// Arguments used to render the message text.
    pub message_arguments: Vec<String>,
}

impl CategorizedProblem {
    /// Returns the level of this problem.
    pub fn level(&self) -> Level {
        self.severity.level().unwrap_or(Level::Error)
    }

    /// Returns `true` if this problem is an error.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Returns `true` if this problem is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity.is_warning()
    }

    /// Returns the `@SuppressWarnings` token that would silence this problem.
    pub fn suppression_token(&self) -> Option<&'static str> {
        irritant_of(self.id).and_then(token_for_irritant)
    }
}

impl fmt::Display for CategorizedProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.file_name,
            self.line,
            self.column,
            self.level(),
            self.category,
            self.id
        )?;
        if !self.message_arguments.is_empty() {
            write!(f, " ({})", self.message_arguments.join(", "))?;
        }
        if let Some(token) = self.suppression_token() {
            write!(f, " [@SuppressWarnings(\"{token}\")]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategorizedProblem {
        CategorizedProblem {
            id: ProblemId::UNUSED_IMPORT,
            severity: SeverityFlags::WARNING,
            category: Category::UnnecessaryCode,
            span: Span::new(7, 22),
            line: 1,
            column: 8,
            file_name: "src/Foo.java".to_string(),
            reference: None,
            arguments: vec!["java.util.List".to_string()],
            message_arguments: vec!["java.util.List".to_string()],
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "src/Foo.java:1:8: warning [unnecessary-code] UNUSED_IMPORT (java.util.List) \
             [@SuppressWarnings(\"unused\")]"
        );
    }

    #[test]
    fn mandatory_problems_have_no_suppression_token() {
        let problem = CategorizedProblem {
            id: ProblemId::UNDEFINED_TYPE,
            severity: SeverityFlags::ERROR | SeverityFlags::FATAL,
            category: Category::Type,
            message_arguments: Vec::new(),
            ..sample()
        };
        assert_eq!(problem.suppression_token(), None);
        assert_eq!(problem.to_string(), "src/Foo.java:1:8: error [type] UNDEFINED_TYPE");
    }

    #[test]
    fn level_helpers() {
        let problem = sample();
        assert_eq!(problem.level(), Level::Warning);
        assert!(problem.is_warning());
        assert!(!problem.is_error());
    }

    #[test]
    fn serde_roundtrip() {
        let problem = sample();
        let json = serde_json::to_string(&problem).unwrap();
        let back: CategorizedProblem = serde_json::from_str(&json).unwrap();
        assert_eq!(problem, back);
    }
}
