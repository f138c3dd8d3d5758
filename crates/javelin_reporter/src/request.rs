//! The inputs of one problem report.

use javelin_problem::{ProblemId, SeverityFlags};
use javelin_source::Span;

/// Everything needed to classify and record one problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRequest {
    /// The problem kind.
    pub id: ProblemId,
    /// Inclusive source range.
    pub span: Span,
    /// Arguments identifying the problem's subjects.
    pub arguments: Vec<String>,
    /// Arguments used to render the message text.
    pub message_arguments: Vec<String>,
    /// Severity to use instead of the computed one.
    pub severity: Option<SeverityFlags>,
}

impl ProblemRequest {
    /// Creates a request without arguments.
    pub fn new(id: ProblemId, span: Span) -> Self {
        Self {
            id,
            span,
            arguments: Vec::new(),
            message_arguments: Vec::new(),
            severity: None,
        }
    }

    /// Sets both argument lists to `arguments`.
    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self.message_arguments = self.arguments.clone();
        self
    }

    /// Sets the message arguments only.
    pub fn with_message_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.message_arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    /// Forces the severity instead of computing it from the options.
    pub fn with_severity(mut self, severity: SeverityFlags) -> Self {
        self.severity = Some(severity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let request = ProblemRequest::new(ProblemId::UNUSED_IMPORT, Span::new(0, 9))
            .with_arguments(["java.util.List"])
            .with_message_arguments(["List"])
            .with_severity(SeverityFlags::ERROR);
        assert_eq!(request.arguments, vec!["java.util.List".to_owned()]);
        assert_eq!(request.message_arguments, vec!["List".to_owned()]);
        assert_eq!(request.severity, Some(SeverityFlags::ERROR));
    }
}
