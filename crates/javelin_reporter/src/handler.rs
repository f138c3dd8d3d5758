//! Turns a classified problem into a recorded one.
//!
//! The handler applies the error-handling policy, drops optional problems
//! where the unit or the context asks for it, records the rest on the sink,
//! and reports whether the caller has to abort.

use crate::category::problem_category;
use crate::context::ActiveContext;
use crate::request::ProblemRequest;
use javelin_config::CompilerOptions;
use javelin_problem::{irritant_of, CategorizedProblem, ProblemId, ProblemSink, SeverityFlags};
use std::sync::Arc;

/// How the pipeline reacts to errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ErrorHandlingPolicy {
    /// Keep compiling after errors.
    pub proceed_on_errors: bool,
    /// Abort the whole compilation on the first fatal error.
    pub stop_on_first_error: bool,
    /// Drop every non-internal problem.
    pub ignore_all_errors: bool,
}

impl ErrorHandlingPolicy {
    /// Reports everything and keeps going.
    pub const PROCEED: ErrorHandlingPolicy = ErrorHandlingPolicy {
        proceed_on_errors: true,
        stop_on_first_error: false,
        ignore_all_errors: false,
    };

    /// Stops at the first fatal error.
    pub const EXIT_ON_FIRST_ERROR: ErrorHandlingPolicy = ErrorHandlingPolicy {
        proceed_on_errors: false,
        stop_on_first_error: true,
        ignore_all_errors: false,
    };

    /// Drops problems, e.g. while speculatively resolving code.
    pub const IGNORE_ALL: ErrorHandlingPolicy = ErrorHandlingPolicy {
        proceed_on_errors: true,
        stop_on_first_error: false,
        ignore_all_errors: true,
    };
}

/// What happened to a reported problem.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleOutcome {
    /// Dropped without being recorded.
    Ignored,
    /// Silenced by `@SuppressWarnings` on the active context.
    Suppressed,
    /// Queued until the context's annotations are resolved.
    Deferred,
    /// Recorded on the sink.
    Recorded,
    /// The caller must unwind to the given abort level. The problem was
    /// recorded if a context was active.
    Abort(SeverityFlags),
}

/// Records classified problems under an error-handling policy.
#[derive(Debug)]
pub struct ProblemHandler {
    options: Arc<CompilerOptions>,
    policy: ErrorHandlingPolicy,
    root_policy: Option<ErrorHandlingPolicy>,
    suppress_tagging: bool,
}

impl ProblemHandler {
    /// Creates a handler.
    pub fn new(options: Arc<CompilerOptions>, policy: ErrorHandlingPolicy) -> Self {
        Self {
            options,
            policy,
            root_policy: None,
            suppress_tagging: false,
        }
    }

    /// Returns the options problems are handled under.
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Returns the policy in effect.
    pub fn policy(&self) -> ErrorHandlingPolicy {
        self.policy
    }

    /// Installs `policy`, returning the one it replaces.
    ///
    /// The first switch remembers the original policy as the root policy.
    pub fn switch_error_handling_policy(
        &mut self,
        policy: ErrorHandlingPolicy,
    ) -> ErrorHandlingPolicy {
        if self.root_policy.is_none() {
            self.root_policy = Some(self.policy);
        }
        tracing::trace!(?policy, "switching error handling policy");
        std::mem::replace(&mut self.policy, policy)
    }

    /// Temporarily restores the root policy, returning the one in effect.
    pub fn suspend_temp_error_handling_policy(&mut self) -> ErrorHandlingPolicy {
        let present = self.policy;
        if let Some(root) = self.root_policy {
            self.policy = root;
        }
        present
    }

    /// Reinstates a policy returned by
    /// [`suspend_temp_error_handling_policy`](Self::suspend_temp_error_handling_policy).
    pub fn resume_temp_error_handling_policy(&mut self, previous: ErrorHandlingPolicy) {
        self.policy = previous;
    }

    /// Keeps optional fatal errors from tagging their context unless they
    /// are treated as fatal.
    pub fn set_suppress_tagging(&mut self, suppress: bool) {
        self.suppress_tagging = suppress;
    }

    /// Handles one problem raised with `severity` in `active`.
    pub fn handle(
        &self,
        request: &ProblemRequest,
        severity: SeverityFlags,
        active: Option<&ActiveContext>,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        if severity.is_ignore() {
            return HandleOutcome::Ignored;
        }
        let mandatory = severity.is_mandatory();

        if !severity.contains(SeverityFlags::INTERNAL_ERROR) && self.policy.ignore_all_errors {
            if mandatory {
                if let Some(active) = active {
                    active.context.tag_as_having_ignored_mandatory_errors();
                }
            }
            return HandleOutcome::Ignored;
        }

        let irritant = irritant_of(request.id);
        let optional = irritant.is_some() && !mandatory;
        if optional
            && request.id != ProblemId::TASK
            && !self.options.ignore_source_folder_warnings
            && active.is_some_and(|active| active.unit.ignore_optional_problems())
        {
            return HandleOutcome::Ignored;
        }

        let Some(active) = active else {
            if severity.is_error() {
                tracing::warn!(id = %request.id, "error reported outside any context");
                return HandleOutcome::Abort(SeverityFlags::ABORT_COMPILATION);
            }
            return HandleOutcome::Ignored;
        };

        if let Some(irritant) = irritant {
            if self.options.suppress_warnings
                && !mandatory
                && active.context.is_suppressed(irritant)
                && (!severity.is_error() || self.options.suppress_optional_errors)
            {
                tracing::trace!(id = %request.id, context = active.context.name(), "suppressed");
                return HandleOutcome::Suppressed;
            }
        }

        let source = active.unit.source();
        let (line, column) = source.line_col(request.span.start);
        let problem = CategorizedProblem {
            id: request.id,
            severity,
            category: problem_category(severity, request.id),
            span: request.span,
            line,
            column,
            file_name: active.unit.file_name(),
            reference: Some(active.context.name().to_owned()),
            arguments: request.arguments.clone(),
            message_arguments: request.message_arguments.clone(),
        };
        tracing::debug!(
            id = %request.id,
            line,
            text = source.snippet(request.span),
            "recording problem"
        );
        sink.record(problem, mandatory);

        if severity.is_error() && severity.is_fatal() {
            if !self.suppress_tagging || self.options.treat_optional_error_as_fatal {
                active.context.tag_as_having_errors();
            }
            let abort = if self.policy.stop_on_first_error {
                SeverityFlags::ABORT_COMPILATION
            } else {
                severity.abort_bits()
            };
            if !abort.is_empty() {
                tracing::warn!(id = %request.id, ?abort, "problem requests abort");
                return HandleOutcome::Abort(abort);
            }
        }
        HandleOutcome::Recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ReferenceContext;
    use crate::unit::CompilationUnit;
    use javelin_problem::{Category, CollectingSink, Irritant, Level};
    use javelin_source::{SourceFile, Span};
    use std::rc::Rc;

    fn active(context: ReferenceContext, ignore_optional: bool) -> ActiveContext {
        let source = SourceFile::new(
            "src/p/A.java",
            "package p;\nimport java.util.List;\nclass A {}\n",
        );
        let unit = CompilationUnit::new(source).ignoring_optional_problems(ignore_optional);
        ActiveContext::new(Rc::new(context), Rc::new(unit))
    }

    fn handler(options: CompilerOptions) -> ProblemHandler {
        ProblemHandler::new(Arc::new(options), ErrorHandlingPolicy::PROCEED)
    }

    fn unused_import() -> ProblemRequest {
        ProblemRequest::new(ProblemId::UNUSED_IMPORT, Span::new(18, 31))
            .with_arguments(["java.util.List"])
    }

    #[test]
    fn records_with_line_and_category() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 45)), false);
        let outcome = handler(CompilerOptions::default()).handle(
            &unused_import(),
            SeverityFlags::WARNING,
            Some(&ctx),
            &sink,
        );
        assert_eq!(outcome, HandleOutcome::Recorded);
        let problems = sink.take_all();
        assert_eq!(problems.len(), 1);
        let problem = &problems[0];
        assert_eq!((problem.line, problem.column), (2, 8));
        assert_eq!(problem.category, Category::UnnecessaryCode);
        assert_eq!(problem.file_name, "src/p/A.java");
        assert_eq!(problem.reference.as_deref(), Some("A"));
    }

    #[test]
    fn ignore_severity_short_circuits() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 1)), false);
        let outcome = handler(CompilerOptions::default()).handle(
            &unused_import(),
            SeverityFlags::IGNORE,
            Some(&ctx),
            &sink,
        );
        assert_eq!(outcome, HandleOutcome::Ignored);
        assert!(sink.is_empty());
    }

    #[test]
    fn ignore_all_policy_tags_mandatory_errors() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 1)), false);
        let mut handler = handler(CompilerOptions::default());
        handler.switch_error_handling_policy(ErrorHandlingPolicy::IGNORE_ALL);
        let request = ProblemRequest::new(ProblemId::UNDEFINED_TYPE, Span::new(0, 1));
        let outcome = handler.handle(
            &request,
            SeverityFlags::ERROR | SeverityFlags::FATAL,
            Some(&ctx),
            &sink,
        );
        assert_eq!(outcome, HandleOutcome::Ignored);
        assert!(ctx.context.has_ignored_mandatory_errors());
        assert!(sink.is_empty());

        let internal = handler.handle(
            &request,
            SeverityFlags::ERROR | SeverityFlags::INTERNAL_ERROR,
            Some(&ctx),
            &sink,
        );
        assert_eq!(internal, HandleOutcome::Recorded);
    }

    #[test]
    fn unit_ignoring_optional_problems() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 1)), true);
        let mut options = CompilerOptions::default();
        let outcome =
            handler(options.clone()).handle(&unused_import(), SeverityFlags::WARNING, Some(&ctx), &sink);
        assert_eq!(outcome, HandleOutcome::Ignored);

        let task = ProblemRequest::new(ProblemId::TASK, Span::new(0, 1));
        let outcome = handler(options.clone()).handle(&task, SeverityFlags::WARNING, Some(&ctx), &sink);
        assert_eq!(outcome, HandleOutcome::Recorded);

        options.ignore_source_folder_warnings = true;
        let outcome =
            handler(options).handle(&unused_import(), SeverityFlags::WARNING, Some(&ctx), &sink);
        assert_eq!(outcome, HandleOutcome::Recorded);
    }

    #[test]
    fn no_context() {
        let sink = CollectingSink::new();
        let handler = handler(CompilerOptions::default());
        assert_eq!(
            handler.handle(&unused_import(), SeverityFlags::WARNING, None, &sink),
            HandleOutcome::Ignored
        );
        let request = ProblemRequest::new(ProblemId::UNDEFINED_TYPE, Span::new(0, 1));
        assert_eq!(
            handler.handle(&request, SeverityFlags::ERROR | SeverityFlags::FATAL, None, &sink),
            HandleOutcome::Abort(SeverityFlags::ABORT_COMPILATION)
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn suppress_warnings() {
        let sink = CollectingSink::new();
        let ctx = active(
            ReferenceContext::new("A", Span::new(0, 1)).suppressing(["unused"]),
            false,
        );
        let mut options = CompilerOptions::default();
        assert_eq!(
            handler(options.clone()).handle(&unused_import(), SeverityFlags::WARNING, Some(&ctx), &sink),
            HandleOutcome::Suppressed
        );

        let optional_error = SeverityFlags::ERROR | SeverityFlags::OPTIONAL;
        assert_eq!(
            handler(options.clone()).handle(&unused_import(), optional_error, Some(&ctx), &sink),
            HandleOutcome::Recorded
        );
        options.suppress_optional_errors = true;
        assert_eq!(
            handler(options.clone()).handle(&unused_import(), optional_error, Some(&ctx), &sink),
            HandleOutcome::Suppressed
        );

        options.suppress_warnings = false;
        assert_eq!(
            handler(options).handle(&unused_import(), SeverityFlags::WARNING, Some(&ctx), &sink),
            HandleOutcome::Recorded
        );
    }

    #[test]
    fn fatal_error_tags_context_and_honors_abort_bits() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 1)), false);
        let handler = handler(CompilerOptions::default());
        let request = ProblemRequest::new(ProblemId::UNDEFINED_TYPE, Span::new(0, 1));
        assert_eq!(
            handler.handle(&request, SeverityFlags::ERROR | SeverityFlags::FATAL, Some(&ctx), &sink),
            HandleOutcome::Recorded
        );
        assert!(ctx.context.has_errors());
        let aborting = SeverityFlags::ERROR | SeverityFlags::FATAL | SeverityFlags::ABORT_METHOD;
        assert_eq!(
            handler.handle(&request, aborting, Some(&ctx), &sink),
            HandleOutcome::Abort(SeverityFlags::ABORT_METHOD)
        );
        assert_eq!(sink.mandatory_error_count(), 2);
    }

    #[test]
    fn stop_on_first_error() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 1)), false);
        let handler = ProblemHandler::new(
            Arc::new(CompilerOptions::default()),
            ErrorHandlingPolicy::EXIT_ON_FIRST_ERROR,
        );
        let request = ProblemRequest::new(ProblemId::UNDEFINED_TYPE, Span::new(0, 1));
        assert_eq!(
            handler.handle(&request, SeverityFlags::ERROR | SeverityFlags::FATAL, Some(&ctx), &sink),
            HandleOutcome::Abort(SeverityFlags::ABORT_COMPILATION)
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn suppress_tagging_spares_optional_fatal_errors() {
        let sink = CollectingSink::new();
        let ctx = active(ReferenceContext::new("A", Span::new(0, 1)), false);
        let mut options = CompilerOptions::default().with_severity(Irritant::UnusedImport, Level::Error);
        options.treat_optional_error_as_fatal = false;
        let mut handler = handler(options);
        handler.set_suppress_tagging(true);
        let severity = SeverityFlags::ERROR | SeverityFlags::OPTIONAL | SeverityFlags::FATAL;
        assert_eq!(
            handler.handle(&unused_import(), severity, Some(&ctx), &sink),
            HandleOutcome::Recorded
        );
        assert!(!ctx.context.has_errors());
    }

    #[test]
    fn policy_switch_suspend_resume() {
        let mut handler = handler(CompilerOptions::default());
        let previous = handler.switch_error_handling_policy(ErrorHandlingPolicy::IGNORE_ALL);
        assert_eq!(previous, ErrorHandlingPolicy::PROCEED);
        let present = handler.suspend_temp_error_handling_policy();
        assert_eq!(present, ErrorHandlingPolicy::IGNORE_ALL);
        assert_eq!(handler.policy(), ErrorHandlingPolicy::PROCEED);
        handler.resume_temp_error_handling_policy(present);
        assert_eq!(handler.policy(), ErrorHandlingPolicy::IGNORE_ALL);
    }

    #[test]
    fn suspend_without_switch_keeps_policy() {
        let mut handler = handler(CompilerOptions::default());
        let present = handler.suspend_temp_error_handling_policy();
        assert_eq!(present, ErrorHandlingPolicy::PROCEED);
        assert_eq!(handler.policy(), ErrorHandlingPolicy::PROCEED);
    }
}
