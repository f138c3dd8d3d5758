//! The reporting façade used by the compiler passes.

use crate::ast::{BindingId, Node};
use crate::context::{ActiveContext, ContextSlot};
use crate::handler::{ErrorHandlingPolicy, HandleOutcome, ProblemHandler};
use crate::range::RangeResolver;
use crate::request::ProblemRequest;
use crate::schedule::ScheduledProblem;
use crate::severity::{compute_severity, TransientFlags};
use crate::unit::CompilationUnit;
use javelin_config::CompilerOptions;
use javelin_problem::{ProblemId, ProblemSink, SeverityFlags};
use javelin_source::Span;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use std::sync::Arc;

/// Classifies problems and hands them to a sink.
///
/// The reporter carries the current-declaration slot, the transient flags
/// and a range resolver with its own scanner. It serves one compilation
/// unit at a time and is neither `Send` nor `Sync`.
///
/// Every report consumes the slot: after [`handle`](Self::handle) returns,
/// on any path, no context is set. Use [`enter`](Self::enter) to restore
/// an enclosing context automatically.
#[derive(Debug)]
pub struct ProblemReporter {
    options: Arc<CompilerOptions>,
    handler: ProblemHandler,
    ranges: RangeResolver,
    slot: ContextSlot,
    flags: TransientFlags,
}

/// Restores the previously active context when dropped.
pub struct ContextScope<'a> {
    reporter: &'a mut ProblemReporter,
    previous: Option<ActiveContext>,
}

impl Deref for ContextScope<'_> {
    type Target = ProblemReporter;

    fn deref(&self) -> &ProblemReporter {
        self.reporter
    }
}

impl DerefMut for ContextScope<'_> {
    fn deref_mut(&mut self) -> &mut ProblemReporter {
        self.reporter
    }
}

impl Drop for ContextScope<'_> {
    fn drop(&mut self) {
        self.reporter.slot.restore(self.previous.take());
    }
}

impl ProblemReporter {
    /// Creates a reporter that proceeds on errors.
    pub fn new(options: Arc<CompilerOptions>) -> Self {
        Self::with_policy(options, ErrorHandlingPolicy::PROCEED)
    }

    /// Creates a reporter with an explicit error-handling policy.
    pub fn with_policy(options: Arc<CompilerOptions>, policy: ErrorHandlingPolicy) -> Self {
        Self {
            handler: ProblemHandler::new(Arc::clone(&options), policy),
            options,
            ranges: RangeResolver::new(),
            slot: ContextSlot::default(),
            flags: TransientFlags::default(),
        }
    }

    /// Returns the session options.
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Returns the problem handler.
    pub fn handler(&self) -> &ProblemHandler {
        &self.handler
    }

    /// Returns the problem handler for policy changes.
    pub fn handler_mut(&mut self) -> &mut ProblemHandler {
        &mut self.handler
    }

    /// Sets the context the next report is attributed to.
    pub fn set_context(&mut self, active: ActiveContext) -> Option<ActiveContext> {
        self.slot.set(active)
    }

    /// Returns the context the next report would be attributed to.
    pub fn current_context(&self) -> Option<&ActiveContext> {
        self.slot.get()
    }

    /// Sets `active` for the lifetime of the returned scope.
    pub fn enter(&mut self, active: ActiveContext) -> ContextScope<'_> {
        let previous = self.slot.set(active);
        ContextScope {
            reporter: self,
            previous,
        }
    }

    /// Returns the severity `id` would be reported with right now.
    pub fn compute_severity(&self, id: ProblemId) -> SeverityFlags {
        compute_severity(id, &self.options, self.flags)
    }

    /// Classifies and records one problem in the current context.
    ///
    /// Problems raised while the context's annotations are unresolved are
    /// queued on the unit instead, if it has a queue.
    pub fn handle(
        &mut self,
        mut request: ProblemRequest,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        let active = self.slot.take();
        let severity = match request.severity {
            Some(severity) => severity,
            None => self.compute_severity(request.id),
        };
        if severity.is_ignore() {
            return HandleOutcome::Ignored;
        }
        if let Some(active) = &active {
            if !active.context.annotations_resolved() {
                if let Some(queue) = active.unit.queue() {
                    tracing::trace!(
                        id = %request.id,
                        context = active.context.name(),
                        "deferring until annotations are resolved"
                    );
                    request.severity = Some(severity);
                    queue.push(ScheduledProblem {
                        context: Rc::clone(&active.context),
                        request,
                    });
                    return HandleOutcome::Deferred;
                }
            }
        }
        self.handler.handle(&request, severity, active.as_ref(), sink)
    }

    /// Queues `request` on the current context's unit.
    ///
    /// Returns `false`, leaving the slot untouched, when there is no context
    /// or its unit has no queue; the caller then reports immediately.
    pub fn schedule_problem_for_context(&mut self, request: ProblemRequest) -> bool {
        let Some(active) = self.slot.get() else {
            return false;
        };
        let Some(queue) = active.unit.queue() else {
            return false;
        };
        tracing::trace!(id = %request.id, context = active.context.name(), "scheduling problem");
        queue.push(ScheduledProblem {
            context: Rc::clone(&active.context),
            request,
        });
        self.slot.take();
        true
    }

    /// Reports every problem queued on `unit` so far, oldest first.
    ///
    /// Each item runs in the context captured when it was queued; the
    /// context active before the call is restored afterwards. Items queued
    /// while draining wait for the next call.
    pub fn drain_scheduled(
        &mut self,
        unit: &Rc<CompilationUnit>,
        sink: &dyn ProblemSink,
    ) -> Vec<HandleOutcome> {
        let Some(queue) = unit.queue() else {
            return Vec::new();
        };
        let batch = queue.take_batch();
        tracing::debug!(file = %unit.file_name(), count = batch.len(), "draining scheduled problems");
        batch
            .into_iter()
            .map(|item| {
                let mut scope = self.enter(ActiveContext::new(item.context, Rc::clone(unit)));
                scope.handle(item.request, sink)
            })
            .collect()
    }

    fn source(&self) -> Arc<str> {
        self.slot
            .get()
            .map_or_else(|| Arc::from(""), |active| active.unit.source().shared_contents())
    }

    /// An import that nothing references.
    pub fn unused_import(
        &mut self,
        import: &Node,
        name: &str,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        let source = self.source();
        let span = Span::new(
            self.ranges.start(import, None, 0),
            self.ranges.end(&source, import, None, 0),
        );
        self.handle(
            ProblemRequest::new(ProblemId::UNUSED_IMPORT, span).with_arguments([name]),
            sink,
        )
    }

    /// A field in a qualified name that does not resolve.
    ///
    /// `binding` and `index` select the segment the range is narrowed to.
    pub fn undefined_field(
        &mut self,
        name: &Node,
        binding: Option<BindingId>,
        index: usize,
        field: &str,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        let source = self.source();
        let span = Span::new(
            self.ranges.start(name, binding, index),
            self.ranges.end(&source, name, binding, index),
        );
        self.handle(
            ProblemRequest::new(ProblemId::UNDEFINED_FIELD, span).with_arguments([field]),
            sink,
        )
    }

    /// A parameterized type with the wrong number of type arguments.
    pub fn incorrect_arity_for_parameterized_type(
        &mut self,
        type_ref: &Node,
        type_name: &str,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        let source = self.source();
        let span = Span::new(
            type_ref.start(),
            self.ranges.end(&source, type_ref, None, 0),
        );
        self.handle(
            ProblemRequest::new(ProblemId::INCORRECT_ARITY_FOR_PARAMETERIZED_TYPE, span)
                .with_arguments([type_name]),
            sink,
        )
    }

    /// An expression wrapped in `paren_count` redundant parentheses.
    ///
    /// The range covers the expression inside the outermost redundant pair.
    pub fn unnecessary_parentheses(
        &mut self,
        expression: &Node,
        paren_count: usize,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        let source = self.source();
        let Span { start, end } = expression.span();
        let span = Span::new(
            self.ranges.start_after_parens(&source, start, end, paren_count),
            self.ranges.end_before_parens(&source, start, end, paren_count),
        );
        self.handle(ProblemRequest::new(ProblemId::UNNECESSARY_PARENTHESES, span), sink)
    }

    /// A task tag found in a comment.
    pub fn task(
        &mut self,
        tag: &str,
        message: &str,
        priority: &str,
        span: Span,
        sink: &dyn ProblemSink,
    ) -> HandleOutcome {
        self.handle(
            ProblemRequest::new(ProblemId::TASK, span).with_arguments([tag, message, priority]),
            sink,
        )
    }

    /// `_` used as an identifier; an error from Java 9 on.
    pub fn restricted_identifier(&mut self, span: Span, sink: &dyn ProblemSink) -> HandleOutcome {
        self.flags.underscore_is_error = self.options.underscore_is_restricted();
        let outcome = self.handle(
            ProblemRequest::new(ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER, span),
            sink,
        );
        self.flags.underscore_is_error = false;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ReferenceContext;
    use javelin_config::JavaVersion;
    use javelin_problem::{Category, CollectingSink};
    use javelin_source::SourceFile;

    const SOURCE: &str = "import java.util.List;\nclass A { Map<String, List<Integer>> m = ((a)); }\n";

    fn unit(queue: bool) -> Rc<CompilationUnit> {
        let unit = CompilationUnit::new(SourceFile::new("A.java", SOURCE));
        Rc::new(if queue { unit.with_queue() } else { unit })
    }

    fn active(name: &str, unit: &Rc<CompilationUnit>) -> ActiveContext {
        ActiveContext::new(
            Rc::new(ReferenceContext::new(name, Span::new(23, 72))),
            Rc::clone(unit),
        )
    }

    fn reporter() -> ProblemReporter {
        ProblemReporter::new(Arc::new(CompilerOptions::default()))
    }

    #[test]
    fn handle_clears_the_slot() {
        let sink = CollectingSink::new();
        let unit = unit(false);
        let mut reporter = reporter();
        reporter.set_context(active("A", &unit));
        let outcome = reporter.unused_import(&Node::Plain(Span::new(7, 20)), "java.util.List", &sink);
        assert_eq!(outcome, HandleOutcome::Recorded);
        assert!(reporter.current_context().is_none());
    }

    #[test]
    fn ignored_problem_also_clears_the_slot() {
        let sink = CollectingSink::new();
        let unit = unit(false);
        let mut reporter = reporter();
        reporter.set_context(active("A", &unit));
        let outcome = reporter.handle(
            ProblemRequest::new(ProblemId::UNNECESSARY_ELSE, Span::new(0, 1)),
            &sink,
        );
        assert_eq!(outcome, HandleOutcome::Ignored);
        assert!(reporter.current_context().is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn scope_restores_outer_context() {
        let sink = CollectingSink::new();
        let unit = unit(false);
        let mut reporter = reporter();
        reporter.set_context(active("outer", &unit));
        {
            let mut scope = reporter.enter(active("inner", &unit));
            scope.task("TODO", "fix", "NORMAL", Span::new(0, 3), &sink);
            assert!(scope.current_context().is_none());
        }
        assert_eq!(
            reporter.current_context().map(|a| a.context.name()),
            Some("outer")
        );
        assert_eq!(sink.problems()[0].reference.as_deref(), Some("inner"));
    }

    #[test]
    fn parameterized_type_range() {
        let sink = CollectingSink::new();
        let unit = unit(false);
        let mut reporter = reporter();
        reporter.set_context(active("A", &unit));
        // Map<String, List<Integer>> starts at 33; stored end cut at `List`
        let node = Node::ParameterizedType {
            span: Span::new(33, 48),
            type_arguments: vec![Node::Plain(Span::new(37, 42)), Node::Plain(Span::new(45, 57))],
        };
        reporter.incorrect_arity_for_parameterized_type(&node, "Map", &sink);
        let problem = &sink.problems()[0];
        assert_eq!(problem.span, Span::new(33, 58));
        assert_eq!(problem.category, Category::Type);
    }

    #[test]
    fn unnecessary_parentheses_range() {
        let sink = CollectingSink::new();
        let unit = unit(false);
        let options = CompilerOptions::default().with_severity(
            javelin_problem::Irritant::UnnecessaryParentheses,
            javelin_problem::Level::Warning,
        );
        let mut reporter = ProblemReporter::new(Arc::new(options));
        reporter.set_context(active("A", &unit));
        reporter.unnecessary_parentheses(&Node::Plain(Span::new(64, 68)), 2, &sink);
        assert_eq!(sink.problems()[0].span, Span::new(66, 66));
    }

    #[test]
    fn restricted_identifier_depends_on_compliance() {
        let sink = CollectingSink::new();
        let unit = unit(false);
        let mut reporter = reporter();
        reporter.set_context(active("A", &unit));
        reporter.restricted_identifier(Span::new(0, 0), &sink);
        assert!(sink.problems()[0].is_error());
        assert_eq!(
            reporter.compute_severity(ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER),
            SeverityFlags::WARNING
        );

        let mut options = CompilerOptions::default();
        options.compliance = JavaVersion::JAVA_8;
        options.source = JavaVersion::JAVA_8;
        let mut reporter = ProblemReporter::new(Arc::new(options));
        reporter.set_context(active("A", &unit));
        reporter.restricted_identifier(Span::new(0, 0), &sink);
        assert!(sink.problems()[1].is_warning());
    }

    #[test]
    fn unresolved_annotations_defer_until_drained() {
        let sink = CollectingSink::new();
        let unit = unit(true);
        let context = Rc::new(ReferenceContext::new("A", Span::new(23, 72)).with_unresolved_annotations());
        let mut reporter = reporter();
        reporter.set_context(ActiveContext::new(Rc::clone(&context), Rc::clone(&unit)));
        let outcome = reporter.unused_import(&Node::Plain(Span::new(7, 20)), "java.util.List", &sink);
        assert_eq!(outcome, HandleOutcome::Deferred);
        assert!(sink.is_empty());
        assert!(reporter.current_context().is_none());

        // still unresolved: the item goes back to the queue
        assert_eq!(reporter.drain_scheduled(&unit, &sink), vec![HandleOutcome::Deferred]);
        assert_eq!(unit.queue().map(|q| q.len()), Some(1));

        context.resolve_annotations();
        assert_eq!(reporter.drain_scheduled(&unit, &sink), vec![HandleOutcome::Recorded]);
        assert_eq!(sink.len(), 1);
        assert_eq!(unit.queue().map(|q| q.len()), Some(0));
    }

    #[test]
    fn schedule_without_queue_returns_false() {
        let unit = unit(false);
        let mut reporter = reporter();
        let request = ProblemRequest::new(ProblemId::UNUSED_IMPORT, Span::new(7, 20));
        assert!(!reporter.schedule_problem_for_context(request.clone()));
        reporter.set_context(active("A", &unit));
        assert!(!reporter.schedule_problem_for_context(request));
        assert!(reporter.current_context().is_some());
    }

    #[test]
    fn drain_restores_prior_context_and_keeps_order() {
        let sink = CollectingSink::new();
        let unit = unit(true);
        let mut reporter = reporter();
        for name in ["first", "second"] {
            reporter.set_context(active(name, &unit));
            assert!(reporter.schedule_problem_for_context(ProblemRequest::new(
                ProblemId::UNUSED_IMPORT,
                Span::new(7, 20),
            )));
            assert!(reporter.current_context().is_none());
        }
        reporter.set_context(active("caller", &unit));
        let outcomes = reporter.drain_scheduled(&unit, &sink);
        assert_eq!(outcomes, vec![HandleOutcome::Recorded, HandleOutcome::Recorded]);
        let names: Vec<_> = sink
            .problems()
            .into_iter()
            .filter_map(|p| p.reference)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(
            reporter.current_context().map(|a| a.context.name()),
            Some("caller")
        );
    }
}
