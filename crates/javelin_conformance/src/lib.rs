//! Conformance test helpers for Javelin problem reporting.
//!
//! Provides a [`Session`] that wires options, a compilation unit, a reporter
//! and a collecting sink together, so integration tests can report problems
//! the way a compiler pass would and assert on what was recorded.

#![warn(missing_docs)]

use javelin_config::{load_config_from_str, CompilerOptions};
use javelin_problem::{CategorizedProblem, Category, CollectingSink, ProblemId, SeverityFlags};
use javelin_reporter::{
    compute_severity, problem_category, ActiveContext, CompilationUnit, HandleOutcome,
    ProblemReporter, ProblemRequest, ReferenceContext, TransientFlags,
};
use javelin_source::{SourceFile, Span};
use std::rc::Rc;
use std::sync::Arc;

/// Parses `toml` into compiler options, panicking on invalid input.
pub fn make_options(toml: &str) -> CompilerOptions {
    load_config_from_str(toml)
        .unwrap_or_else(|err| panic!("invalid test configuration: {err}"))
        .options
}

/// Creates a unit named `Test.java` holding `source`.
pub fn make_unit(source: &str, with_queue: bool) -> Rc<CompilationUnit> {
    let unit = CompilationUnit::new(SourceFile::new("Test.java", source));
    Rc::new(if with_queue { unit.with_queue() } else { unit })
}

/// Returns the severity and category `id` is classified with under `options`.
pub fn classify(id: ProblemId, options: &CompilerOptions) -> (SeverityFlags, Category) {
    let severity = compute_severity(id, options, TransientFlags::default());
    (severity, problem_category(severity, id))
}

/// A reporter bound to one compilation unit and a collecting sink.
pub struct Session {
    /// The unit under analysis.
    pub unit: Rc<CompilationUnit>,
    /// The reporter under test.
    pub reporter: ProblemReporter,
    /// Everything recorded so far.
    pub sink: CollectingSink,
}

impl Session {
    /// Creates a session for `source` without a deferred-problem queue.
    pub fn new(options: CompilerOptions, source: &str) -> Self {
        Self::with_unit(options, make_unit(source, false))
    }

    /// Creates a session whose unit has a deferred-problem queue.
    pub fn with_queue(options: CompilerOptions, source: &str) -> Self {
        Self::with_unit(options, make_unit(source, true))
    }

    fn with_unit(options: CompilerOptions, unit: Rc<CompilationUnit>) -> Self {
        Self {
            unit,
            reporter: ProblemReporter::new(Arc::new(options)),
            sink: CollectingSink::new(),
        }
    }

    /// Pairs `context` with this session's unit.
    pub fn activate(&self, context: ReferenceContext) -> ActiveContext {
        ActiveContext::new(Rc::new(context), Rc::clone(&self.unit))
    }

    /// Sets a fresh context named `name` spanning the whole unit.
    pub fn set_context(&mut self, name: &str) {
        let end = (self.unit.source().contents().len() as u32).saturating_sub(1);
        let active = self.activate(ReferenceContext::new(name, Span::new(0, end)));
        self.reporter.set_context(active);
    }

    /// Reports `request` through the reporter.
    pub fn report(&mut self, request: ProblemRequest) -> HandleOutcome {
        self.reporter.handle(request, &self.sink)
    }

    /// Returns a snapshot of everything recorded.
    pub fn problems(&self) -> Vec<CategorizedProblem> {
        self.sink.problems()
    }

    /// Reports every problem queued on this session's unit.
    pub fn drain(&mut self) -> Vec<HandleOutcome> {
        self.reporter.drain_scheduled(&self.unit, &self.sink)
    }
}
