//! The declaration under analysis and the slot holding it.
//!
//! A context does not point back at its unit; [`ActiveContext`] pairs the
//! two for the duration of one report.

use crate::unit::CompilationUnit;
use javelin_problem::{irritants_for_token, Irritant, IrritantSet};
use javelin_source::Span;
use std::cell::Cell;
use std::rc::Rc;

/// An enclosing declaration problems are attributed to.
#[derive(Debug)]
pub struct ReferenceContext {
    name: String,
    span: Span,
    suppressed: IrritantSet,
    annotations_resolved: Cell<bool>,
    has_errors: Cell<bool>,
    ignored_mandatory_errors: Cell<bool>,
}

impl ReferenceContext {
    /// Creates a context whose annotations are already resolved.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
            suppressed: IrritantSet::EMPTY,
            annotations_resolved: Cell::new(true),
            has_errors: Cell::new(false),
            ignored_mandatory_errors: Cell::new(false),
        }
    }

    /// Adds the irritants silenced by `@SuppressWarnings` tokens.
    ///
    /// Unknown tokens are skipped.
    pub fn suppressing<'a>(mut self, tokens: impl IntoIterator<Item = &'a str>) -> Self {
        for token in tokens {
            match irritants_for_token(token) {
                Some(irritants) => self.suppressed = self.suppressed.union(irritants),
                None => tracing::trace!(context = %self.name, token, "unknown warning token"),
            }
        }
        self
    }

    /// Marks the annotations as not yet resolved; problems are deferred until
    /// [`resolve_annotations`](Self::resolve_annotations) is called.
    pub fn with_unresolved_annotations(self) -> Self {
        self.annotations_resolved.set(false);
        self
    }

    /// Returns the declaration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declaration range.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the suppressed irritants.
    pub fn suppressed(&self) -> IrritantSet {
        self.suppressed
    }

    /// Returns `true` if problems governed by `irritant` are suppressed here.
    pub fn is_suppressed(&self, irritant: Irritant) -> bool {
        self.suppressed.contains(irritant)
    }

    /// Returns `true` once annotations are resolved.
    pub fn annotations_resolved(&self) -> bool {
        self.annotations_resolved.get()
    }

    /// Records that annotations are now resolved.
    pub fn resolve_annotations(&self) {
        self.annotations_resolved.set(true);
    }

    /// Records that a fatal error was reported in this context.
    pub fn tag_as_having_errors(&self) {
        self.has_errors.set(true);
    }

    /// Returns `true` if a fatal error was reported in this context.
    pub fn has_errors(&self) -> bool {
        self.has_errors.get()
    }

    /// Records that a mandatory error was dropped by the error-handling policy.
    pub fn tag_as_having_ignored_mandatory_errors(&self) {
        self.ignored_mandatory_errors.set(true);
    }

    /// Returns `true` if a mandatory error was dropped by the policy.
    pub fn has_ignored_mandatory_errors(&self) -> bool {
        self.ignored_mandatory_errors.get()
    }
}

/// A context paired with the unit it belongs to.
#[derive(Clone, Debug)]
pub struct ActiveContext {
    /// The declaration under analysis.
    pub context: Rc<ReferenceContext>,
    /// The unit containing it.
    pub unit: Rc<CompilationUnit>,
}

impl ActiveContext {
    /// Pairs `context` with `unit`.
    pub fn new(context: Rc<ReferenceContext>, unit: Rc<CompilationUnit>) -> Self {
        Self { context, unit }
    }
}

/// The single "current declaration" slot of a reporter.
#[derive(Debug, Default)]
pub struct ContextSlot(Option<ActiveContext>);

impl ContextSlot {
    /// Stores `active`, returning what was there before.
    pub fn set(&mut self, active: ActiveContext) -> Option<ActiveContext> {
        self.0.replace(active)
    }

    /// Replaces the slot contents with `previous`.
    pub fn restore(&mut self, previous: Option<ActiveContext>) {
        self.0 = previous;
    }

    /// Empties the slot, returning its contents.
    pub fn take(&mut self) -> Option<ActiveContext> {
        self.0.take()
    }

    /// Returns the current contents.
    pub fn get(&self) -> Option<&ActiveContext> {
        self.0.as_ref()
    }

    /// Returns `true` if no context is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_source::SourceFile;

    #[test]
    fn suppression_tokens() {
        let context =
            ReferenceContext::new("m()", Span::new(0, 4)).suppressing(["unused", "bogus"]);
        assert!(context.is_suppressed(Irritant::UnusedImport));
        assert!(context.is_suppressed(Irritant::UnusedLocalVariable));
        assert!(!context.is_suppressed(Irritant::RawTypeReference));
    }

    #[test]
    fn suppress_all_keeps_tasks() {
        let context = ReferenceContext::new("C", Span::new(0, 4)).suppressing(["all"]);
        assert!(context.is_suppressed(Irritant::DeadCode));
        assert!(!context.is_suppressed(Irritant::Task));
    }

    #[test]
    fn tagging() {
        let context = ReferenceContext::new("C", Span::new(0, 4)).with_unresolved_annotations();
        assert!(!context.annotations_resolved());
        context.resolve_annotations();
        assert!(context.annotations_resolved());
        assert!(!context.has_errors());
        context.tag_as_having_errors();
        assert!(context.has_errors());
        context.tag_as_having_ignored_mandatory_errors();
        assert!(context.has_ignored_mandatory_errors());
    }

    #[test]
    fn slot_set_take_restore() {
        let unit = Rc::new(CompilationUnit::new(SourceFile::new("A.java", "")));
        let outer = ActiveContext::new(
            Rc::new(ReferenceContext::new("outer", Span::new(0, 0))),
            Rc::clone(&unit),
        );
        let inner = ActiveContext::new(
            Rc::new(ReferenceContext::new("inner", Span::new(0, 0))),
            unit,
        );
        let mut slot = ContextSlot::default();
        assert!(slot.set(outer).is_none());
        let previous = slot.set(inner);
        assert_eq!(slot.get().map(|a| a.context.name()), Some("inner"));
        assert!(slot.take().is_some());
        assert!(slot.is_empty());
        slot.restore(previous);
        assert_eq!(slot.get().map(|a| a.context.name()), Some("outer"));
    }
}
