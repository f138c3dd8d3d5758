//! Destinations for classified problems.

use crate::problem::CategorizedProblem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receives every problem that survives classification and filtering.
///
/// `mandatory` is `true` for errors the language requires, as opposed to
/// errors raised because an option was configured as an error.
pub trait ProblemSink {
    /// Records one problem.
    fn record(&self, problem: CategorizedProblem, mandatory: bool);
}

/// A thread-safe accumulator of recorded problems.
///
/// Error counts are tracked atomically so `has_errors` never takes the lock.
#[derive(Debug, Default)]
pub struct CollectingSink {
    problems: Mutex<Vec<CategorizedProblem>>,
    error_count: AtomicUsize,
    mandatory_error_count: AtomicUsize,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CategorizedProblem>> {
        self.problems.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if any error-level problem was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-level problems recorded so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Returns the number of mandatory errors recorded so far.
    pub fn mandatory_error_count(&self) -> usize {
        self.mandatory_error_count.load(Ordering::Relaxed)
    }

    /// Returns the number of problems currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no problem is held.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes all recorded problems, leaving the sink empty.
    ///
    /// Error counters are not reset.
    pub fn take_all(&self) -> Vec<CategorizedProblem> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a snapshot of all recorded problems without draining.
    pub fn problems(&self) -> Vec<CategorizedProblem> {
        self.lock().clone()
    }
}

impl ProblemSink for CollectingSink {
    fn record(&self, problem: CategorizedProblem, mandatory: bool) {
        if problem.is_error() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
            if mandatory {
                self.mandatory_error_count.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.lock().push(problem);
    }
}

impl<S: ProblemSink + ?Sized> ProblemSink for &S {
    fn record(&self, problem: CategorizedProblem, mandatory: bool) {
        (**self).record(problem, mandatory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::ids::ProblemId;
    use crate::severity::SeverityFlags;
    use javelin_source::Span;

    fn make(id: ProblemId, severity: SeverityFlags) -> CategorizedProblem {
        CategorizedProblem {
            id,
            severity,
            category: Category::Internal,
            span: Span::new(0, 3),
            line: 1,
            column: 1,
            file_name: "A.java".to_string(),
            reference: None,
            arguments: Vec::new(),
            message_arguments: Vec::new(),
        }
    }

    #[test]
    fn empty_sink() {
        let sink = CollectingSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn counts_errors_and_mandatory_errors() {
        let sink = CollectingSink::new();
        sink.record(make(ProblemId::UNDEFINED_TYPE, SeverityFlags::ERROR), true);
        sink.record(
            make(
                ProblemId::UNUSED_IMPORT,
                SeverityFlags::ERROR | SeverityFlags::OPTIONAL,
            ),
            false,
        );
        sink.record(make(ProblemId::DEAD_CODE, SeverityFlags::WARNING), false);
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.mandatory_error_count(), 1);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn take_all_drains_but_keeps_counts() {
        let sink = CollectingSink::new();
        sink.record(make(ProblemId::UNDEFINED_TYPE, SeverityFlags::ERROR), true);
        assert_eq!(sink.take_all().len(), 1);
        assert!(sink.is_empty());
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn records_through_reference() {
        let sink = CollectingSink::new();
        let by_ref = &sink;
        by_ref.record(make(ProblemId::DEAD_CODE, SeverityFlags::WARNING), false);
        assert_eq!(sink.problems()[0].id, ProblemId::DEAD_CODE);
    }

    #[test]
    fn thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(CollectingSink::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    sink.record(make(ProblemId::UNDEFINED_TYPE, SeverityFlags::ERROR), true);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.error_count(), 400);
        assert_eq!(sink.len(), 400);
    }
}
