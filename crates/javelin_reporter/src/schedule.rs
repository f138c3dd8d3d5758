//! Problems deferred until their context's annotations are resolved.

use crate::context::ReferenceContext;
use crate::request::ProblemRequest;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A deferred problem together with the context it was raised in.
#[derive(Debug)]
pub struct ScheduledProblem {
    /// The context active when the problem was raised.
    pub context: Rc<ReferenceContext>,
    /// The problem inputs, with the severity already resolved.
    pub request: ProblemRequest,
}

/// FIFO of deferred problems for one compilation unit.
#[derive(Debug, Default)]
pub struct ProblemQueue {
    items: RefCell<VecDeque<ScheduledProblem>>,
}

impl ProblemQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a problem.
    pub fn push(&self, item: ScheduledProblem) {
        self.items.borrow_mut().push_back(item);
    }

    /// Returns the number of pending problems.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Removes and returns everything pending, oldest first.
    ///
    /// Problems pushed while the batch is processed stay for the next batch.
    pub fn take_batch(&self) -> Vec<ScheduledProblem> {
        self.items.borrow_mut().drain(..).collect()
    }
}
