//! Classification and reporting of Java compiler problems.
//!
//! Given a [`ProblemId`](javelin_problem::ProblemId), this crate decides the
//! effective severity ([`compute_severity`]), the display category
//! ([`problem_category`]), and a precise source range ([`RangeResolver`]),
//! then hands the result to a [`ProblemSink`](javelin_problem::ProblemSink)
//! through the [`ProblemHandler`]. The [`ProblemReporter`] façade ties these
//! together with the reference-context slot and the deferred-problem queue.
//!
//! A reporter is single-threaded: it owns a lazily created scanner and the
//! context slot, so one instance serves one compilation unit at a time.

#![warn(missing_docs)]

pub mod ast;
pub mod category;
pub mod context;
pub mod handler;
pub mod range;
pub mod reporter;
pub mod request;
pub mod schedule;
pub mod severity;
pub mod unit;

pub use ast::{BindingId, Node, QualifiedName};
pub use category::{irritant_category, problem_category, CATEGORY_EXCEPTIONS};
pub use context::{ActiveContext, ContextSlot, ReferenceContext};
pub use handler::{ErrorHandlingPolicy, HandleOutcome, ProblemHandler};
pub use range::RangeResolver;
pub use reporter::{ContextScope, ProblemReporter};
pub use request::ProblemRequest;
pub use schedule::{ProblemQueue, ScheduledProblem};
pub use severity::{compute_severity, TransientFlags, LITERAL_OVERRIDES};
pub use unit::CompilationUnit;
