//! Problem identifiers, irritants, severities, and categories for Java diagnostics.
//!
//! Every diagnostic the compiler front end can raise is named by a
//! [`ProblemId`]. Its high bits place it in a family (syntax, import, type,
//! member, module, compliance, preview) and the [`IRRITANT_TABLE`] maps it to
//! the user-configurable [`Irritant`] that governs it, if any. Classified
//! problems travel to a [`ProblemSink`] as [`CategorizedProblem`] values.

#![warn(missing_docs)]

pub mod category;
pub mod ids;
pub mod irritant;
pub mod problem;
pub mod severity;
pub mod sink;
pub mod warning_token;

pub use category::Category;
pub use ids::{ProblemFamily, ProblemId, KNOWN_PROBLEMS};
pub use irritant::{irritant_of, Irritant, IrritantSet, IRRITANT_TABLE};
pub use problem::CategorizedProblem;
pub use severity::{Level, SeverityFlags};
pub use sink::{CollectingSink, ProblemSink};
pub use warning_token::{irritants_for_token, token_for_irritant, WARNING_TOKENS};
