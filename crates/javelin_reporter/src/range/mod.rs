//! Source ranges for problems whose nodes lack exact sub-offsets.
//!
//! Range recovery is cosmetic: every scan failure degrades to the best
//! offset already known and is logged at debug level.

mod resolver;
mod scanner;

pub use resolver::RangeResolver;
