//! The compilation unit problems are reported against.

use crate::schedule::ProblemQueue;
use javelin_source::SourceFile;

/// One source file under analysis.
///
/// Owns the deferred-problem queue when the pipeline drains one for this
/// unit. Shared through `Rc` between the active context and queued items.
#[derive(Debug)]
pub struct CompilationUnit {
    source: SourceFile,
    ignore_optional_problems: bool,
    queue: Option<ProblemQueue>,
}

impl CompilationUnit {
    /// Creates a unit without a queue.
    pub fn new(source: SourceFile) -> Self {
        Self {
            source,
            ignore_optional_problems: false,
            queue: None,
        }
    }

    /// Attaches an empty deferred-problem queue.
    pub fn with_queue(mut self) -> Self {
        self.queue = Some(ProblemQueue::new());
        self
    }

    /// Drops optional problems raised in this unit, e.g. for generated sources.
    pub fn ignoring_optional_problems(mut self, ignore: bool) -> Self {
        self.ignore_optional_problems = ignore;
        self
    }

    /// Returns the source buffer.
    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// Returns the path as reported on problems.
    pub fn file_name(&self) -> String {
        self.source.path.display().to_string()
    }

    /// Returns `true` if optional problems are dropped for this unit.
    pub fn ignore_optional_problems(&self) -> bool {
        self.ignore_optional_problems
    }

    /// Returns the deferred-problem queue, if one is attached.
    pub fn queue(&self) -> Option<&ProblemQueue> {
        self.queue.as_ref()
    }
}
