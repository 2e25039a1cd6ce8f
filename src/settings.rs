//! Settings defining what to do

use clap::ValueEnum;

/// Set of optimisations to enable
///
/// No-op elimination is not listed here, it always runs as part of
/// tokenizing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OptimisationPass {
    /// Drop loops at the very start of the program. They can never run,
    /// and are conventionally used for comment headers.
    StripCommentHeader,
}

/// Get standard optimisations
pub fn get_default_optimisations() -> Vec<OptimisationPass> {
    vec![OptimisationPass::StripCommentHeader]
}

/// What `,` does when the input is exhausted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum EofBehaviour {
    /// Store 0 in the current cell
    #[default]
    Zero,
    /// Leave the current cell unchanged
    Unchanged,
    /// Stop the program
    Halt,
}
