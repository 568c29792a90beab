//! Errors raised while assembling analysis groups and registries.

/// Errors from building an [`AnalysisGroup`](crate::AnalysisGroup) or a
/// [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// A group was given no members.
    #[error("analysis group {group} has no members")]
    EmptyGroup {
        /// Name of the empty group.
        group: String,
    },
    /// Two analyses, or two groups, share a name.
    #[error("duplicate analysis name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// Analyses are not numbered 0, 1, 2, ... in declaration order.
    #[error("expected analysis id {expected}, found {found}")]
    NonContiguousId {
        /// The id the position in the declaration list requires.
        expected: usize,
        /// The id the analysis reports.
        found: u8,
    },
    /// More analyses than fit in a 64-bit mask.
    #[error("{count} analyses do not fit in a 64-bit mask")]
    TooManyAnalyses {
        /// Number of declared analyses.
        count: usize,
    },
}
