//! Vocabulary for classifying chess moves and positions.
//!
//! Every analysis is a bit in a per-vocabulary mask. Groups are unions of those
//! bits, so asking whether a move or position exhibits any property of a group is
//! a single intersection.

#[macro_use]
mod macros;

mod error;
mod group;
mod mask;
mod moves;
mod position;
mod registry;
mod tag;

pub use error::AnalysisError;
pub use group::AnalysisGroup;
pub use mask::AnalysisMask;
pub use moves::{MoveAnalysis, MoveAnalysisGroup, MoveAnalysisMask, MoveGroup, MoveTag};
pub use position::{
    PositionAnalysis, PositionAnalysisGroup, PositionAnalysisMask, PositionGroup, PositionTag,
};
pub use registry::{Analysis, Registry};
pub use tag::{GroupTag, Legality, Tag};
