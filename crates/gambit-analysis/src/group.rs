//! Named unions of analyses.

use std::borrow::Cow;

use crate::error::AnalysisError;
use crate::mask::AnalysisMask;
use crate::tag::Tag;

/// A named, non-empty, ordered set of analyses with the union of their masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisGroup<T: Tag> {
    name: Cow<'static, str>,
    description: Cow<'static, str>,
    members: Vec<T>,
    mask: u64,
}

impl<T: Tag> AnalysisGroup<T> {
    /// Build a group. Repeated members are kept once, at their first position.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        members: impl IntoIterator<Item = T>,
    ) -> Result<AnalysisGroup<T>, AnalysisError> {
        let name = name.into();
        let mut kept = Vec::new();
        let mut mask = 0u64;
        for tag in members {
            if mask & tag.mask() == 0 {
                mask |= tag.mask();
                kept.push(tag);
            }
        }
        if kept.is_empty() {
            return Err(AnalysisError::EmptyGroup { group: name.into_owned() });
        }
        Ok(AnalysisGroup { name, description: description.into(), members: kept, mask })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Bitwise union of the member masks.
    #[inline]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Return `true` if `tag` is a member.
    #[inline]
    pub fn contains(&self, tag: T) -> bool {
        tag.mask() & self.mask != 0
    }

    /// Return `true` if any tag applied in `applied` belongs to this group.
    #[inline]
    pub fn matches(&self, applied: AnalysisMask<T>) -> bool {
        applied.bits() & self.mask != 0
    }
}
