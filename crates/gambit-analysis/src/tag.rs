//! The traits shared by the move and position vocabularies.

use std::fmt;
use std::hash::Hash;

use crate::group::AnalysisGroup;
use crate::registry::Registry;

/// How an analysis bears on legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Legality {
    /// A property that legal moves or positions may have.
    Legal,
    /// Obeys movement and blocking rules, yet is illegal because of king safety.
    PseudoLegal,
    /// Breaks the movement, blocking, turn, or setup rules outright.
    Illegal,
}

impl Legality {
    #[inline]
    pub const fn is_legal(self) -> bool {
        matches!(self, Legality::Legal)
    }

    #[inline]
    pub const fn is_pseudo_legal(self) -> bool {
        !matches!(self, Legality::Illegal)
    }
}

/// One analysis in a fixed vocabulary.
///
/// Implementors are fieldless enums; `ALL` lists every variant in declaration order
/// and `id` must equal the variant's position in that list.
pub trait Tag: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The named groups of this vocabulary.
    type Group: GroupTag<Tag = Self>;

    /// Every tag, in id order.
    const ALL: &'static [Self];

    /// Short label of the vocabulary, used in logs.
    const DOMAIN: &'static str;

    fn id(self) -> u8;
    fn name(self) -> &'static str;
    fn description(self) -> &'static str;
    fn legality(self) -> Legality;

    /// `false` for detectors that need move generation rather than a static look.
    fn is_quick(self) -> bool {
        true
    }

    /// The process-wide registry of this vocabulary.
    fn registry() -> &'static Registry<Self>;

    #[inline]
    fn mask(self) -> u64 {
        1u64 << self.id()
    }
}

/// A named group in a fixed vocabulary.
pub trait GroupTag: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    type Tag: Tag;

    /// Every group, in registration order.
    const ALL: &'static [Self];

    /// Position of this group in `ALL`.
    fn index(self) -> usize;
    fn name(self) -> &'static str;
    fn description(self) -> &'static str;
    fn members(self) -> Vec<Self::Tag>;

    /// The registered group.
    fn group(self) -> &'static AnalysisGroup<Self::Tag> {
        &Self::Tag::registry().groups()[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::Legality;

    #[test]
    fn legality_views() {
        assert!(Legality::Legal.is_legal());
        assert!(Legality::Legal.is_pseudo_legal());
        assert!(!Legality::PseudoLegal.is_legal());
        assert!(Legality::PseudoLegal.is_pseudo_legal());
        assert!(!Legality::Illegal.is_legal());
        assert!(!Legality::Illegal.is_pseudo_legal());
    }
}
