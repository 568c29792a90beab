//! The set of analyses applied to one move or one position.

use std::fmt;
use std::marker::PhantomData;

use crate::group::AnalysisGroup;
use crate::tag::Tag;

/// Applied-analysis bits of a single move or position.
///
/// Typed by vocabulary so that move and position masks cannot be mixed.
pub struct AnalysisMask<T: Tag> {
    bits: u64,
    _tag: PhantomData<T>,
}

impl<T: Tag> AnalysisMask<T> {
    pub const EMPTY: AnalysisMask<T> = AnalysisMask { bits: 0, _tag: PhantomData };

    /// Build a mask from raw bits; bits above the vocabulary size are dropped.
    pub fn from_bits(bits: u64) -> Self {
        let known = match T::ALL.len() {
            64 => u64::MAX,
            n => (1u64 << n) - 1,
        };
        AnalysisMask { bits: bits & known, _tag: PhantomData }
    }

    pub fn from_tags(tags: impl IntoIterator<Item = T>) -> Self {
        tags.into_iter().collect()
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn insert(&mut self, tag: T) {
        self.bits |= tag.mask();
    }

    #[inline]
    pub fn with(mut self, tag: T) -> Self {
        self.insert(tag);
        self
    }

    /// Return `true` if `tag` has been applied.
    #[inline]
    pub fn contains(self, tag: T) -> bool {
        self.bits & tag.mask() != 0
    }

    /// Return `true` if any applied tag belongs to `group`.
    #[inline]
    pub fn intersects(self, group: &AnalysisGroup<T>) -> bool {
        self.bits & group.mask() != 0
    }

    /// No applied tag marks the subject illegal.
    pub fn is_legal(self) -> bool {
        self.bits & T::registry().illegal_mask() == 0
    }

    /// No applied tag breaks movement, blocking, turn, or setup rules.
    pub fn is_pseudo_legal(self) -> bool {
        self.bits & T::registry().not_pseudo_legal_mask() == 0
    }

    /// Applied tags in id order.
    pub fn iter(self) -> impl Iterator<Item = T> {
        T::ALL.iter().copied().filter(move |tag| self.contains(*tag))
    }
}

impl<T: Tag> Clone for AnalysisMask<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Tag> Copy for AnalysisMask<T> {}

impl<T: Tag> PartialEq for AnalysisMask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Tag> Eq for AnalysisMask<T> {}

impl<T: Tag> Default for AnalysisMask<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Tag> FromIterator<T> for AnalysisMask<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl<T: Tag> Extend<T> for AnalysisMask<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<T: Tag> fmt::Debug for AnalysisMask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(T::name)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisMask;
    use crate::moves::{MoveGroup, MoveTag};
    use crate::position::PositionTag;
    use crate::tag::{GroupTag, Tag};

    #[test]
    fn insert_and_contains() {
        let mut applied = AnalysisMask::<MoveTag>::EMPTY;
        assert!(applied.is_empty());
        applied.insert(MoveTag::PawnMove);
        applied.insert(MoveTag::Promotion);
        assert!(applied.contains(MoveTag::Promotion));
        assert!(!applied.contains(MoveTag::EnPassant));
        assert_eq!(applied.iter().collect::<Vec<_>>(), vec![MoveTag::PawnMove, MoveTag::Promotion]);
    }

    #[test]
    fn group_intersection() {
        let applied = AnalysisMask::from_tags([MoveTag::PawnMove, MoveTag::QueenCapture]);
        assert!(applied.intersects(MoveGroup::Capture.group()));
        assert!(applied.intersects(MoveGroup::PawnMove.group()));
        assert!(!applied.intersects(MoveGroup::Castle.group()));
    }

    #[test]
    fn legal_pseudo_legal_and_illegal_moves() {
        let quiet = AnalysisMask::from_tags([MoveTag::KnightMove]);
        assert!(quiet.is_legal());
        assert!(quiet.is_pseudo_legal());

        let exposes_king = quiet.with(MoveTag::IllegalMoveLeavesKingInCheck);
        assert!(!exposes_king.is_legal());
        assert!(exposes_king.is_pseudo_legal());

        let jumps = AnalysisMask::from_tags([MoveTag::RookMove, MoveTag::IllegalMoveBlocked]);
        assert!(!jumps.is_legal());
        assert!(!jumps.is_pseudo_legal());
    }

    #[test]
    fn illegal_positions() {
        let mate = AnalysisMask::from_tags([PositionTag::Check, PositionTag::Checkmate]);
        assert!(mate.is_legal());
        let broken = mate.with(PositionTag::KingsTouching);
        assert!(!broken.is_legal());
    }

    #[test]
    fn from_bits_drops_unknown_bits() {
        let mask = AnalysisMask::<PositionTag>::from_bits(u64::MAX);
        assert_eq!(mask.bits().count_ones() as usize, PositionTag::ALL.len());
    }

    #[test]
    fn debug_lists_names() {
        let applied = AnalysisMask::from_tags([MoveTag::CastleShort, MoveTag::KingMove]);
        assert_eq!(format!("{applied:?}"), "{\"KingMove\", \"CastleShort\"}");
    }
}
