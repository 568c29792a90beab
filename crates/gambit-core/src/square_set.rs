//! Immutable sets of squares backed by a 64-bit mask (bit i = square i).

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub,
    SubAssign,
};
use std::str::FromStr;

use crate::color::Color;
use crate::error::SquareError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A set of squares. Every operation returns a new value; nothing mutates in place
/// except the `*Assign` operator sugar, which rebinds the variable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct SquareSet(u64);

/// One item of a mixed square set description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetElement<'a> {
    Square(Square),
    Mask(u64),
    Set(SquareSet),
    Name(&'a str),
}

impl From<Square> for SetElement<'_> {
    fn from(sq: Square) -> Self {
        SetElement::Square(sq)
    }
}

impl From<u64> for SetElement<'_> {
    fn from(mask: u64) -> Self {
        SetElement::Mask(mask)
    }
}

impl From<SquareSet> for SetElement<'_> {
    fn from(set: SquareSet) -> Self {
        SetElement::Set(set)
    }
}

impl<'a> From<&'a str> for SetElement<'a> {
    fn from(name: &'a str) -> Self {
        SetElement::Name(name)
    }
}

impl SetElement<'_> {
    fn to_set(self) -> Result<SquareSet, SquareError> {
        match self {
            SetElement::Square(sq) => Ok(sq.set()),
            SetElement::Mask(mask) => Ok(SquareSet(mask)),
            SetElement::Set(set) => Ok(set),
            SetElement::Name(name) => Square::from_algebraic(name.trim())
                .map(Square::set)
                .map_err(|_| SquareError::InvalidElement { element: name.to_string() }),
        }
    }
}

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);
    pub const ALL: SquareSet = SquareSet(!0);

    pub const RANK_1: SquareSet = SquareSet(0x0000_0000_0000_00FF);
    pub const RANK_2: SquareSet = SquareSet(0x0000_0000_0000_FF00);
    pub const RANK_3: SquareSet = SquareSet(0x0000_0000_00FF_0000);
    pub const RANK_4: SquareSet = SquareSet(0x0000_0000_FF00_0000);
    pub const RANK_5: SquareSet = SquareSet(0x0000_00FF_0000_0000);
    pub const RANK_6: SquareSet = SquareSet(0x0000_FF00_0000_0000);
    pub const RANK_7: SquareSet = SquareSet(0x00FF_0000_0000_0000);
    pub const RANK_8: SquareSet = SquareSet(0xFF00_0000_0000_0000);

    /// Rank masks indexed by row.
    pub const RANKS: [SquareSet; 8] = [
        Self::RANK_1, Self::RANK_2, Self::RANK_3, Self::RANK_4,
        Self::RANK_5, Self::RANK_6, Self::RANK_7, Self::RANK_8,
    ];

    pub const FILE_A: SquareSet = SquareSet(0x0101_0101_0101_0101);
    pub const FILE_B: SquareSet = SquareSet(0x0202_0202_0202_0202);
    pub const FILE_C: SquareSet = SquareSet(0x0404_0404_0404_0404);
    pub const FILE_D: SquareSet = SquareSet(0x0808_0808_0808_0808);
    pub const FILE_E: SquareSet = SquareSet(0x1010_1010_1010_1010);
    pub const FILE_F: SquareSet = SquareSet(0x2020_2020_2020_2020);
    pub const FILE_G: SquareSet = SquareSet(0x4040_4040_4040_4040);
    pub const FILE_H: SquareSet = SquareSet(0x8080_8080_8080_8080);

    /// File masks indexed by column.
    pub const FILES: [SquareSet; 8] = [
        Self::FILE_A, Self::FILE_B, Self::FILE_C, Self::FILE_D,
        Self::FILE_E, Self::FILE_F, Self::FILE_G, Self::FILE_H,
    ];

    pub const LIGHT_SQUARES: SquareSet = SquareSet(0x55AA_55AA_55AA_55AA);
    pub const DARK_SQUARES: SquareSet = SquareSet(0xAA55_AA55_AA55_AA55);

    /// Create a set from a raw mask.
    #[inline]
    pub const fn new(mask: u64) -> SquareSet {
        SquareSet(mask)
    }

    /// Build a set from a mixed list of squares, masks, sets and square names.
    ///
    /// Fails on the first element that is not a square name; no partial set is returned.
    pub fn from_elements<'a, I>(elements: I) -> Result<SquareSet, SquareError>
    where
        I: IntoIterator,
        I::Item: Into<SetElement<'a>>,
    {
        elements
            .into_iter()
            .try_fold(SquareSet::EMPTY, |acc, element| {
                let element: SetElement<'a> = element.into();
                Ok(acc.union(element.to_set()?))
            })
    }

    /// Squares occupied by `kind` of `color` in the initial position.
    pub const fn starting(color: Color, kind: PieceKind) -> SquareSet {
        let files = match kind {
            PieceKind::Pawn => SquareSet::ALL,
            PieceKind::Knight => Self::FILE_B.union(Self::FILE_G),
            PieceKind::Bishop => Self::FILE_C.union(Self::FILE_F),
            PieceKind::Rook => Self::FILE_A.union(Self::FILE_H),
            PieceKind::Queen => Self::FILE_D,
            PieceKind::King => Self::FILE_E,
        };
        let row = match (kind, color) {
            (PieceKind::Pawn, Color::White) => 1,
            (PieceKind::Pawn, Color::Black) => 6,
            _ => color.back_row() as usize,
        };
        files.intersect(Self::RANKS[row])
    }

    /// Return the underlying mask.
    #[inline]
    pub const fn mask(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    #[inline]
    pub const fn intersect(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }

    /// Squares in `self` but not in `other`.
    #[inline]
    pub const fn difference(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & !other.0)
    }

    #[inline]
    pub const fn symmetric_difference(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 ^ other.0)
    }

    /// Complement over all 64 squares.
    #[inline]
    pub const fn inverse(self) -> SquareSet {
        SquareSet(!self.0)
    }

    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | sq.mask())
    }

    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        SquareSet(self.0 & !sq.mask())
    }

    #[inline]
    pub const fn is_subset_of(self, other: SquareSet) -> bool {
        self.0 & other.0 == self.0
    }

    #[inline]
    pub const fn is_proper_subset_of(self, other: SquareSet) -> bool {
        self.is_subset_of(other) && self.0 != other.0
    }

    #[inline]
    pub const fn is_superset_of(self, other: SquareSet) -> bool {
        other.is_subset_of(self)
    }

    #[inline]
    pub const fn is_proper_superset_of(self, other: SquareSet) -> bool {
        other.is_proper_subset_of(self)
    }

    /// `a.has_subset(b)` holds exactly when `b.is_subset_of(a)`.
    #[inline]
    pub const fn has_subset(self, other: SquareSet) -> bool {
        other.is_subset_of(self)
    }

    #[inline]
    pub const fn has_proper_subset(self, other: SquareSet) -> bool {
        other.is_proper_subset_of(self)
    }

    /// Return `true` if every square of `item` (a square or a set) is in `self`.
    #[inline]
    pub fn contains(self, item: impl Into<SquareSet>) -> bool {
        item.into().is_subset_of(self)
    }

    /// Return `true` if the two sets share at least one square.
    #[inline]
    pub const fn intersects(self, other: SquareSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Lowest-index square, or `None` if empty.
    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// Split off the lowest-index square, returning it with the remaining set.
    #[inline]
    pub const fn pop_first(self) -> Option<(Square, SquareSet)> {
        match self.first() {
            Some(sq) => Some((sq, SquareSet(self.0 & (self.0 - 1)))),
            None => None,
        }
    }

    /// Iterate the squares in ascending index order. Each call starts afresh.
    #[inline]
    pub const fn iter(self) -> Squares {
        Squares(self.0)
    }
}

impl From<Square> for SquareSet {
    #[inline]
    fn from(sq: Square) -> Self {
        sq.set()
    }
}

impl From<u64> for SquareSet {
    #[inline]
    fn from(mask: u64) -> Self {
        SquareSet(mask)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(SquareSet::EMPTY, SquareSet::with)
    }
}

/// Parses comma-separated square names, e.g. `"a1, h8"`. A blank string is the empty set.
impl FromStr for SquareSet {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(SquareSet::EMPTY);
        }
        SquareSet::from_elements(s.split(','))
    }
}

impl TryFrom<&str> for SquareSet {
    type Error = SquareError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// --- Operator sugar over the named methods ---

macro_rules! set_operator {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $named:ident) => {
        impl $op for SquareSet {
            type Output = SquareSet;
            #[inline]
            fn $op_fn(self, rhs: SquareSet) -> SquareSet {
                self.$named(rhs)
            }
        }

        impl $assign for SquareSet {
            #[inline]
            fn $assign_fn(&mut self, rhs: SquareSet) {
                *self = self.$named(rhs);
            }
        }
    };
}

set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union);
set_operator!(Add, add, AddAssign, add_assign, union);
set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, intersect);
set_operator!(Sub, sub, SubAssign, sub_assign, difference);
set_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, symmetric_difference);

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        self.inverse()
    }
}

/// Orders sets by inclusion: `a < b` is a proper subset, unrelated sets are incomparable.
impl PartialOrd for SquareSet {
    fn partial_cmp(&self, other: &SquareSet) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subset_of(*other) {
            Some(Ordering::Less)
        } else if self.is_superset_of(*other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

// --- Iteration ---

/// Ascending iterator over the squares of a [`SquareSet`].
#[derive(Debug, Clone)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let (sq, rest) = SquareSet(self.0).pop_first()?;
        self.0 = rest.0;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl DoubleEndedIterator for Squares {
    #[inline]
    fn next_back(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = 63 - self.0.leading_zeros() as u8;
        self.0 &= !(1u64 << index);
        Some(Square::from_index_unchecked(index))
    }
}

impl ExactSizeIterator for Squares {}
impl FusedIterator for Squares {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Squares {
        self.iter()
    }
}

impl IntoIterator for &SquareSet {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Squares {
        self.iter()
    }
}

// --- Formatting ---

/// Comma-separated square names in ascending index order.
impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

/// 8x8 grid, rank 8 at the top.
impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SquareSet({:#018x})", self.0)?;
        for row in (0..8u8).rev() {
            write!(f, "  {} ", row + 1)?;
            for col in 0..8u8 {
                let bit = 1u64 << (row * 8 + col);
                f.write_str(if self.0 & bit != 0 { "1 " } else { ". " })?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}
