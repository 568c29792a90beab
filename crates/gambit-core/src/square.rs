//! Board squares, indexed 0..63 with a1 = 0, h1 = 7, a8 = 56, h8 = 63.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::SquareError;
use crate::square_set::SquareSet;

const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

/// A square on the chess board.
///
/// Index = row * 8 + column, where row 0 is rank 1 and column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Square(u8);

/// Which side's last row counts as a promotion square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionSide {
    White,
    Black,
    Either,
}

impl From<Color> for PromotionSide {
    fn from(color: Color) -> Self {
        match color {
            Color::White => PromotionSide::White,
            Color::Black => PromotionSide::Black,
        }
    }
}

impl FromStr for PromotionSide {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(PromotionSide::White),
            "black" => Ok(PromotionSide::Black),
            "both" | "either" => Ok(PromotionSide::Either),
            _ => Err(SquareError::InvalidArgument { argument: s.to_string() }),
        }
    }
}

macro_rules! named_squares {
    ($($name:ident = $index:literal),* $(,)?) => {
        $(pub const $name: Square = Square($index);)*
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Result<Square, SquareError> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(SquareError::OutOfRange { what: "index", value: index })
        }
    }

    /// Create a square from an index known to be in range.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Create a square from a zero-based (row, column) pair.
    pub const fn from_row_col(row: u8, col: u8) -> Result<Square, SquareError> {
        if row > 7 {
            return Err(SquareError::OutOfRange { what: "row", value: row });
        }
        if col > 7 {
            return Err(SquareError::OutOfRange { what: "column", value: col });
        }
        Ok(Square(row * 8 + col))
    }

    /// Parse a square name such as "e4". Letters are case-insensitive.
    pub fn from_algebraic(s: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidNotation { notation: s.to_string() };
        let [file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(invalid());
        }
        Ok(Square((rank - b'1') * 8 + (file - b'a')))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based row; row 0 is rank 1.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Zero-based column; column 0 is the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// One-based rank number.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.row() + 1
    }

    /// File letter, 'a' through 'h'.
    #[inline]
    pub const fn file(self) -> char {
        FILE_LETTERS[self.col() as usize] as char
    }

    /// Algebraic name, e.g. "e4".
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Shade of the square. a1 is dark, h1 is light.
    #[inline]
    pub const fn color(self) -> Color {
        if (self.row() + self.col()) % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn is_light(self) -> bool {
        matches!(self.color(), Color::White)
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        !self.is_light()
    }

    /// Return `true` if a pawn of `side` promotes on this square.
    pub const fn is_promotion(self, side: PromotionSide) -> bool {
        match side {
            PromotionSide::White => self.row() == 7,
            PromotionSide::Black => self.row() == 0,
            PromotionSide::Either => self.row() == 0 || self.row() == 7,
        }
    }

    /// Single-bit mask of this square.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// A square set holding only this square.
    #[inline]
    pub const fn set(self) -> SquareSet {
        SquareSet::new(self.mask())
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    named_squares! {
        A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
        A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
        A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
        A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
        A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
        A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
        A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
        A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::from_index(index)
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl TryFrom<&str> for Square {
    type Error = SquareError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Square::from_algebraic(s)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl TryFrom<SquareSet> for Square {
    type Error = SquareError;

    fn try_from(set: SquareSet) -> Result<Self, Self::Error> {
        match (set.count(), set.first()) {
            (1, Some(sq)) => Ok(sq),
            (count, _) => Err(SquareError::NotSingleSquare { count }),
        }
    }
}

impl PartialEq<u8> for Square {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for Square {
    fn eq(&self, other: &str) -> bool {
        Square::from_algebraic(other).is_ok_and(|sq| sq == *self)
    }
}

impl PartialEq<&str> for Square {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
