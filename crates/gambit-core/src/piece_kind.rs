//! Piece kinds and their fixed material worth.

use std::fmt;

use crate::color::Color;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Conventional material worth in pawns. The king is given a nominal 10.
    pub const fn worth(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 10,
        }
    }

    /// Letter for this piece when owned by `color`: uppercase for White, lowercase for Black.
    pub const fn letter(self, color: Color) -> char {
        let lower = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        }
    }

    /// Parse a piece letter, returning the kind and the owning color implied by its case.
    pub fn from_letter(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// Return `true` for bishops, rooks, and queens.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;
    use crate::color::Color;

    #[test]
    fn worth_values() {
        let worths: Vec<u8> = PieceKind::ALL.iter().map(|k| k.worth()).collect();
        assert_eq!(worths, vec![1, 3, 3, 5, 9, 10]);
    }

    #[test]
    fn letters_follow_color_case() {
        assert_eq!(PieceKind::Knight.letter(Color::White), 'N');
        assert_eq!(PieceKind::Knight.letter(Color::Black), 'n');
        assert_eq!(PieceKind::Queen.letter(Color::White), 'Q');
    }

    #[test]
    fn from_letter_roundtrip() {
        for kind in PieceKind::ALL {
            for color in Color::ALL {
                assert_eq!(PieceKind::from_letter(kind.letter(color)), Some((kind, color)));
            }
        }
        assert_eq!(PieceKind::from_letter('x'), None);
    }

    #[test]
    fn sliders() {
        let sliders: Vec<_> = PieceKind::ALL.into_iter().filter(|k| k.is_slider()).collect();
        assert_eq!(sliders, vec![PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]);
    }

    #[test]
    fn display_is_name() {
        assert_eq!(format!("{}", PieceKind::Bishop), "bishop");
    }
}
