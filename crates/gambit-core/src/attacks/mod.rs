//! Attack generation: O(1) lookups for every piece type.

mod magic;
mod magic_data;
mod tables;

use std::fmt;

use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::magic::tables as sliding_tables;
use self::tables::{BETWEEN, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

pub use self::magic::{Magic, MagicTable, init_attack_tables};
pub use self::magic_data::{BISHOP_MAGICS, RawMagic, ROOK_MAGICS};

/// A piece whose reach is blocked by occupants along its rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    /// Unit (row, col) steps of this slider's rays.
    pub const fn directions(self) -> &'static [(i8, i8); 4] {
        match self {
            Slider::Bishop => &Self::BISHOP_DIRECTIONS,
            Slider::Rook => &Self::ROOK_DIRECTIONS,
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slider::Bishop => f.write_str("bishop"),
            Slider::Rook => f.write_str("rook"),
        }
    }
}

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> SquareSet {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> SquareSet {
    KING_ATTACKS[sq.index()]
}

/// Return the squares a pawn of `color` on `sq` attacks diagonally.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> SquareSet {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Return bishop attacks from `sq` given `occupied` squares.
///
/// Each diagonal runs up to and including its first occupant.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: SquareSet) -> SquareSet {
    sliding_tables().bishop.attacks(sq, occupied)
}

/// Return rook attacks from `sq` given `occupied` squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: SquareSet) -> SquareSet {
    sliding_tables().rook.attacks(sq, occupied)
}

/// Return queen attacks from `sq`: the union of bishop and rook attacks.
#[inline]
pub fn queen_attacks(sq: Square, occupied: SquareSet) -> SquareSet {
    bishop_attacks(sq, occupied).union(rook_attacks(sq, occupied))
}

/// The process-wide magic record of `slider` on `sq`.
pub fn magic(slider: Slider, sq: Square) -> Magic<'static> {
    let tables = sliding_tables();
    match slider {
        Slider::Bishop => tables.bishop.magic(sq),
        Slider::Rook => tables.rook.magic(sq),
    }
}

/// Return squares strictly between `a` and `b`.
///
/// Empty unless the two squares share a rank, file, or diagonal.
#[inline]
pub fn between(a: Square, b: Square) -> SquareSet {
    BETWEEN[a.index()][b.index()]
}

#[cfg(test)]
mod tests {
    use super::magic::slide;
    use super::*;

    // --- Leapers ---

    #[test]
    fn knight_corner_has_2_attacks() {
        for sq in [Square::A1, Square::H1, Square::A8, Square::H8] {
            assert_eq!(knight_attacks(sq).count(), 2, "{sq}");
        }
        assert_eq!(knight_attacks(Square::A1).to_string(), "c2,b3");
    }

    #[test]
    fn knight_center_has_8_attacks() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
        assert_eq!(knight_attacks(Square::B1).count(), 3);
    }

    #[test]
    fn king_attack_counts() {
        assert_eq!(king_attacks(Square::A1).count(), 3);
        assert_eq!(king_attacks(Square::E1).count(), 5);
        assert_eq!(king_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn pawn_attacks_do_not_wrap() {
        assert_eq!(pawn_attacks(Color::White, Square::A4), Square::B5.set());
        assert_eq!(pawn_attacks(Color::White, Square::H4), Square::G5.set());
        assert_eq!(pawn_attacks(Color::Black, Square::E5).to_string(), "d4,f4");
        assert!(pawn_attacks(Color::White, Square::E8).is_empty());
    }

    // --- Sliders ---

    #[test]
    fn rook_a1_empty_board_is_rank_and_file() {
        let expected = (SquareSet::RANK_1 | SquareSet::FILE_A).without(Square::A1);
        assert_eq!(rook_attacks(Square::A1, SquareSet::EMPTY), expected);
    }

    #[test]
    fn rook_empty_board_always_14() {
        for sq in Square::all() {
            assert_eq!(rook_attacks(sq, SquareSet::EMPTY).count(), 14, "{sq}");
        }
    }

    #[test]
    fn bishop_d4_empty_board_13() {
        assert_eq!(bishop_attacks(Square::D4, SquareSet::EMPTY).count(), 13);
    }

    #[test]
    fn blocker_is_included_and_beyond_is_not() {
        let occupied: SquareSet = "e6,c4,g6".parse().unwrap();
        let rook = rook_attacks(Square::E4, occupied);
        assert!(rook.contains(Square::E6));
        assert!(!rook.contains(Square::E7));
        assert!(rook.contains(Square::C4));
        assert!(!rook.contains(Square::B4));

        let bishop = bishop_attacks(Square::E4, occupied);
        assert!(bishop.contains(Square::G6));
        assert!(!bishop.contains(Square::H7));
    }

    #[test]
    fn attacks_never_include_origin() {
        for sq in Square::all() {
            assert!(!queen_attacks(sq, SquareSet::ALL).contains(sq));
            assert!(!queen_attacks(sq, SquareSet::EMPTY).contains(sq));
        }
    }

    #[test]
    fn fully_blocked_rook_sees_neighbours_only() {
        assert_eq!(rook_attacks(Square::D4, SquareSet::ALL).to_string(), "d3,c4,e4,d5");
    }

    #[test]
    fn queen_is_bishop_plus_rook() {
        let occupied: SquareSet = "b2,d6,f3,g7".parse().unwrap();
        for sq in Square::all() {
            assert_eq!(
                queen_attacks(sq, occupied),
                bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
            );
        }
    }

    #[test]
    fn public_magic_record_matches_lookup() {
        let occupied: SquareSet = "c3,f6".parse().unwrap();
        let record = magic(Slider::Bishop, Square::D4);
        assert_eq!(record.attacks(occupied), bishop_attacks(Square::D4, occupied));
        assert_eq!(record.shift(), 9);
    }

    #[test]
    fn magic_records_index_inside_their_tables() {
        for slider in [Slider::Bishop, Slider::Rook] {
            for sq in Square::all() {
                let record = magic(slider, sq);
                assert_eq!(record.attack_table().len(), 1 << record.shift());
                for occupied in [SquareSet::EMPTY, SquareSet::ALL, SquareSet::DARK_SQUARES] {
                    assert!(record.index(occupied) < record.attack_table().len(), "{slider} on {sq}");
                }
            }
        }
    }

    // --- Cross-validation: magic lookup vs. ray walking ---

    fn cross_validate(slider: Slider, seed: u64) {
        let mut rng = seed;
        for sq in Square::all() {
            for _ in 0..128 {
                rng = rng
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let occupied = SquareSet::new(rng);
                let looked_up = match slider {
                    Slider::Bishop => bishop_attacks(sq, occupied),
                    Slider::Rook => rook_attacks(sq, occupied),
                };
                let walked = SquareSet::new(slide(sq.index(), rng, slider));
                assert_eq!(looked_up, walked, "{slider} on {sq} with occupancy {rng:016x}");
            }
        }
    }

    #[test]
    fn rook_magic_vs_ray_walk() {
        cross_validate(Slider::Rook, 0xDEAD_BEEF_1234_5678);
    }

    #[test]
    fn bishop_magic_vs_ray_walk() {
        cross_validate(Slider::Bishop, 0xCAFE_BABE_8765_4321);
    }

    // --- Between ---

    #[test]
    fn between_aligned_squares() {
        assert_eq!(between(Square::E1, Square::E4).to_string(), "e2,e3");
        assert_eq!(between(Square::A1, Square::H8).count(), 6);
        assert_eq!(between(Square::H1, Square::A8).count(), 6);
        assert!(between(Square::E4, Square::E5).is_empty());
    }

    #[test]
    fn between_unaligned_is_empty() {
        assert!(between(Square::A1, Square::B3).is_empty());
        assert!(between(Square::C3, Square::C3).is_empty());
    }
}
