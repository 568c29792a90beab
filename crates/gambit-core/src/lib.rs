//! Board geometry for chess: squares, square sets, and constant-time attack lookups.

pub mod attacks;
mod color;
mod error;
mod piece_kind;
mod square;
mod square_set;

pub use attacks::{
    Slider, between, bishop_attacks, init_attack_tables, king_attacks, knight_attacks,
    pawn_attacks, queen_attacks, rook_attacks,
};
pub use color::Color;
pub use error::{MagicError, SquareError};
pub use piece_kind::PieceKind;
pub use square::{PromotionSide, Square};
pub use square_set::{SetElement, SquareSet, Squares};
