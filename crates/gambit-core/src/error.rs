//! Error types for square construction and magic table validation.

use crate::attacks::Slider;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Errors raised while building a [`Square`] or [`SquareSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// An index, row, or column lies outside the board.
    #[error("{what} {value} is out of range")]
    OutOfRange {
        /// Which coordinate was rejected ("index", "row" or "column").
        what: &'static str,
        /// The rejected value.
        value: u8,
    },
    /// A string is not a square name of the form `[a-h][1-8]`.
    #[error("invalid square notation: \"{notation}\"")]
    InvalidNotation {
        /// The rejected string.
        notation: String,
    },
    /// An element of a square set description cannot be read as a square or mask.
    #[error("invalid square set element: \"{element}\"")]
    InvalidElement {
        /// The rejected element, as written.
        element: String,
    },
    /// A promotion side is not one of "white", "black" or "both".
    #[error("invalid argument: \"{argument}\"")]
    InvalidArgument {
        /// The rejected argument.
        argument: String,
    },
    /// A square set converted to a single square does not hold exactly one square.
    #[error("expected exactly 1 square, found {count}")]
    NotSingleSquare {
        /// Number of squares in the set.
        count: u32,
    },
}

/// Errors from load-time validation of magic bitboard constants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MagicError {
    /// Two occupancies with different attack sets hash to the same slot.
    #[error("corrupt {slider} magic table on {square}: destructive collision at index {index}")]
    CorruptMagicTable {
        /// Which slider's table is corrupt.
        slider: Slider,
        /// The square whose constants collide.
        square: Square,
        /// The colliding slot within that square's attack table.
        index: usize,
    },
    /// A square's relevant occupancy mask differs from the one its slider's rays imply.
    #[error("{slider} magic mask on {square} is {mask}, expected {expected}")]
    MaskMismatch {
        /// Which slider's table holds the bad mask.
        slider: Slider,
        /// The square with the bad mask.
        square: Square,
        /// The supplied mask.
        mask: SquareSet,
        /// The mask derived from the slider's rays.
        expected: SquareSet,
    },
    /// A square's index width is zero or wider than any real table needs.
    #[error("invalid {slider} magic shift on {square}: {shift}")]
    InvalidShift {
        /// Which slider's table holds the bad shift.
        slider: Slider,
        /// The square with the bad shift.
        square: Square,
        /// The rejected shift.
        shift: u8,
    },
}
