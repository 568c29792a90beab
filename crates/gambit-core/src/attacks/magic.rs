//! Magic bitboard tables for bishop and rook attacks.

use std::sync::OnceLock;

use tracing::{debug, error};

use crate::error::MagicError;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::Slider;
use super::magic_data::{BISHOP_MAGICS, RawMagic, ROOK_MAGICS};

/// Largest accepted index width: a rook in a corner has 12 relevant squares.
const MAX_SHIFT: u8 = 12;

// ---------------------------------------------------------------------------
// Ray walking (table population, mask derivation, cross-validation)
// ---------------------------------------------------------------------------

/// Squares attacked by `slider` on square index `sq`, walking each ray up to and
/// including its first occupied square.
pub(crate) const fn slide(sq: usize, occupied: u64, slider: Slider) -> u64 {
    let directions = slider.directions();
    let row = (sq / 8) as i8;
    let col = (sq % 8) as i8;
    let mut attacks = 0u64;
    let mut d = 0;
    while d < directions.len() {
        let (dr, dc) = directions[d];
        let mut r = row + dr;
        let mut c = col + dc;
        while r >= 0 && r < 8 && c >= 0 && c < 8 {
            let bit = 1u64 << (r * 8 + c);
            attacks |= bit;
            if occupied & bit != 0 {
                break;
            }
            r += dr;
            c += dc;
        }
        d += 1;
    }
    attacks
}

/// Squares whose occupancy can change the attacks of `slider` on `sq`: every ray
/// square except the last one before the board edge.
pub(crate) const fn relevant_occupancy(sq: usize, slider: Slider) -> u64 {
    let directions = slider.directions();
    let row = (sq / 8) as i8;
    let col = (sq % 8) as i8;
    let mut mask = 0u64;
    let mut d = 0;
    while d < directions.len() {
        let (dr, dc) = directions[d];
        let mut r = row + dr;
        let mut c = col + dc;
        while r + dr >= 0 && r + dr < 8 && c + dc >= 0 && c + dc < 8 {
            mask |= 1u64 << (r * 8 + c);
            r += dr;
            c += dc;
        }
        d += 1;
    }
    mask
}

// ---------------------------------------------------------------------------
// Magic records and tables
// ---------------------------------------------------------------------------

/// The magic record of one slider on one square.
///
/// Records are handed out by [`MagicTable::magic`], which guarantees the table holds
/// `2^shift` entries for the validated shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magic<'a> {
    relevant_occupancy_mask: SquareSet,
    multiplier: u64,
    shift: u8,
    attack_table: &'a [SquareSet],
}

impl<'a> Magic<'a> {
    #[inline]
    pub fn relevant_occupancy_mask(&self) -> SquareSet {
        self.relevant_occupancy_mask
    }

    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Number of index bits.
    #[inline]
    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// Attack sets indexed by the hashed occupancy, `2^shift` entries.
    #[inline]
    pub fn attack_table(&self) -> &'a [SquareSet] {
        self.attack_table
    }

    /// Hash `occupied` into an index of [`attack_table`](Self::attack_table).
    #[inline(always)]
    pub fn index(&self, occupied: SquareSet) -> usize {
        hash(occupied.mask(), self.relevant_occupancy_mask.mask(), self.multiplier, self.shift)
    }

    /// Attacks for the given board occupancy.
    #[inline]
    pub fn attacks(&self, occupied: SquareSet) -> SquareSet {
        self.attack_table[self.index(occupied)]
    }
}

#[inline(always)]
const fn hash(occupied: u64, mask: u64, multiplier: u64, shift: u8) -> usize {
    ((occupied & mask).wrapping_mul(multiplier) >> (64 - shift)) as usize
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    raw: RawMagic,
    offset: usize,
}

/// All 64 magic records of one slider, sharing one flat attack table.
#[derive(Debug, Clone)]
pub struct MagicTable {
    slider: Slider,
    entries: [Entry; 64],
    attacks: Vec<SquareSet>,
}

impl MagicTable {
    /// Build and validate a table from raw constants.
    ///
    /// Each mask must equal the slider's relevant occupancy on its square, or the build
    /// fails with [`MagicError::MaskMismatch`]. Every subset of each mask is hashed; two
    /// subsets with different attack sets landing on the same slot fail with
    /// [`MagicError::CorruptMagicTable`].
    pub fn build(slider: Slider, raw: &[RawMagic; 64]) -> Result<MagicTable, MagicError> {
        let mut entries = [Entry { raw: raw[0], offset: 0 }; 64];
        let mut offset = 0usize;
        for (sq, (entry, magic)) in entries.iter_mut().zip(raw).enumerate() {
            let square = Square::from_index_unchecked(sq as u8);
            let expected = relevant_occupancy(sq, slider);
            if magic.mask != expected {
                error!(%slider, %square, mask = magic.mask, expected, "magic mask mismatch");
                return Err(MagicError::MaskMismatch {
                    slider,
                    square,
                    mask: SquareSet::new(magic.mask),
                    expected: SquareSet::new(expected),
                });
            }
            if magic.shift == 0 || magic.shift > MAX_SHIFT {
                return Err(MagicError::InvalidShift { slider, square, shift: magic.shift });
            }
            *entry = Entry { raw: *magic, offset };
            offset += 1usize << magic.shift;
        }

        let mut attacks = vec![SquareSet::EMPTY; offset];
        let mut filled = vec![false; offset];
        for (sq, entry) in entries.iter().enumerate() {
            let RawMagic { multiplier, mask, shift } = entry.raw;
            // Carry-rippler: visit every subset of `mask`, starting from the empty set.
            let mut subset = 0u64;
            loop {
                let reach = SquareSet::new(slide(sq, subset, slider));
                let index = hash(subset, mask, multiplier, shift);
                let slot = entry.offset + index;
                if filled[slot] && attacks[slot] != reach {
                    let square = Square::from_index_unchecked(sq as u8);
                    error!(%slider, %square, index, "destructive magic collision");
                    return Err(MagicError::CorruptMagicTable { slider, square, index });
                }
                attacks[slot] = reach;
                filled[slot] = true;
                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }
        }

        Ok(MagicTable { slider, entries, attacks })
    }

    pub fn slider(&self) -> Slider {
        self.slider
    }

    /// Total number of attack table slots across all squares.
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }

    /// The magic record for `sq`.
    pub fn magic(&self, sq: Square) -> Magic<'_> {
        let Entry { raw, offset } = self.entries[sq.index()];
        Magic {
            relevant_occupancy_mask: SquareSet::new(raw.mask),
            multiplier: raw.multiplier,
            shift: raw.shift,
            attack_table: &self.attacks[offset..offset + (1usize << raw.shift)],
        }
    }

    /// Attacks from `sq` for the given occupancy.
    #[inline]
    pub fn attacks(&self, sq: Square, occupied: SquareSet) -> SquareSet {
        let Entry { raw, offset } = &self.entries[sq.index()];
        self.attacks[offset + hash(occupied.mask(), raw.mask, raw.multiplier, raw.shift)]
    }
}

// ---------------------------------------------------------------------------
// Process-wide tables
// ---------------------------------------------------------------------------

pub(crate) struct SlidingTables {
    pub(crate) bishop: MagicTable,
    pub(crate) rook: MagicTable,
}

static SLIDING_TABLES: OnceLock<SlidingTables> = OnceLock::new();

fn load() -> Result<SlidingTables, MagicError> {
    let bishop = MagicTable::build(Slider::Bishop, &BISHOP_MAGICS)?;
    let rook = MagicTable::build(Slider::Rook, &ROOK_MAGICS)?;
    debug!(bishop_slots = bishop.len(), rook_slots = rook.len(), "sliding attack tables built");
    Ok(SlidingTables { bishop, rook })
}

/// Build and validate the compiled-in sliding tables. Idempotent and safe to call
/// from several threads; later calls return immediately.
pub fn init_attack_tables() -> Result<(), MagicError> {
    if SLIDING_TABLES.get().is_none() {
        // A concurrent caller may win the race; both built identical tables.
        let _ = SLIDING_TABLES.set(load()?);
    }
    Ok(())
}

pub(crate) fn tables() -> &'static SlidingTables {
    SLIDING_TABLES.get_or_init(|| load().expect("compiled-in magic constants failed validation"))
}
