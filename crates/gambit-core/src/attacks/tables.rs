//! Precomputed leaper attack tables and the between-squares table.

use crate::square_set::SquareSet;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const WHITE_PAWN_DELTAS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const BLACK_PAWN_DELTAS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// One table entry per square: the on-board targets of each (row, col) delta.
const fn leaper_table(deltas: &[(i8, i8)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let row = (sq / 8) as i8;
        let col = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            let r = row + deltas[d].0;
            let c = col + deltas[d].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                bits |= 1u64 << (r * 8 + c);
            }
            d += 1;
        }
        table[sq] = SquareSet::new(bits);
        sq += 1;
    }
    table
}

const fn step(from: i8, to: i8) -> i8 {
    if to > from {
        1
    } else if to < from {
        -1
    } else {
        0
    }
}

const fn compute_between() -> [[SquareSet; 64]; 64] {
    let mut table = [[SquareSet::EMPTY; 64]; 64];
    let mut a = 0usize;
    while a < 64 {
        let mut b = 0usize;
        while b < 64 {
            let (r1, c1) = ((a / 8) as i8, (a % 8) as i8);
            let (r2, c2) = ((b / 8) as i8, (b % 8) as i8);
            let dr = r2 - r1;
            let dc = c2 - c1;
            let aligned = a != b && (dr == 0 || dc == 0 || dr == dc || dr == -dc);
            if aligned {
                let (sr, sc) = (step(r1, r2), step(c1, c2));
                let mut bits = 0u64;
                let mut r = r1 + sr;
                let mut c = c1 + sc;
                while r != r2 || c != c2 {
                    bits |= 1u64 << (r * 8 + c);
                    r += sr;
                    c += sc;
                }
                table[a][b] = SquareSet::new(bits);
            }
            b += 1;
        }
        a += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [SquareSet; 64] = leaper_table(&KNIGHT_DELTAS);
pub(crate) static KING_ATTACKS: [SquareSet; 64] = leaper_table(&KING_DELTAS);
pub(crate) static PAWN_ATTACKS: [[SquareSet; 64]; 2] =
    [leaper_table(&WHITE_PAWN_DELTAS), leaper_table(&BLACK_PAWN_DELTAS)];
pub(crate) static BETWEEN: [[SquareSet; 64]; 64] = compute_between();
