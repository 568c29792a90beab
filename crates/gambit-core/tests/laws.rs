//! Property tests for square set algebra and sliding attack geometry.

use gambit_core::{
    Square, SquareSet, between, bishop_attacks, init_attack_tables, queen_attacks, rook_attacks,
};
use proptest::prelude::*;

fn set_strategy() -> impl Strategy<Value = SquareSet> {
    any::<u64>().prop_map(SquareSet::new)
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|i| Square::from_index(i).unwrap())
}

fn rook_aligned(a: Square, b: Square) -> bool {
    a != b && (a.row() == b.row() || a.col() == b.col())
}

fn bishop_aligned(a: Square, b: Square) -> bool {
    a != b && a.row().abs_diff(b.row()) == a.col().abs_diff(b.col())
}

proptest! {
    #[test]
    fn union_and_intersect_commute(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.union(b), b.union(a));
        prop_assert_eq!(a.intersect(b), b.intersect(a));
    }

    #[test]
    fn difference_is_intersect_with_inverse(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.difference(b), a.intersect(b.inverse()));
    }

    #[test]
    fn inverse_is_an_involution(a in set_strategy()) {
        prop_assert_eq!(a.inverse().inverse(), a);
        prop_assert_eq!(a.union(a.inverse()), SquareSet::ALL);
        prop_assert!(a.intersect(a.inverse()).is_empty());
    }

    #[test]
    fn subset_views_agree(a in set_strategy(), b in set_strategy()) {
        let sub = a.intersect(b);
        prop_assert!(sub.is_subset_of(a));
        prop_assert_eq!(a.is_subset_of(b), b.is_superset_of(a));
        prop_assert_eq!(a.is_subset_of(b), b.has_subset(a));
        prop_assert_eq!(a.is_proper_subset_of(b), b.has_proper_subset(a));
        prop_assert_eq!(a.is_proper_subset_of(b), b.is_proper_superset_of(a));
        prop_assert_eq!(a.is_subset_of(b), a.intersect(b) == a);
        prop_assert_eq!(a.is_proper_subset_of(b), a.is_subset_of(b) && a != b);
    }

    #[test]
    fn iteration_matches_count(a in set_strategy()) {
        let squares: Vec<Square> = a.iter().collect();
        prop_assert_eq!(squares.len() as u32, a.count());
        prop_assert!(squares.windows(2).all(|w| w[0].index() < w[1].index()));
        prop_assert_eq!(squares.into_iter().collect::<SquareSet>(), a);
    }

    #[test]
    fn display_parses_back(a in set_strategy()) {
        prop_assert_eq!(a.to_string().parse::<SquareSet>(), Ok(a));
    }

    #[test]
    fn queen_equals_bishop_union_rook(sq in square_strategy(), occupied in set_strategy()) {
        prop_assert_eq!(
            bishop_attacks(sq, occupied).union(rook_attacks(sq, occupied)),
            queen_attacks(sq, occupied)
        );
    }

    #[test]
    fn rook_reach_is_first_blocker_inclusive(sq in square_strategy(), occupied in set_strategy()) {
        let attacks = rook_attacks(sq, occupied);
        for target in Square::all() {
            let reachable = rook_aligned(sq, target) && !between(sq, target).intersects(occupied);
            prop_assert_eq!(attacks.contains(target), reachable, "{} -> {}", sq, target);
        }
    }

    #[test]
    fn bishop_reach_is_first_blocker_inclusive(sq in square_strategy(), occupied in set_strategy()) {
        let attacks = bishop_attacks(sq, occupied);
        for target in Square::all() {
            let reachable = bishop_aligned(sq, target) && !between(sq, target).intersects(occupied);
            prop_assert_eq!(attacks.contains(target), reachable, "{} -> {}", sq, target);
        }
    }
}

#[test]
fn concurrent_first_access_is_consistent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                init_attack_tables().unwrap();
                let sq = Square::from_index(i * 7).unwrap();
                rook_attacks(sq, SquareSet::RANK_4)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let sq = Square::from_index(i as u8 * 7).unwrap();
        assert_eq!(handle.join().unwrap(), rook_attacks(sq, SquareSet::RANK_4));
    }
}
