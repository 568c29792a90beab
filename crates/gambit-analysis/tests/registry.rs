//! Registry-wide invariants of both vocabularies.

use std::collections::HashSet;
use std::thread;

use gambit_analysis::{
    AnalysisMask, GroupTag, MoveGroup, MoveTag, PositionGroup, PositionTag, Registry, Tag,
};
use proptest::prelude::*;

fn check_registry<T: Tag>(registry: &Registry<T>) {
    let analyses = registry.analyses();
    assert_eq!(analyses.len(), T::ALL.len());

    let mut names = HashSet::new();
    for (position, analysis) in analyses.iter().enumerate() {
        assert_eq!(analysis.id() as usize, position);
        assert_eq!(analysis.mask(), 1u64 << position);
        assert!(names.insert(analysis.name()), "{} registered twice", analysis.name());
        assert_eq!(registry.find(analysis.name()).map(|a| a.tag()), Some(analysis.tag()));
    }

    for group in registry.groups() {
        assert!(!group.members().is_empty());
        let union = group.members().iter().fold(0u64, |acc, tag| acc | tag.mask());
        assert_eq!(group.mask(), union, "{}", group.name());
        for analysis in analyses {
            let declared = group.members().contains(&analysis.tag());
            assert_eq!(analysis.mask() & group.mask() != 0, declared);
        }
    }
}

#[test]
fn move_registry_is_well_formed() {
    check_registry(MoveTag::registry());
}

#[test]
fn position_registry_is_well_formed() {
    check_registry(PositionTag::registry());
}

#[test]
fn group_handles_resolve_to_registered_groups() {
    for &group in MoveGroup::ALL {
        assert_eq!(group.group().name(), group.name());
        assert_eq!(MoveTag::registry().group(group.name()), Some(group.group()));
    }
    for &group in PositionGroup::ALL {
        assert_eq!(group.group().name(), group.name());
    }
}

#[test]
fn illegal_masks_match_groups() {
    assert_eq!(MoveTag::registry().illegal_mask(), MoveGroup::Illegal.group().mask());
    assert_eq!(
        MoveTag::registry().not_pseudo_legal_mask(),
        MoveGroup::NotPseudoLegal.group().mask()
    );
    assert_eq!(PositionTag::registry().illegal_mask(), PositionGroup::Illegal.group().mask());
}

#[test]
fn concurrent_first_access_sees_one_registry() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| MoveTag::registry() as *const Registry<MoveTag> as usize))
        .collect();
    let addresses: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(addresses.len(), 1);
}

fn move_mask() -> impl Strategy<Value = AnalysisMask<MoveTag>> {
    proptest::sample::subsequence(MoveTag::ALL.to_vec(), 0..=MoveTag::ALL.len())
        .prop_map(AnalysisMask::from_tags)
}

proptest! {
    #[test]
    fn group_match_agrees_with_member_scan(applied in move_mask()) {
        for &group in MoveGroup::ALL {
            let group = group.group();
            let scanned = applied.iter().any(|tag| group.contains(tag));
            prop_assert_eq!(group.matches(applied), scanned);
            prop_assert_eq!(applied.intersects(group), scanned);
        }
    }

    #[test]
    fn legality_follows_applied_tags(applied in move_mask()) {
        let legal = applied.iter().all(|tag| tag.legality().is_legal());
        let pseudo = applied.iter().all(|tag| tag.legality().is_pseudo_legal());
        prop_assert_eq!(applied.is_legal(), legal);
        prop_assert_eq!(applied.is_pseudo_legal(), pseudo);
        prop_assert!(!applied.is_legal() || applied.is_pseudo_legal());
    }

    #[test]
    fn from_bits_keeps_iteration_order(bits in any::<u64>()) {
        let mask = AnalysisMask::<MoveTag>::from_bits(bits);
        let ids: Vec<u8> = mask.iter().map(|tag| tag.id()).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(ids.len() as u32, mask.bits().count_ones());
    }
}
