use crate::service::nickname::policy::{
    draw_policy, kind_for_draw, BattleAllocator, ValueSelector, EVENT_TABLE,
};

use super::*;

/// Tests the band boundaries of the event table.
///
/// Each band is half-open `[low, high)`.
///
/// Expected: 5% battle, 5% group, 90% random with exact boundaries
#[test]
fn event_bands_are_half_open() {
    assert_eq!(kind_for_draw(0.0), PolicyKind::Battle);
    assert_eq!(kind_for_draw(0.049_999), PolicyKind::Battle);
    assert_eq!(kind_for_draw(0.05), PolicyKind::Uniform);
    assert_eq!(kind_for_draw(0.099_999), PolicyKind::Uniform);
    assert_eq!(kind_for_draw(0.10), PolicyKind::Random);
    assert_eq!(kind_for_draw(0.999_999), PolicyKind::Random);
}

/// Tests the event table is a valid cumulative distribution.
///
/// Expected: strictly increasing bounds ending at 1.0, each kind listed once
#[test]
fn event_table_is_cumulative() {
    let bounds: Vec<f64> = EVENT_TABLE.iter().map(|(bound, _)| *bound).collect();

    assert!(bounds.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(bounds.last().copied(), Some(1.0));

    let kinds: HashSet<PolicyKind> = EVENT_TABLE.iter().map(|(_, kind)| *kind).collect();
    assert_eq!(kinds.len(), EVENT_TABLE.len());
}

/// Tests drawn policies follow the 5/5/90 split.
///
/// Expected: band frequencies within tolerance over 20000 seeded draws
#[test]
fn drawn_policies_follow_split() {
    let pool = ValuePool::snacks();
    let battle = BattlePair::default();
    let mut rng = seeded(30);
    let (mut battles, mut groups, mut randoms) = (0, 0, 0);

    for _ in 0..20_000 {
        match draw_policy(&mut rng, &pool, &battle) {
            MutationPolicy::Battle(pair) => {
                assert_eq!(pair, battle);
                battles += 1;
            }
            MutationPolicy::Uniform(value) => {
                assert!(pool.contains(&value));
                groups += 1;
            }
            MutationPolicy::Random(_) => randoms += 1,
        }
    }

    assert!((800..1200).contains(&battles), "battles: {}", battles);
    assert!((800..1200).contains(&groups), "groups: {}", groups);
    assert!((17_600..18_400).contains(&randoms), "randoms: {}", randoms);
}

/// Tests a zero draw lands in the battle band.
///
/// Expected: Battle with the configured pair
#[test]
fn zero_draw_is_battle() {
    let policy = draw_policy(&mut ZeroRng, &ValuePool::snacks(), &BattlePair::default());

    assert_eq!(policy, MutationPolicy::Battle(BattlePair::default()));
}

/// Tests the allocator never picks the larger bucket.
///
/// Expected: once counts differ the smaller side is chosen regardless of the RNG
#[test]
fn allocator_prefers_smaller_bucket() {
    let mut allocator = BattleAllocator::new(BattlePair::new("Kroket", "Frikandel"));
    let mut rng = seeded(31);

    for _ in 0..50 {
        let before = allocator.tally();
        let chosen = allocator.allocate(&mut rng).to_string();

        if before.count_a < before.count_b {
            assert_eq!(chosen, "Kroket");
        } else if before.count_b < before.count_a {
            assert_eq!(chosen, "Frikandel");
        }

        let after = allocator.tally();
        assert!(after.count_a.abs_diff(after.count_b) <= 1);
    }

    let tally = allocator.tally();
    assert_eq!(tally.count_a + tally.count_b, 50);
}

/// Tests peeking does not count.
///
/// Expected: tally unchanged after peek, peek agrees with the next allocation
#[test]
fn peek_does_not_consume() {
    let mut allocator = BattleAllocator::new(BattlePair::default());
    allocator.allocate(&mut ZeroRng);

    let peeked = allocator.peek(&mut ZeroRng).to_string();
    let tally = allocator.tally();
    assert_eq!((tally.count_a, tally.count_b), (1, 0));

    assert_eq!(allocator.allocate(&mut ZeroRng), peeked);
}

/// Tests the selector keeps the group value fixed.
///
/// Expected: every value and the suggestion equal the group value
#[test]
fn uniform_selector_repeats_value() {
    let mut selector = ValueSelector::new(MutationPolicy::Uniform("Bitterbal".to_string()));
    let mut rng = seeded(32);

    for _ in 0..5 {
        assert_eq!(selector.next_value(&mut rng), "Bitterbal");
    }
    assert_eq!(selector.suggest_value(&mut rng), "Bitterbal");
    assert_eq!(selector.uniform_value().as_deref(), Some("Bitterbal"));
    assert_eq!(selector.battle_tally(), None);
}
