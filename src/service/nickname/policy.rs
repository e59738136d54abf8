use std::cmp::Ordering;

use rand::Rng;

use crate::model::{
    batch::BattleTally,
    policy::{BattlePair, MutationPolicy, PolicyKind, ValuePool},
};

/// Cumulative upper bounds of the special event bands.
///
/// A draw `r` in `[0, 1)` selects the first entry whose bound is strictly greater than
/// `r`, so each band is `[previous bound, bound)`: 5% battle, 5% group, 90% random.
pub static EVENT_TABLE: [(f64, PolicyKind); 3] = [
    (0.05, PolicyKind::Battle),
    (0.10, PolicyKind::Uniform),
    (1.0, PolicyKind::Random),
];

/// Maps a draw in `[0, 1)` onto the event table.
pub fn kind_for_draw(draw: f64) -> PolicyKind {
    EVENT_TABLE
        .iter()
        .find(|(upper, _)| draw < *upper)
        .map(|(_, kind)| *kind)
        .unwrap_or(PolicyKind::Random)
}

/// Draws the policy for a batch with a single random draw.
pub fn draw_policy<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &ValuePool,
    battle: &BattlePair,
) -> MutationPolicy {
    match kind_for_draw(rng.random::<f64>()) {
        PolicyKind::Battle => MutationPolicy::Battle(battle.clone()),
        PolicyKind::Uniform => MutationPolicy::Uniform(pool.pick(rng).to_string()),
        PolicyKind::Random => MutationPolicy::Random(pool.clone()),
    }
}

/// Online allocator for the two battle choices.
///
/// Each allocation goes to the choice with the smaller count so far; ties are broken
/// by a fair coin flip, where heads means choice A.
#[derive(Debug, Clone)]
pub struct BattleAllocator {
    pair: BattlePair,
    count_a: usize,
    count_b: usize,
}

impl BattleAllocator {
    pub fn new(pair: BattlePair) -> Self {
        Self {
            pair,
            count_a: 0,
            count_b: 0,
        }
    }

    fn favours_a<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match self.count_a.cmp(&self.count_b) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => rng.random_bool(0.5),
        }
    }

    /// Returns the choice the next allocation would get, without counting it.
    pub fn peek<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        if self.favours_a(rng) {
            &self.pair.a
        } else {
            &self.pair.b
        }
    }

    /// Allocates the next choice and counts it immediately.
    pub fn allocate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        if self.favours_a(rng) {
            self.count_a += 1;
            &self.pair.a
        } else {
            self.count_b += 1;
            &self.pair.b
        }
    }

    pub fn tally(&self) -> BattleTally {
        BattleTally {
            choice_a: self.pair.a.clone(),
            choice_b: self.pair.b.clone(),
            count_a: self.count_a,
            count_b: self.count_b,
        }
    }
}

/// Hands out nickname values for one batch according to its policy.
#[derive(Debug, Clone)]
pub enum ValueSelector {
    Uniform(String),
    Battle(BattleAllocator),
    Random(ValuePool),
}

impl ValueSelector {
    pub fn new(policy: MutationPolicy) -> Self {
        match policy {
            MutationPolicy::Uniform(value) => Self::Uniform(value),
            MutationPolicy::Battle(pair) => Self::Battle(BattleAllocator::new(pair)),
            MutationPolicy::Random(pool) => Self::Random(pool),
        }
    }

    /// Value for a member that is about to be renamed.
    pub fn next_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        match self {
            Self::Uniform(value) => value.clone(),
            Self::Battle(allocator) => allocator.allocate(rng).to_string(),
            Self::Random(pool) => pool.pick(rng).to_string(),
        }
    }

    /// Value a member would have received, leaving the battle counts untouched.
    pub fn suggest_value<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Self::Uniform(value) => value.clone(),
            Self::Battle(allocator) => allocator.peek(rng).to_string(),
            Self::Random(pool) => pool.pick(rng).to_string(),
        }
    }

    pub fn uniform_value(&self) -> Option<String> {
        match self {
            Self::Uniform(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn battle_tally(&self) -> Option<BattleTally> {
        match self {
            Self::Battle(allocator) => Some(allocator.tally()),
            _ => None,
        }
    }
}
