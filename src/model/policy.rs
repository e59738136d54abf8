use rand::Rng;
use serde::Serialize;

use crate::data::snack::{BATTLE_CHOICES, SNACKS};

/// Which nickname policy a batch ran with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Two fixed values, balanced across members.
    Battle,
    /// One shared value for everyone ("group event").
    Uniform,
    /// An independent draw from the pool per member.
    Random,
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Battle => write!(f, "battle"),
            Self::Uniform => write!(f, "group"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// Discord rejects nicknames longer than this many characters.
pub const MAX_NICKNAME_LENGTH: usize = 32;

/// Non-empty pool of candidate nicknames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePool(Vec<String>);

impl ValuePool {
    /// Creates a pool, returning `None` when no usable value remains after trimming.
    pub fn new<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        (!values.is_empty()).then_some(Self(values))
    }

    /// The built-in Dutch snack vocabulary.
    pub fn snacks() -> Self {
        Self(SNACKS.iter().map(|s| s.to_string()).collect())
    }

    /// Draws one value uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.random_range(0..self.0.len())]
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// The two fixed contenders of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattlePair {
    pub a: String,
    pub b: String,
}

impl BattlePair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Default for BattlePair {
    fn default() -> Self {
        Self::new(BATTLE_CHOICES.0, BATTLE_CHOICES.1)
    }
}

/// Nickname policy applied to a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationPolicy {
    /// Everyone receives the same value.
    Uniform(String),
    /// Everyone receives one of two values, keeping the counts balanced.
    Battle(BattlePair),
    /// Everyone receives an independent draw from the pool.
    Random(ValuePool),
}

impl MutationPolicy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Uniform(_) => PolicyKind::Uniform,
            Self::Battle(_) => PolicyKind::Battle,
            Self::Random(_) => PolicyKind::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::rng::ZeroRng;

    use super::*;

    #[test]
    fn empty_pool_is_rejected() {
        assert!(ValuePool::new(Vec::<String>::new()).is_none());
        assert!(ValuePool::new(["  ", ""]).is_none());
    }

    #[test]
    fn pool_trims_and_drops_blank_values() {
        let pool = ValuePool::new([" Kroket ", "", "Drop"]).unwrap();

        assert_eq!(pool.values(), &["Kroket".to_string(), "Drop".to_string()]);
        assert!(pool.contains("Drop"));
    }

    #[test]
    fn pick_stays_inside_pool() {
        let pool = ValuePool::snacks();
        let mut rng = test_utils::rng::seeded(3);

        for _ in 0..100 {
            assert!(pool.contains(pool.pick(&mut rng)));
        }
        assert_eq!(pool.pick(&mut ZeroRng), "Kroket");
    }
}
