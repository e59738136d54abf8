//! Snackbot Test Utils
//!
//! Provides shared testing utilities for the snackbot crate. The bot talks to Discord
//! exclusively through Serenity models and draws all of its randomness from an injected
//! RNG, so tests need two things this crate supplies:
//!
//! - **Serenity factories** (`serenity`): valid `Role` and `Member` structs created by
//!   deserializing JSON, simulating what Discord's API would return.
//! - **Deterministic RNGs** (`rng`): a `ZeroRng` that always yields the lowest possible
//!   value, and a seeded `StdRng` helper for reproducible runs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{rng::ZeroRng, serenity::{create_test_member, create_test_role}};
//!
//! #[test]
//! fn computes_rank() {
//!     let role = create_test_role(111, 1, "Moderator", 5, 0);
//!     let member = create_test_member(222, 1, "jan", None, &[111], false);
//!     let mut rng = ZeroRng;
//!     // Use in your tests...
//! }
//! ```

pub mod rng;
pub mod serenity;
