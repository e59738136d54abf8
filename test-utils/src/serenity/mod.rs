//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, Member) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn test_rank() {
//!     let moderator = create_test_role(111111111, 1, "Moderator", 5, 0);
//!     let member = create_test_member(222222222, 1, "jan", Some("Kroket"), &[111111111], false);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::{create_test_role, role_map};
