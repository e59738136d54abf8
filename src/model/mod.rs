//! Domain models shared by the services, the scheduler, and the bot handlers.
//!
//! Models here are free of Serenity types: the Discord adapter converts guild members
//! and roles into `GuildMember` values at the boundary so the nickname engine can be
//! exercised without a live connection.

pub mod batch;
pub mod member;
pub mod policy;
