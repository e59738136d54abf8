//! Business logic of the bot.
//!
//! - `nickname` - The nickname batch engine and the nickname monitor
//! - `discord` - Interfaces to Discord (members, nicknames, DMs, permissions) and
//!   their Serenity implementation
//! - `log` - Log sinks for audit-style bot events
//! - `wisdom` - Random wisdom generation and posting
//! - `channel` - Throwaway channel creation and cleanup

pub mod channel;
pub mod discord;
pub mod log;
pub mod nickname;
pub mod wisdom;
