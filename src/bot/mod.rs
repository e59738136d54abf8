//! Discord bot integration.
//!
//! The bot is initialized during startup and its HTTP client is shared with the
//! scheduler so scheduled jobs can rename members and post messages without a second
//! connection to Discord.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive messages for prefix commands
//! - `MESSAGE_CONTENT` - Read the content of those messages (privileged intent)
//! - `GUILD_MEMBERS` - List members and receive nickname updates (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod handler;
pub mod start;
