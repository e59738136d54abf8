//! Static word tables the bot draws its nicknames, channel names, and wisdom from.

pub mod snack;
pub mod wisdom;
