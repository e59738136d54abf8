/// A guild member as seen by the nickname engine.
///
/// `rank` is an ordinal for hierarchy comparison: the bot may only rename members whose
/// rank is strictly lower than its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    /// Discord user ID.
    pub user_id: u64,
    /// Name shown in the guild (nickname, falling back to the username).
    pub display_name: String,
    /// Hierarchy rank; higher outranks lower.
    pub rank: u32,
    /// Whether the account is a bot.
    pub bot: bool,
    /// Whether the member owns the guild.
    pub owner: bool,
}

/// Members of a guild together with the bot's own member.
///
/// `members` never contains the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRoster {
    pub actor: GuildMember,
    pub members: Vec<GuildMember>,
}

/// A nickname change observed on a guild member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameChange {
    pub guild_id: u64,
    pub user_id: u64,
    /// Previous nickname; also `None` when it isn't known.
    pub before: Option<String>,
    pub after: Option<String>,
}

impl NicknameChange {
    /// Whether the displayed nickname actually differs between before and after.
    pub fn is_changed(&self) -> bool {
        self.before != self.after
    }
}
