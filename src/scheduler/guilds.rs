use serenity::{
    all::GuildId,
    http::{GuildPagination, Http},
};

use crate::error::AppError;

/// Maximum number of guilds Discord returns per request.
const GUILDS_PER_REQUEST: u64 = 200;

/// Fetches the ids of every guild the bot is in.
///
/// Pages through the current user's guilds until a page comes back short.
pub async fn fetch_guild_ids(http: &Http) -> Result<Vec<u64>, AppError> {
    let mut guild_ids = Vec::new();
    let mut after: Option<GuildId> = None;

    loop {
        let page = http
            .get_guilds(after.map(GuildPagination::After), Some(GUILDS_PER_REQUEST))
            .await?;
        let page_len = page.len() as u64;

        guild_ids.extend(page.iter().map(|guild| guild.id.get()));

        match page.last() {
            Some(last) if page_len == GUILDS_PER_REQUEST => after = Some(last.id),
            _ => break,
        }
    }

    Ok(guild_ids)
}
