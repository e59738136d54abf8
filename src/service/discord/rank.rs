//! Role hierarchy and permission evaluation for guild members.

use std::collections::HashMap;

use serenity::all::{GuildId, Member, Permissions, Role, RoleId, UserId};

use crate::model::member::GuildMember;

/// Rank given to the guild owner, who outranks every role.
pub const OWNER_RANK: u32 = u32::MAX;

/// Computes the hierarchy rank of a member from the position of their highest role.
///
/// Members without roles rank 0; the guild owner ranks `OWNER_RANK`.
pub fn member_rank(member: &Member, roles: &HashMap<RoleId, Role>, owner_id: UserId) -> u32 {
    if member.user.id == owner_id {
        return OWNER_RANK;
    }

    member
        .roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .map(|role| u32::from(role.position))
        .max()
        .unwrap_or(0)
}

/// Returns true when the member may change other members' nicknames.
///
/// Permissions are the union of the `@everyone` role (whose ID equals the guild ID) and
/// every role the member holds. `ADMINISTRATOR` implies every permission.
pub fn can_manage_nicknames(
    member: &Member,
    roles: &HashMap<RoleId, Role>,
    guild_id: GuildId,
    owner_id: UserId,
) -> bool {
    if member.user.id == owner_id {
        return true;
    }

    let everyone = roles
        .get(&RoleId::new(guild_id.get()))
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    let permissions = member
        .roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .fold(everyone, |acc, role| acc | role.permissions);

    permissions.contains(Permissions::ADMINISTRATOR)
        || permissions.contains(Permissions::MANAGE_NICKNAMES)
}

/// Converts a Serenity member into the engine's `GuildMember`.
pub fn to_guild_member(
    member: &Member,
    roles: &HashMap<RoleId, Role>,
    owner_id: UserId,
) -> GuildMember {
    GuildMember {
        user_id: member.user.id.get(),
        display_name: member.display_name().to_string(),
        rank: member_rank(member, roles, owner_id),
        bot: member.user.bot,
        owner: member.user.id == owner_id,
    }
}
