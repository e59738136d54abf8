use std::sync::Arc;

use serenity::{
    all::{GuildId, UserId},
    http::Http,
};
use test_utils::serenity::{create_test_member, create_test_role, role_map};

use crate::service::discord::{
    rank::{can_manage_nicknames, member_rank, to_guild_member, OWNER_RANK},
    MemberSource, PermissionOracle, SerenityGuildGateway,
};

mod guild;
mod rank;

const GUILD_ID: u64 = 1000;
const OWNER_ID: u64 = 1;

/// MANAGE_NICKNAMES permission bit
const MANAGE_NICKNAMES: u64 = 1 << 27;
/// ADMINISTRATOR permission bit
const ADMINISTRATOR: u64 = 1 << 3;
