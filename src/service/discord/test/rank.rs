use super::*;

/// Tests rank of a member without roles.
///
/// Expected: rank 0
#[test]
fn member_without_roles_ranks_zero() {
    let roles = role_map(vec![create_test_role(10, GUILD_ID, "Snackmeester", 5, 0)]);
    let member = create_test_member(2, GUILD_ID, "jan", None, &[], false);

    assert_eq!(member_rank(&member, &roles, UserId::new(OWNER_ID)), 0);
}

/// Tests rank is taken from the highest role.
///
/// Expected: position of the highest role, unknown roles ignored
#[test]
fn member_rank_uses_highest_role() {
    let roles = role_map(vec![
        create_test_role(10, GUILD_ID, "Frituur", 2, 0),
        create_test_role(11, GUILD_ID, "Snackmeester", 7, 0),
    ]);
    let member = create_test_member(2, GUILD_ID, "jan", None, &[10, 11, 99], false);

    assert_eq!(member_rank(&member, &roles, UserId::new(OWNER_ID)), 7);
}

/// Tests the owner outranks everyone.
///
/// Expected: OWNER_RANK regardless of roles
#[test]
fn owner_outranks_all_roles() {
    let roles = role_map(vec![create_test_role(10, GUILD_ID, "Frituur", 2, 0)]);
    let owner = create_test_member(OWNER_ID, GUILD_ID, "baas", None, &[], false);

    let member = to_guild_member(&owner, &roles, UserId::new(OWNER_ID));

    assert_eq!(member.rank, OWNER_RANK);
    assert!(member.owner);
}

/// Tests conversion keeps nickname and bot flag.
///
/// Expected: display name is the nickname, bot flag preserved
#[test]
fn converts_member_fields() {
    let roles = role_map(vec![]);
    let bot = create_test_member(3, GUILD_ID, "snackbot", Some("Kroket"), &[], true);

    let member = to_guild_member(&bot, &roles, UserId::new(OWNER_ID));

    assert_eq!(member.user_id, 3);
    assert_eq!(member.display_name, "Kroket");
    assert!(member.bot);
    assert!(!member.owner);
}

/// Tests permission granted through a held role.
///
/// Expected: true
#[test]
fn role_grants_manage_nicknames() {
    let roles = role_map(vec![
        create_test_role(GUILD_ID, GUILD_ID, "@everyone", 0, 0),
        create_test_role(10, GUILD_ID, "Snackmeester", 5, MANAGE_NICKNAMES),
    ]);
    let member = create_test_member(2, GUILD_ID, "snackbot", None, &[10], true);

    assert!(can_manage_nicknames(
        &member,
        &roles,
        GuildId::new(GUILD_ID),
        UserId::new(OWNER_ID)
    ));
}

/// Tests permission granted through @everyone.
///
/// Expected: true even without roles
#[test]
fn everyone_role_grants_manage_nicknames() {
    let roles = role_map(vec![create_test_role(
        GUILD_ID,
        GUILD_ID,
        "@everyone",
        0,
        MANAGE_NICKNAMES,
    )]);
    let member = create_test_member(2, GUILD_ID, "snackbot", None, &[], true);

    assert!(can_manage_nicknames(
        &member,
        &roles,
        GuildId::new(GUILD_ID),
        UserId::new(OWNER_ID)
    ));
}

/// Tests administrator implies nickname management.
///
/// Expected: true
#[test]
fn administrator_implies_manage_nicknames() {
    let roles = role_map(vec![create_test_role(10, GUILD_ID, "Admin", 9, ADMINISTRATOR)]);
    let member = create_test_member(2, GUILD_ID, "snackbot", None, &[10], true);

    assert!(can_manage_nicknames(
        &member,
        &roles,
        GuildId::new(GUILD_ID),
        UserId::new(OWNER_ID)
    ));
}

/// Tests a member without the permission.
///
/// Expected: false
#[test]
fn missing_permission_is_denied() {
    let roles = role_map(vec![
        create_test_role(GUILD_ID, GUILD_ID, "@everyone", 0, 0),
        create_test_role(10, GUILD_ID, "Frituur", 2, 0),
    ]);
    let member = create_test_member(2, GUILD_ID, "snackbot", None, &[10], true);

    assert!(!can_manage_nicknames(
        &member,
        &roles,
        GuildId::new(GUILD_ID),
        UserId::new(OWNER_ID)
    ));
}
