use super::*;

/// Builds a gateway over an HTTP client without a token, so any Discord request fails.
fn gateway_with_snapshot(actor_roles: &[u64], permissions: u64) -> SerenityGuildGateway {
    let roles = role_map(vec![
        create_test_role(GUILD_ID, GUILD_ID, "@everyone", 0, 0),
        create_test_role(10, GUILD_ID, "Snackbot", 6, permissions),
    ]);
    let actor = create_test_member(99, GUILD_ID, "snackbot", None, actor_roles, true);

    SerenityGuildGateway::with_snapshot(
        Arc::new(Http::new("")),
        GUILD_ID,
        roles,
        UserId::new(OWNER_ID),
        actor,
    )
}

/// Tests permission and actor lookups reuse the fetched guild snapshot.
///
/// Expected: both answered from the snapshot without contacting Discord
#[tokio::test]
async fn snapshot_answers_permission_and_actor() {
    let gateway = gateway_with_snapshot(&[10], MANAGE_NICKNAMES);

    assert!(gateway.can_manage_nicknames().await.unwrap());

    let actor = gateway.fetch_actor().await.unwrap();
    assert_eq!(actor.user_id, 99);
    assert_eq!(actor.rank, 6);
    assert!(actor.bot);

    // Asking again still doesn't go to Discord
    assert_eq!(gateway.fetch_actor().await.unwrap(), actor);
}

/// Tests the permission check on a cached actor without the right role.
///
/// Expected: false
#[tokio::test]
async fn snapshot_without_permission_denies() {
    let gateway = gateway_with_snapshot(&[], MANAGE_NICKNAMES);

    assert!(!gateway.can_manage_nicknames().await.unwrap());
}
