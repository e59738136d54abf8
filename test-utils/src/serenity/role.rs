//! Test factory for creating Serenity Role objects.

use std::collections::HashMap;

use serenity::all::{Role, RoleId};

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (no color, not hoisted,
/// not managed, not mentionable). Both the legacy `color` and the newer
/// `colors` object are present so every 0.12 release of Serenity accepts it.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `guild_id` - Discord guild ID the role belongs to
/// - `name` - Role name
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `permissions` - Raw permission bits granted by the role
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// // Role that may manage nicknames (MANAGE_NICKNAMES = 1 << 27)
/// let role = create_test_role(123456789, 1, "Snackmeester", 10, 1 << 27);
/// assert_eq!(role.position, 10);
/// ```
pub fn create_test_role(
    role_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
    permissions: u64,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Collects roles into the id-keyed map Serenity uses for guild roles.
pub fn role_map(roles: Vec<Role>) -> HashMap<RoleId, Role> {
    roles.into_iter().map(|role| (role.id, role)).collect()
}

#[cfg(test)]
mod tests {
    use serenity::all::Permissions;

    use super::*;

    #[test]
    fn creates_role_with_permissions() {
        let role = create_test_role(10, 1, "Snackmeester", 4, 1 << 27);

        assert_eq!(role.name, "Snackmeester");
        assert_eq!(role.position, 4);
        assert!(role.permissions.contains(Permissions::MANAGE_NICKNAMES));
    }
}
