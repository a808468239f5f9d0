//! Integration tests for the /apop command handler

use PopCommand::config::{PluginConfig, PERMISSION_ADMIN};
use PopCommand::models::ChatPlayer;

use crate::helpers::{display_options, test_admin, test_config, test_player, Delivery, TestContext, TEST_AVATAR};

const FULL_REPORT: &str = "Players onlines: 42/100 | Sleeping: 7 | Joining: 3 | Queued: 12";

/// Admin with permission gets all five counters
#[test]
fn test_apop_full_report() {
    let ctx = TestContext::new();
    let admin = test_admin();
    ctx.permissions.grant(&admin.id, PERMISSION_ADMIN);

    ctx.chat(&admin, "/apop");

    assert_eq!(
        ctx.chat.deliveries(),
        vec![Delivery::Direct {
            player_id: admin.id.clone(),
            message: FULL_REPORT.to_string(),
            avatar_id: TEST_AVATAR,
        }]
    );
}

/// Display options and broadcast do not apply to the admin report
#[test]
fn test_apop_ignores_display_options_and_broadcast() {
    let ctx = TestContext::new_with_config(PluginConfig {
        do_broadcast: true,
        display_options: display_options([false; 5]),
        ..test_config()
    });
    let admin = test_admin();
    ctx.permissions.grant(&admin.id, PERMISSION_ADMIN);

    ctx.chat(&admin, "/apop");

    assert!(ctx.chat.broadcasts().is_empty());
    assert_eq!(ctx.chat.direct_messages(), vec![(admin.id.clone(), FULL_REPORT.to_string())]);
}

/// Non-admin player is denied, nothing broadcast
#[test]
fn test_apop_non_admin_denied() {
    let ctx = TestContext::new_with_config(PluginConfig {
        do_broadcast: true,
        ..test_config()
    });
    let player = test_player();
    ctx.permissions.grant(&player.id, PERMISSION_ADMIN);

    ctx.chat(&player, "/apop");

    assert_eq!(
        ctx.chat.direct_messages(),
        vec![(player.id.clone(), "Only administrators can run this command!".to_string())]
    );
    assert!(ctx.chat.broadcasts().is_empty());
    assert_eq!(ctx.population.reads(), [0; 5]);
}

/// Admin role without the plugin permission is denied
#[test]
fn test_apop_admin_without_permission_denied() {
    let ctx = TestContext::new();
    let admin = ChatPlayer::admin("76561198000000009", "Mallory");

    ctx.chat(&admin, "/apop");

    assert_eq!(
        ctx.chat.direct_messages(),
        vec![(admin.id.clone(), "Only administrators can run this command!".to_string())]
    );
}

/// Permissions are registered when the plugin initializes
#[test]
fn test_permissions_registered_on_init() {
    let ctx = TestContext::new();
    assert!(ctx.permissions.is_registered(PERMISSION_ADMIN));
    assert!(ctx.permissions.is_registered(PopCommand::config::PERMISSION_USE));
}
