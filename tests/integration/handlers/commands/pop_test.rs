//! Integration tests for the /pop command handler

use PopCommand::config::{PluginConfig, PERMISSION_USE};

use crate::helpers::{display_options, test_config, test_player, Delivery, TestContext, TEST_AVATAR};

/// Default configuration replies with online/slots to the invoker only
#[test]
fn test_pop_replies_to_invoker() {
    let ctx = TestContext::new();
    let player = test_player();

    ctx.chat(&player, "/pop");

    assert_eq!(
        ctx.chat.deliveries(),
        vec![Delivery::Direct {
            player_id: player.id.clone(),
            message: "Players onlines: 42/100".to_string(),
            avatar_id: TEST_AVATAR,
        }]
    );
}

/// Broadcast sends the message once to everyone and nothing to the invoker
#[test]
fn test_pop_broadcast() {
    let ctx = TestContext::new_with_config(PluginConfig {
        do_broadcast: true,
        ..test_config()
    });

    ctx.chat(&test_player(), "/pop");

    assert_eq!(
        ctx.chat.deliveries(),
        vec![Delivery::Broadcast {
            message: "Players onlines: 42/100".to_string(),
            avatar_id: TEST_AVATAR,
        }]
    );
    assert!(ctx.chat.direct_messages().is_empty());
}

/// Only the sleeper count is read and substituted
#[test]
fn test_pop_only_sleepers() {
    let ctx = TestContext::new_with_config(PluginConfig {
        display_options: display_options([false, false, true, false, false]),
        ..test_config()
    });

    // the stock template needs two values, so one value falls back to the error text
    ctx.chat(&test_player(), "/pop");

    assert_eq!(ctx.population.reads(), [0, 0, 1, 0, 0]);
    assert_eq!(
        ctx.chat.direct_messages()[0].1,
        "The config/lang file contains some errors!"
    );
}

/// Permission gate enabled and player lacking `popcommand.use`
#[test]
fn test_pop_permission_denied() {
    let ctx = TestContext::new_with_config(PluginConfig {
        use_permission_for_players: true,
        do_broadcast: true,
        ..test_config()
    });
    let player = test_player();

    ctx.chat(&player, "/pop");

    assert_eq!(
        ctx.chat.direct_messages(),
        vec![(player.id.clone(), "You are not allowed to run this command!".to_string())]
    );
    assert!(ctx.chat.broadcasts().is_empty());
    assert_eq!(ctx.population.reads(), [0; 5]);
}

/// Permission gate enabled and permission granted
#[test]
fn test_pop_permission_granted() {
    let ctx = TestContext::new_with_config(PluginConfig {
        use_permission_for_players: true,
        ..test_config()
    });
    let player = test_player();
    ctx.permissions.grant(&player.id, PERMISSION_USE);

    ctx.chat(&player, "/pop");

    assert_eq!(
        ctx.chat.direct_messages(),
        vec![(player.id.clone(), "Players onlines: 42/100".to_string())]
    );
}

/// Arguments after the command are ignored
#[test]
fn test_pop_ignores_arguments() {
    let ctx = TestContext::new();
    ctx.chat(&test_player(), "/POP please");
    assert_eq!(ctx.chat.deliveries().len(), 1);
}

/// Unrelated chat is not handled
#[test]
fn test_other_chat_not_handled() {
    let ctx = TestContext::new();
    let handled = ctx.plugin.handle_chat(&test_player(), "hello there").unwrap();
    assert!(!handled);
    assert!(ctx.chat.deliveries().is_empty());
}
