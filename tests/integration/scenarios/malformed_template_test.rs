//! Operator-edited templates that do not match the configured counters

use assert_matches::assert_matches;
use PopCommand::config::{I18nConfig, PluginConfig};
use PopCommand::i18n::{I18n, MessageKey};
use PopCommand::PopCommandError;

use crate::helpers::{display_options, test_config, test_player, TestContext};

pub fn i18n_with_pop_template(template: &str) -> I18n {
    let mut i18n = I18n::with_default_messages(&I18nConfig::default());
    i18n.register_messages("en", [(MessageKey::POP_MESSAGE, template)]);
    i18n
}

#[test]
fn test_template_matching_all_counters() {
    let ctx = TestContext::new_with_i18n(
        PluginConfig {
            display_options: display_options([true; 5]),
            ..test_config()
        },
        i18n_with_pop_template("{0}/{1} ({2} asleep, {3} joining, {4} queued)"),
    );

    ctx.chat(&test_player(), "/pop");

    assert_eq!(ctx.chat.direct_messages()[0].1, "42/100 (7 asleep, 3 joining, 12 queued)");
}

#[test]
fn test_sleepers_only_template() {
    let ctx = TestContext::new_with_i18n(
        PluginConfig {
            display_options: display_options([false, false, true, false, false]),
            ..test_config()
        },
        i18n_with_pop_template("Sleeping: {0}"),
    );

    ctx.chat(&test_player(), "/pop");

    assert_eq!(ctx.chat.direct_messages()[0].1, "Sleeping: 7");
}

#[test]
fn test_repeated_placeholder_falls_back() {
    let ctx = TestContext::new_with_i18n(test_config(), i18n_with_pop_template("{0} {0} {0}"));

    ctx.chat(&test_player(), "/pop");

    assert_eq!(ctx.chat.direct_messages()[0].1, "The config/lang file contains some errors!");
}

#[test]
fn test_out_of_range_index_is_fatal() {
    let ctx = TestContext::new_with_i18n(test_config(), i18n_with_pop_template("{0}/{7}"));

    let result = ctx.plugin.handle_chat(&test_player(), "/pop");

    assert_matches!(result, Err(PopCommandError::PlaceholderOutOfRange { index: 7, supplied: 2, .. }));
    assert!(ctx.chat.deliveries().is_empty());
}

#[test]
fn test_error_template_with_placeholder_is_sent_as_written() {
    let mut i18n = i18n_with_pop_template("{0} {0} {0}");
    i18n.register_messages("en", [(MessageKey::POP_ERROR, "Lang error in {0}")]);
    let ctx = TestContext::new_with_i18n(test_config(), i18n);

    ctx.chat(&test_player(), "/pop");

    assert_eq!(ctx.chat.direct_messages()[0].1, "Lang error in {0}");
}
