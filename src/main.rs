//! PopCommand console host
//!
//! Runs the plugin against an in-memory server: chat lines are read from
//! stdin as `<player_id> <text>` and replies are printed to stdout.

use std::sync::Arc;
use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;

use PopCommand::{
    config::{PluginConfig, Settings},
    console::ConsoleSession,
    i18n::I18n,
    services::{ConsoleChat, HostServices, InMemoryPermissions},
    utils::logging,
    PopCommandPlugin,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", PopCommand::info());

    let config = PluginConfig::load(&settings.plugin.config_path)
        .with_context(|| format!("loading {}", settings.plugin.config_path))?;

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::with_default_messages(&settings.i18n);
    i18n.load_translations(&settings.plugin.lang_dir).await?;
    for (player_id, lang) in &settings.console.languages {
        i18n.set_player_language(player_id, lang);
    }
    for lang in i18n.get_stats().languages {
        info!(language = %lang.code, keys = lang.key_count, "Translations ready");
    }

    let host = HostServices::new(
        Arc::new(settings.console.population),
        Arc::new(InMemoryPermissions::with_grants(&settings.console.permissions)),
        Arc::new(ConsoleChat::stdout()),
    );

    let plugin = PopCommandPlugin::new(config, i18n, host);
    plugin.init();

    info!("Reading chat from stdin, one '<player_id> <text>' per line");

    let session = ConsoleSession::new(&plugin, &settings.console.admins);
    let stats = session.serve(BufReader::new(tokio::io::stdin())).await?;
    info!(served = stats.served, failed = stats.failed, ignored = stats.ignored, "Chat input closed");

    plugin.unload();
    info!("PopCommand console host has been shut down.");

    Ok(())
}
