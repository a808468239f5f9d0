//! `/pop` command handler

use tracing::debug;
use crate::i18n::MessageKey;
use crate::models::ChatPlayer;
use crate::services::collect_counts;
use crate::utils::errors::{PopCommandError, Result};
use crate::utils::logging;
use crate::handlers::CommandContext;
use super::Command;

/// Handle /pop: report the enabled counters to the player, or to everyone
/// when broadcasting is configured
pub fn handle_pop(ctx: &CommandContext, player: &ChatPlayer) -> Result<()> {
    debug!(player_id = %player.id, "Processing /pop command");

    match ctx.auth.check_player_auth(player) {
        Ok(()) => {}
        Err(PopCommandError::PermissionDenied(permission)) => {
            logging::log_permission_denied(&player.id, Command::Pop.name(), &permission);
            let text = ctx.resolver.resolve_plain(MessageKey::POP_PERMISSION_DENY, Some(player.id.as_str()))?;
            ctx.reply(player, &text);
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    let counts = collect_counts(&ctx.config.display_options, ctx.host.population.as_ref());
    let text = ctx.resolver.resolve(MessageKey::POP_MESSAGE, Some(player.id.as_str()), &counts)?;

    if ctx.config.do_broadcast {
        ctx.broadcast(&text);
    } else {
        ctx.reply(player, &text);
    }

    logging::log_command(&player.id, Command::Pop.name(), ctx.config.do_broadcast);
    Ok(())
}
