//! `/apop` command handler

use tracing::debug;
use crate::i18n::MessageKey;
use crate::models::ChatPlayer;
use crate::utils::errors::{PopCommandError, Result};
use crate::utils::logging;
use crate::handlers::CommandContext;
use super::Command;

/// Handle /apop: report all five counters to an administrator, regardless of
/// display options and never broadcast
pub fn handle_pop_admin(ctx: &CommandContext, player: &ChatPlayer) -> Result<()> {
    debug!(player_id = %player.id, "Processing /apop command");

    match ctx.auth.check_admin_auth(player) {
        Ok(()) => {}
        Err(PopCommandError::PermissionDenied(permission)) => {
            logging::log_permission_denied(&player.id, Command::PopAdmin.name(), &permission);
            let text = ctx.resolver.resolve_plain(MessageKey::POP_ADMIN_PERMISSION_DENY, Some(player.id.as_str()))?;
            ctx.reply(player, &text);
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    let counts = ctx.host.population.snapshot().all();
    let text = ctx.resolver.resolve(MessageKey::POP_MESSAGE_ADMIN, Some(player.id.as_str()), &counts)?;
    ctx.reply(player, &text);

    logging::log_command(&player.id, Command::PopAdmin.name(), false);
    Ok(())
}
