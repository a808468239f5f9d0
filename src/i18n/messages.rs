//! Message keys and the built-in language tables

/// Logical message keys, shared by every language table
pub struct MessageKey;

impl MessageKey {
    pub const POP_MESSAGE: &'static str = "PopCommand.ChatMessage";
    pub const POP_MESSAGE_ADMIN: &'static str = "PopCommand.AdminMessage";
    pub const POP_PERMISSION_DENY: &'static str = "PopCommand.PermissionDeny";
    pub const POP_ADMIN_PERMISSION_DENY: &'static str = "PopCommand.AdminPermissionDeny";
    pub const POP_ERROR: &'static str = "PopCommand.Error";

    /// Every key a language table is expected to define
    pub const ALL: [&'static str; 5] = [
        Self::POP_MESSAGE,
        Self::POP_MESSAGE_ADMIN,
        Self::POP_PERMISSION_DENY,
        Self::POP_ADMIN_PERMISSION_DENY,
        Self::POP_ERROR,
    ];
}

pub const ENGLISH: &[(&str, &str)] = &[
    (MessageKey::POP_MESSAGE, "Players onlines: {0}/{1}"),
    (
        MessageKey::POP_MESSAGE_ADMIN,
        "Players onlines: {0}/{1} | Sleeping: {2} | Joining: {3} | Queued: {4}",
    ),
    (MessageKey::POP_PERMISSION_DENY, "You are not allowed to run this command!"),
    (MessageKey::POP_ADMIN_PERMISSION_DENY, "Only administrators can run this command!"),
    (MessageKey::POP_ERROR, "The config/lang file contains some errors!"),
];

pub const FRENCH: &[(&str, &str)] = &[
    (MessageKey::POP_MESSAGE, "Joueurs en ligne : {0}/{1}"),
    (
        MessageKey::POP_MESSAGE_ADMIN,
        "Joueurs en ligne : {0}/{1} | Endormi : {2} | En train de rejoindre : {3} | Dans la queue : {4}",
    ),
    (MessageKey::POP_PERMISSION_DENY, "Vous n'êtes pas autorisé à utiliser cette commande !"),
    (MessageKey::POP_ADMIN_PERMISSION_DENY, "Seul les administrateurs peuvent utiliser cette commande !"),
    (MessageKey::POP_ERROR, "Le fichier de configuration/traduction contient des erreurs !"),
];

/// Built-in table for a language code, if one ships with the plugin
pub fn default_messages(lang: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match lang {
        "en" => Some(ENGLISH),
        "fr" => Some(FRENCH),
        _ => None,
    }
}
