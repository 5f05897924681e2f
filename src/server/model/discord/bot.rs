use serenity::all::CurrentUser;

use crate::model::health::BotIdentityDto;

/// The bot account the session is logged in as.
#[derive(Debug, Clone, PartialEq)]
pub struct BotIdentity {
    /// Discord user ID of the bot account.
    pub id: u64,
    /// Account tag, `name#discriminator` or just `name` for migrated accounts.
    pub tag: String,
}

impl BotIdentity {
    pub fn from_serenity(user: &CurrentUser) -> Self {
        Self {
            id: user.id.get(),
            tag: user.tag(),
        }
    }

    /// Converts to the health check DTO along with the current server count.
    pub fn into_dto(self, servers: usize) -> BotIdentityDto {
        BotIdentityDto {
            username: self.tag,
            id: self.id.to_string(),
            servers,
        }
    }
}
