use serenity::all::Permissions;
use std::collections::HashSet;

use crate::{
    model::discord::UserGuildDto,
    server::{
        error::{upstream::UpstreamError, AppError},
        util::parse::parse_snowflake,
    },
};

/// Reads the caller's guild list from Discord's REST API using the caller's token.
pub struct UserGuildService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
}

impl<'a> UserGuildService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    /// Fetches every guild the caller is a member of.
    ///
    /// # Arguments
    /// - `access_token` - The caller's OAuth2 access token
    ///
    /// # Returns
    /// - `Ok(Vec<UserGuildDto>)` - Guilds with the caller's permission bitmask
    /// - `Err(AppError::UpstreamErr)` - Discord answered with a non-success status, an
    ///   unexpected body, or could not be reached
    pub async fn fetch_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<UserGuildDto>, AppError> {
        const FAILED: &str = "Failed to fetch guilds";

        let response = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| UpstreamError::from_transport(FAILED, &e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_transport(FAILED, &e))?;

        if !status.is_success() {
            tracing::error!("Discord answered {} when listing the caller's guilds", status);
            return Err(UpstreamError::from_body(FAILED, &body).into());
        }

        let guilds = serde_json::from_slice::<Vec<UserGuildDto>>(&body).map_err(|e| {
            UpstreamError::new(FAILED, Some(serde_json::Value::String(e.to_string())))
        })?;

        Ok(guilds)
    }

    /// Guilds the caller administers and the bot is present in.
    pub async fn admin_guilds(
        &self,
        access_token: &str,
        bot_guild_ids: &HashSet<u64>,
    ) -> Result<Vec<UserGuildDto>, AppError> {
        let guilds = self.fetch_user_guilds(access_token).await?;

        Ok(filter_admin_guilds(guilds, bot_guild_ids))
    }

    /// IDs of every guild the caller is a member of.
    pub async fn guild_ids(&self, access_token: &str) -> Result<HashSet<u64>, AppError> {
        let guilds = self.fetch_user_guilds(access_token).await?;

        Ok(guilds
            .iter()
            .filter_map(|guild| parse_snowflake(&guild.id))
            .collect())
    }
}

/// Keeps the guilds where the caller holds the administrator bit and the bot is a member.
///
/// Upstream order is preserved.
pub fn filter_admin_guilds(
    guilds: Vec<UserGuildDto>,
    bot_guild_ids: &HashSet<u64>,
) -> Vec<UserGuildDto> {
    guilds
        .into_iter()
        .filter(|guild| {
            Permissions::from_bits_truncate(guild.permissions).contains(Permissions::ADMINISTRATOR)
        })
        .filter(|guild| {
            parse_snowflake(&guild.id).is_some_and(|guild_id| bot_guild_ids.contains(&guild_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn guild(id: &str, permissions: u64) -> UserGuildDto {
        UserGuildDto {
            id: id.to_string(),
            name: format!("Guild {}", id),
            icon: None,
            owner: false,
            permissions,
            features: Vec::new(),
        }
    }

    #[test]
    fn keeps_only_admin_guilds_shared_with_bot() {
        let guilds = vec![guild("1", 8), guild("2", 0), guild("3", 8)];
        let bot_guilds = HashSet::from([1, 2]);

        let filtered = filter_admin_guilds(guilds, &bot_guilds);

        assert_eq!(filtered, vec![guild("1", 8)]);
    }

    #[test]
    fn admin_bit_may_be_combined_with_others() {
        // MANAGE_GUILD | ADMINISTRATOR | SEND_MESSAGES
        let guilds = vec![guild("1", 0x20 | 0x8 | 0x800), guild("2", 0x20 | 0x800)];
        let bot_guilds = HashSet::from([1, 2]);

        let filtered = filter_admin_guilds(guilds, &bot_guilds);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn skips_guilds_with_unparsable_ids() {
        let guilds = vec![guild("not-a-snowflake", 8)];

        assert!(filter_admin_guilds(guilds, &HashSet::from([1])).is_empty());
    }

    #[tokio::test]
    async fn fetches_guilds_with_caller_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/@me/guilds")
            .match_header("authorization", "Bearer user-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"1","name":"One","icon":null,"owner":true,"permissions":"2147483647","features":["COMMUNITY"]}]"#)
            .create_async()
            .await;

        let http_client = reqwest::Client::new();
        let api_url = server.url();
        let guilds = UserGuildService::new(&http_client, &api_url)
            .fetch_user_guilds("user-token")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(guilds.len(), 1);
        assert_eq!(guilds[0].permissions, 2147483647);
        assert_eq!(guilds[0].features, vec!["COMMUNITY".to_string()]);
    }

    #[tokio::test]
    async fn forwards_upstream_error_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/@me/guilds")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"401: Unauthorized","code":0}"#)
            .create_async()
            .await;

        let http_client = reqwest::Client::new();
        let api_url = server.url();
        let result = UserGuildService::new(&http_client, &api_url)
            .fetch_user_guilds("expired")
            .await;

        let Err(AppError::UpstreamErr(err)) = result else {
            panic!("expected an upstream error");
        };
        assert_eq!(err.message, "Failed to fetch guilds");
        assert_eq!(err.details.unwrap()["message"], "401: Unauthorized");
    }
}
