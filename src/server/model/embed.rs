//! Embed domain model.
//!
//! The dashboard sends an [`EmbedDto`] where every field is optional. It is resolved
//! here into an [`EmbedMessage`]: empty fields dropped, color defaulted and the send
//! timestamp attached, ready to be turned into Serenity's `CreateEmbed`.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};

use crate::{
    model::embed::{EmbedColorDto, EmbedDto},
    server::error::{internal::InternalError, AppError},
};

/// Color used when the embed does not specify one (or specifies `0`).
pub const DEFAULT_EMBED_COLOR: u32 = 0x9b59b6;

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

/// A fully resolved embed, as it will be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedMessage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: u32,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<EmbedAuthor>,
    pub footer: Option<EmbedFooter>,
    pub timestamp: DateTime<Utc>,
}

impl EmbedMessage {
    /// Resolves a dashboard embed payload sent at `sent_at`.
    ///
    /// # Returns
    /// - `Ok(EmbedMessage)` - Resolved embed
    /// - `Err(AppError::BadRequest)` - Color is a string that is not a valid hex color
    pub fn from_dto(dto: EmbedDto, sent_at: DateTime<Utc>) -> Result<Self, AppError> {
        let color = match dto.color {
            Some(color) => parse_color(color)?,
            None => None,
        };

        let author = non_empty(dto.author.as_ref().and_then(|a| a.name.clone())).map(|name| {
            EmbedAuthor {
                name,
                icon_url: non_empty(dto.author.and_then(|a| a.icon_url)),
            }
        });

        let footer = non_empty(dto.footer.as_ref().and_then(|f| f.text.clone())).map(|text| {
            EmbedFooter {
                text,
                icon_url: non_empty(dto.footer.and_then(|f| f.icon_url)),
            }
        });

        Ok(Self {
            title: non_empty(dto.title),
            description: non_empty(dto.description),
            color: color.unwrap_or(DEFAULT_EMBED_COLOR),
            thumbnail_url: non_empty(dto.thumbnail.and_then(|t| t.url)),
            image_url: non_empty(dto.image.and_then(|i| i.url)),
            author,
            footer,
            timestamp: sent_at,
        })
    }

    /// Builds the Serenity embed builder for this message.
    ///
    /// # Returns
    /// - `Ok(CreateEmbed)` - Discord embed ready for posting
    /// - `Err(InternalError::InvalidDiscordTimestamp)` - Timestamp out of Discord's range
    pub fn to_create_embed(&self) -> Result<CreateEmbed, InternalError> {
        let timestamp = Timestamp::from_unix_timestamp(self.timestamp.timestamp()).map_err(
            |e| InternalError::InvalidDiscordTimestamp {
                timestamp: self.timestamp.timestamp(),
                reason: e.to_string(),
            },
        )?;

        let mut embed = CreateEmbed::new().color(self.color).timestamp(timestamp);

        if let Some(title) = &self.title {
            embed = embed.title(title);
        }
        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(url) = &self.thumbnail_url {
            embed = embed.thumbnail(url);
        }
        if let Some(url) = &self.image_url {
            embed = embed.image(url);
        }

        if let Some(author) = &self.author {
            let mut builder = CreateEmbedAuthor::new(&author.name);
            if let Some(icon_url) = &author.icon_url {
                builder = builder.icon_url(icon_url);
            }
            embed = embed.author(builder);
        }

        if let Some(footer) = &self.footer {
            let mut builder = CreateEmbedFooter::new(&footer.text);
            if let Some(icon_url) = &footer.icon_url {
                builder = builder.icon_url(icon_url);
            }
            embed = embed.footer(builder);
        }

        Ok(embed)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses an embed color; `0` and `""` count as unset.
fn parse_color(color: EmbedColorDto) -> Result<Option<u32>, AppError> {
    match color {
        EmbedColorDto::Number(0) => Ok(None),
        EmbedColorDto::Number(value) => Ok(Some(value)),
        EmbedColorDto::Hex(value) => {
            let hex = value.trim_start_matches('#');
            if hex.is_empty() {
                return Ok(None);
            }

            match u32::from_str_radix(hex, 16) {
                Ok(0) => Ok(None),
                Ok(parsed) if parsed <= 0xFFFFFF => Ok(Some(parsed)),
                _ => Err(AppError::BadRequest(format!(
                    "Invalid embed color '{}'",
                    value
                ))),
            }
        }
    }
}
