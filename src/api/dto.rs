use serde::Deserialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::models::{
    Notification, NotificationKind, NotificationPage, PostRef, ReactionKind, SenderSummary,
};

// Wire DTOs for the backend's camelCase JSON. Conversion into the domain
// model happens once, at the gateway boundary.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderDto {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRefDto {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "type")]
    pub post_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub sender: SenderDto,
    pub notification_type: String,
    #[serde(default)]
    pub message: String,
    pub is_read: bool,
    #[serde(default)]
    pub post: Option<PostRefDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub disliked: Option<bool>,
    #[serde(default)]
    pub thundered: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationPageDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NotificationDto>,
}

impl NotificationDto {
    /// Collapse the three wire booleans into one reaction kind. They are
    /// intended to be mutually exclusive but the backend does not enforce
    /// it; the first set flag wins, in like > dislike > thunder order.
    fn reaction(&self) -> Option<ReactionKind> {
        let flags = [
            (self.liked, ReactionKind::Like),
            (self.disliked, ReactionKind::Dislike),
            (self.thundered, ReactionKind::Thunder),
        ];
        let mut set = flags.into_iter().filter(|(flag, _)| flag.unwrap_or(false));
        let first = set.next().map(|(_, kind)| kind);
        if set.next().is_some() {
            warn!(
                id = %self.id,
                "notification carries multiple reaction flags; keeping the first"
            );
        }
        first
    }
}

impl From<SenderDto> for SenderSummary {
    fn from(dto: SenderDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            profile_image: dto.profile_image,
        }
    }
}

impl From<PostRefDto> for PostRef {
    fn from(dto: PostRefDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
            post_type: dto.post_type,
        }
    }
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        let reaction = dto.reaction();
        Self {
            id: dto.id,
            sender: dto.sender.into(),
            kind: NotificationKind::from(dto.notification_type),
            message: dto.message,
            is_read: dto.is_read,
            post: dto.post.map(PostRef::from),
            created_at: dto.created_at,
            reaction,
        }
    }
}

impl From<NotificationPageDto> for NotificationPage {
    fn from(dto: NotificationPageDto) -> Self {
        Self {
            count: dto.count,
            next: dto.next,
            previous: dto.previous,
            results: dto.results.into_iter().map(Notification::from).collect(),
        }
    }
}
