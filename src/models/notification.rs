use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Kind of notification; determines the icon and the message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Comment,
    Share,
    React,
    Mention,
    Follow,
    Like,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Comment => "comment",
            NotificationKind::Share => "share",
            NotificationKind::React => "react",
            NotificationKind::Mention => "mention",
            NotificationKind::Follow => "follow",
            NotificationKind::Like => "like",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for NotificationKind {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "comment" => NotificationKind::Comment,
            "share" => NotificationKind::Share,
            "react" => NotificationKind::React,
            "mention" => NotificationKind::Mention,
            "follow" => NotificationKind::Follow,
            "like" => NotificationKind::Like,
            _ => NotificationKind::Comment, // Default fallback
        }
    }
}

/// Reaction carried by react-type notifications. The wire format sends three
/// independent booleans; the domain model keeps exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
    Thunder,
}

impl ReactionKind {
    pub fn verb(&self) -> &'static str {
        match self {
            ReactionKind::Like => "liked",
            ReactionKind::Dislike => "disliked",
            ReactionKind::Thunder => "thundered",
        }
    }
}

/// Denormalized sender snapshot taken at notification creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderSummary {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
}

/// Partial reference to the post a notification concerns. Absence means the
/// notification has no navigable target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub post_type: Option<String>,
}

/// A single notification as held by the surfaces. `is_read` is the only
/// field the client mutates, and only ever from false to true, through the
/// reducers in `services::read_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub sender: SenderSummary,
    pub kind: NotificationKind,
    pub message: String,
    pub is_read: bool,
    pub post: Option<PostRef>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub reaction: Option<ReactionKind>,
}

impl Notification {
    /// Render the type-specific message template. The server-provided
    /// `message` text is the fallback when no template applies.
    pub fn summary(&self) -> String {
        let who = &self.sender.username;
        match self.kind {
            NotificationKind::Comment => format!("{} commented on your post", who),
            NotificationKind::Share => format!("{} shared your post", who),
            NotificationKind::Mention => format!("{} mentioned you", who),
            NotificationKind::Follow => format!("{} started following you", who),
            NotificationKind::Like => format!("{} liked your post", who),
            NotificationKind::React => match self.reaction {
                Some(reaction) => format!("{} {} your post", who, reaction.verb()),
                None => self.message.clone(),
            },
        }
    }

    /// Coarse relative timestamp rendered next to each entry.
    pub fn relative_age(&self, now: OffsetDateTime) -> String {
        let elapsed = now - self.created_at;
        if elapsed < Duration::minutes(1) {
            "just now".to_string()
        } else if elapsed < Duration::hours(1) {
            format!("{}m", elapsed.whole_minutes())
        } else if elapsed < Duration::days(1) {
            format!("{}h", elapsed.whole_hours())
        } else {
            format!("{}d", elapsed.whole_days())
        }
    }
}

/// Paginated list as returned by `GET /notifications/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Notification>,
}
