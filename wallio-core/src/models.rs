//! Wire types shared between the REST client and the views.
//!
//! These mirror the backend's JSON shapes one-to-one. The client never
//! mutates them; the only derived piece of state is the `is_favorite` flag
//! carried by [`PreviewInfo`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roles::UserRole;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallpaper {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub image_thumb_url: Option<String>,
    #[serde(default)]
    pub image_medium_url: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wallpaper {
    /// Smallest available rendition, for grid thumbnails.
    pub fn thumb_url(&self) -> &str {
        self.image_thumb_url
            .as_deref()
            .or(self.image_medium_url.as_deref())
            .unwrap_or(&self.image_url)
    }
}

/// One page of a wallpaper listing plus the backend-reported total.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WallpaperPage {
    pub wallpapers: Vec<Wallpaper>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Full preview info for a single wallpaper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PreviewInfo {
    pub wallpaper: Wallpaper,
    pub is_favorite: bool,
}

impl PreviewInfo {
    /// Fallback preview when the info fetch fails: reuse the summary we
    /// already hold and assume non-favorite.
    pub fn assumed(wallpaper: Wallpaper) -> Self {
        Self {
            wallpaper,
            is_favorite: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    pub auth_type: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateWallpaperRequest {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_medium_url: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorsResponse {
    pub generators: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub generator_type: String,
}

/// Response shape shared by the generate submit and the status poll.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub url_path: Option<String>,
    #[serde(default)]
    pub url_path_thumb: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend business errors arrive as `{"error": "..."}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
