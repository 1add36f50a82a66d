//! Variant media gallery ordering.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const EMPTY_MEDIA_MESSAGE: &str = "Select a specific variant media from product media";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMedia {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
    /// Raw oEmbed JSON for external media.
    #[serde(default)]
    pub oembed_data: Option<String>,
}

impl ProductMedia {
    /// oEmbed `thumbnail_url` when present and non-empty, else the media url.
    #[must_use]
    pub fn thumbnail_src(&self) -> String {
        self.oembed_data
            .as_deref()
            .and_then(|raw| oembed_thumbnail(raw, &self.id))
            .unwrap_or_else(|| self.url.clone())
    }
}

fn oembed_thumbnail(raw: &str, media_id: &str) -> Option<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value
            .get("thumbnail_url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Err(err) => {
            debug!(media = media_id, error = %err, "variants: unreadable oembed data");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaThumbnail {
    pub id: String,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MediaGallery {
    Loading,
    Empty { message: String },
    Items { items: Vec<MediaThumbnail> },
}

/// Gallery for a variant's media. `None` means the media has not loaded.
/// Items are ordered by `sort_order`, unordered media last, ties stable.
#[must_use]
pub fn media_gallery(media: Option<&[ProductMedia]>) -> MediaGallery {
    let Some(media) = media else {
        return MediaGallery::Loading;
    };
    if media.is_empty() {
        return MediaGallery::Empty { message: EMPTY_MEDIA_MESSAGE.to_string() };
    }

    let mut sorted: Vec<&ProductMedia> = media.iter().collect();
    sorted.sort_by_key(|m| (m.sort_order.is_none(), m.sort_order));

    let items = sorted
        .into_iter()
        .map(|m| MediaThumbnail {
            id: m.id.clone(),
            src: m.thumbnail_src(),
            alt: m.alt.clone(),
        })
        .collect();
    MediaGallery::Items { items }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
