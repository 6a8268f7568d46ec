/*!
 * CDN URL construction for user and subtitle assets.
 *
 * Avatars, banners and subtitle files are served from a CDN under a
 * per-kind path prefix: `<base>/<prefix>/<file>`.
 */

use log::debug;
use url::Url;

use crate::app_config::{CdnConfig, validate_cdn_base_url};
use crate::errors::ConfigError;
use crate::file_utils::build_subtitle_file_name;
use crate::language_utils::normalize_language_code;

/// Kinds of asset served from the CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Avatar,
    Banner,
    Subtitle,
}

/// Builds CDN URLs from a validated base URL
#[derive(Debug, Clone)]
pub struct CdnUrlBuilder {
    base: Url,
    avatar_path: String,
    banner_path: String,
    subtitle_path: String,
}

impl CdnUrlBuilder {
    /// Builder with the default path prefixes
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::from_config(&CdnConfig {
            base_url: base_url.to_string(),
            ..CdnConfig::default()
        })
    }

    /// Builder from the CDN section of the configuration
    pub fn from_config(config: &CdnConfig) -> Result<Self, ConfigError> {
        let base = validate_cdn_base_url(&config.base_url)?;
        Ok(Self {
            base,
            avatar_path: config.avatar_path.clone(),
            banner_path: config.banner_path.clone(),
            subtitle_path: config.subtitle_path.clone(),
        })
    }

    /// Path prefix configured for an asset kind
    pub fn prefix(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Avatar => &self.avatar_path,
            AssetKind::Banner => &self.banner_path,
            AssetKind::Subtitle => &self.subtitle_path,
        }
    }

    /// URL of a user's avatar, `None` when the user has none
    pub fn avatar_url(&self, file_name: Option<&str>) -> Option<String> {
        self.optional_asset_url(AssetKind::Avatar, file_name)
    }

    /// URL of a user's banner, `None` when the user has none
    pub fn banner_url(&self, file_name: Option<&str>) -> Option<String> {
        self.optional_asset_url(AssetKind::Banner, file_name)
    }

    /// URL of the subtitle file for a video in the given language
    ///
    /// The code goes through the same normalization used when the file
    /// was written, so `en`, `eng` and `None` all point at `<name>.srt`.
    pub fn subtitle_url(&self, video_file_name: &str, language_code: Option<&str>) -> String {
        let code = language_code.and_then(normalize_language_code);
        let file_name = build_subtitle_file_name(video_file_name, code.as_deref());
        self.asset_url(AssetKind::Subtitle, &file_name)
    }

    /// URL of any file under an asset kind's prefix
    ///
    /// The file name is percent-encoded as a single path segment.
    pub fn asset_url(&self, kind: AssetKind, file_name: &str) -> String {
        let mut url = self.base.clone();
        // The base is checked by `validate_cdn_base_url`, so it can hold segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(self.prefix(kind).split('/').filter(|s| !s.is_empty()))
                .push(file_name);
        }
        url.to_string()
    }

    fn optional_asset_url(&self, kind: AssetKind, file_name: Option<&str>) -> Option<String> {
        let file_name = file_name.map(str::trim).filter(|name| !name.is_empty())?;

        if is_absolute_http_url(file_name) {
            debug!("Asset '{}' is already an absolute URL", file_name);
            return Some(file_name.to_string());
        }

        Some(self.asset_url(kind, file_name))
    }
}

// Users may carry an externally hosted avatar (e.g. from an OAuth provider)
fn is_absolute_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
