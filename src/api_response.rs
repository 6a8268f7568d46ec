/*!
 * Response shapes for the HTTP API.
 *
 * The HTTP layer owns routing; this module only shapes what it sends:
 * the `{"status": ..., "data": ...}` envelope, pagination and the
 * language and subtitle DTOs built from the language helpers.
 */

use serde::{Deserialize, Serialize};

use crate::cdn::{AssetKind, CdnUrlBuilder};
use crate::errors::ApiError;
use crate::file_utils::{SubtitleFile, parse_language_from_filename};
use crate::language_utils::{
    DEFAULT_LANGUAGE, Language, find_language, get_language_name, supported_languages,
};

/// Status string of a successful response
pub const STATUS_SUCCESS: &str = "success";

/// Status string of a failed response
pub const STATUS_ERROR: &str = "error";

/// Envelope around every API payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Error envelope paired with the HTTP status the caller should send
    pub fn from_error(error: &ApiError) -> (u16, Self) {
        (error.status_code(), Self::error(error.to_string()))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Serialize the envelope to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Wrap a page of items; a `per_page` of 0 is treated as 1
    pub fn new(items: Vec<T>, total: u64, page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        Self {
            items,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(u64::from(per_page)),
        }
    }

    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }
}

/// Entry of the language picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// Code used in subtitle file names, `None` for the default language
    pub code: Option<String>,
    /// 2-letter code
    pub code2: String,
    /// Display name
    pub name: String,
}

/// Every supported language, English first
pub fn language_options() -> Vec<LanguageOption> {
    supported_languages()
        .iter()
        .map(|lang| LanguageOption {
            code: (!lang.is_default()).then(|| lang.code3.to_string()),
            code2: lang.code2.to_string(),
            name: lang.name.to_string(),
        })
        .collect()
}

/// A subtitle file as presented to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleTrack {
    pub file_name: String,
    pub language_code: Option<String>,
    pub language_name: String,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SubtitleTrack {
    /// Describe a subtitle from its file name alone
    pub fn from_file_name(file_name: &str) -> Self {
        Self::with_language(file_name.to_string(), parse_language_from_filename(file_name))
    }

    /// Describe a subtitle found on disk, keeping the language resolved
    /// against the video's name
    pub fn from_subtitle_file(file: &SubtitleFile) -> Self {
        Self::with_language(file.file_name(), file.language.clone())
    }

    // The code is kept as written in the file name; `Movie.eng.srt` is
    // still the default track
    fn with_language(file_name: String, language_code: Option<String>) -> Self {
        let language_name = match &language_code {
            Some(code) => get_language_name(code),
            None => DEFAULT_LANGUAGE.name.to_string(),
        };
        let is_default = language_code
            .as_deref()
            .is_none_or(|code| find_language(code).is_some_and(Language::is_default));

        Self {
            file_name,
            is_default,
            language_code,
            language_name,
            url: None,
        }
    }

    /// Attach the CDN URL of the file
    pub fn with_url(mut self, cdn: &CdnUrlBuilder) -> Self {
        self.url = Some(cdn.asset_url(AssetKind::Subtitle, &self.file_name));
        self
    }
}
