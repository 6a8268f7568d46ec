/*!
 * # subshelf - subtitle and asset helpers for a media library backend
 *
 * Pure helpers the web backend of a media library uses when it names,
 * finds and presents subtitle files and user assets.
 *
 * ## Features
 *
 * - Display names for 2- and 3-letter subtitle language codes
 * - Language code normalization for subtitle file names
 * - The `name[.code].srt` file name grammar, both directions
 * - Discovery of the subtitle files sitting next to a video
 * - CDN URLs for avatars, banners and subtitles
 * - JSON response envelopes for the HTTP API
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `language_utils`: Language table, display names, normalization
 * - `file_utils`: Subtitle file names and on-disk discovery
 * - `cdn`: CDN URL construction
 * - `api_response`: Response envelopes and DTOs
 * - `app_config`: Configuration management
 * - `logging`: `log` backend for embedding binaries
 * - `errors`: Custom error types
 *
 * English is the default subtitle language: it has no code in file
 * names and normalizes to `None`.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod api_response;
pub mod app_config;
pub mod cdn;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod logging;

// Re-export main types for easier usage
pub use api_response::{ApiResponse, SubtitleTrack};
pub use app_config::Config;
pub use cdn::CdnUrlBuilder;
pub use errors::{ApiError, AppError, ConfigError};
pub use file_utils::{build_subtitle_file_name, parse_language_from_filename};
pub use language_utils::{get_language_name, language_codes_match, normalize_language_code};
