use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: Subtitle file naming and discovery

/// Extension every subtitle file is written with
pub const SUBTITLE_EXTENSION: &str = "srt";

// @builds: `<base>.srt` or `<base>.<code>.srt` from a video file name
pub fn build_subtitle_file_name(video_file_name: &str, language_code: Option<&str>) -> String {
    let base_name = match video_file_name.rfind('.') {
        Some(index) => &video_file_name[..index],
        None => video_file_name,
    };

    match language_code {
        Some(code) if !code.is_empty() => {
            format!("{}.{}.{}", base_name, code, SUBTITLE_EXTENSION)
        }
        _ => format!("{}.{}", base_name, SUBTITLE_EXTENSION),
    }
}

// @parses: Language code segment of a subtitle file name, lowercased
// @returns: None for the default language or a malformed name
pub fn parse_language_from_filename(filename: &str) -> Option<String> {
    let parts: Vec<&str> = filename.split('.').collect();
    if parts.len() < 3 {
        return None;
    }

    let candidate = parts[parts.len() - 2];
    match candidate.chars().count() {
        2 | 3 => Some(candidate.to_lowercase()),
        _ => None,
    }
}

/// A subtitle file found next to a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleFile {
    /// Full path to the subtitle
    pub path: PathBuf,
    /// Lowercased language code, `None` for the default language
    pub language: Option<String>,
}

impl SubtitleFile {
    /// File name component of the path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

// @generates: Sibling subtitle path for a video
pub fn subtitle_path_for_video<P: AsRef<Path>>(video_path: P, language_code: Option<&str>) -> PathBuf {
    let video_path = video_path.as_ref();
    let file_name = video_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let subtitle_name = build_subtitle_file_name(&file_name, language_code);
    match video_path.parent() {
        Some(parent) => parent.join(subtitle_name),
        None => PathBuf::from(subtitle_name),
    }
}

/// Find the subtitle files belonging to a video
///
/// Only the video's own directory is scanned. A file belongs to the video
/// when it is named `<stem>.srt` or `<stem>.<code>.srt` with a 2 or 3
/// character code; the extension is matched case-insensitively.
pub fn find_subtitles_for_video<P: AsRef<Path>>(video_path: P) -> Result<Vec<SubtitleFile>> {
    let video_path = video_path.as_ref();
    let stem = video_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .with_context(|| format!("Video path has no file name: {:?}", video_path))?;

    let dir = match video_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut result = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // Only an unreadable directory fails the listing; broken links
            // and other bad entries are skipped
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| format!("Failed to read directory {:?}", dir));
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Some(language) = subtitle_language_for_stem(&stem, &file_name) {
            result.push(SubtitleFile {
                path: entry.path().to_path_buf(),
                language,
            });
        }
    }

    result.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Found {} subtitle files for {:?}", result.len(), video_path);
    Ok(result)
}

// Some(None) for `<stem>.srt`, Some(Some(code)) for `<stem>.<code>.srt`
fn subtitle_language_for_stem(stem: &str, file_name: &str) -> Option<Option<String>> {
    let rest = file_name.strip_prefix(stem)?.strip_prefix('.')?;

    let (middle, extension) = match rest.rsplit_once('.') {
        Some((middle, extension)) => (Some(middle), extension),
        None => (None, rest),
    };
    if !extension.eq_ignore_ascii_case(SUBTITLE_EXTENSION) {
        return None;
    }

    match middle {
        None => Some(None),
        Some(code) if matches!(code.chars().count(), 2 | 3) && !code.contains('.') => {
            Some(Some(code.to_lowercase()))
        }
        Some(other) => {
            warn!("Skipping subtitle '{}' with unrecognized suffix '{}'", file_name, other);
            None
        }
    }
}
