// SPDX-License-Identifier: MPL-2.0
//! Background clip selection and the frame feed that plays it.

pub mod feed;

use rand::Rng;
use std::path::{Path, PathBuf};

/// File extensions accepted as background clips.
const CLIP_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mkv", "mov"];

/// Lists the clips in `dir`, sorted by file name.
///
/// A missing or unreadable directory yields an empty list; the scene then
/// renders over the plain backdrop.
pub fn discover_clips(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut clips: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    CLIP_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                })
                .unwrap_or(false)
        })
        .collect();
    clips.sort();
    clips
}

/// Picks one clip at random.
///
/// Called exactly once at startup; the choice is stored on the application
/// state and never recomputed, so the same window always shows the same clip.
pub fn pick_clip<R: Rng>(clips: &[PathBuf], rng: &mut R) -> Option<PathBuf> {
    if clips.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..clips.len());
    Some(clips[index].clone())
}
