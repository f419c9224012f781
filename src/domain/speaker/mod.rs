use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Extensions accepted as reference-speaker audio.
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "opus", "flac"];

/// Library of reference-speaker audio files rooted at a configured directory.
///
/// The library never mutates the files it serves; it only lists and resolves
/// them. Selectors are resolved first as a direct child of the root (which
/// also covers relative paths like `voices/anna.wav`), then by an exact
/// file-name search anywhere under the root.
pub struct SpeakerLibrary {
    root: PathBuf,
}

impl SpeakerLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every speaker file under the root, including subdirectories.
    /// Returns paths relative to the root, sorted for stable output.
    pub fn list(&self) -> Vec<String> {
        let mut speakers: Vec<String> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| has_audio_extension(entry.path()))
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(|rel| rel.to_string_lossy().into_owned())
            })
            .collect();
        speakers.sort();
        speakers
    }

    /// Resolve a speaker selector to a concrete file path.
    ///
    /// Tries `root/<selector>` first; falls back to a recursive search for a
    /// file with exactly that name. Returns `None` when nothing matches.
    /// Selectors may not leave the library root, so absolute paths and `..`
    /// components are refused outright.
    pub fn resolve(&self, selector: &str) -> Option<PathBuf> {
        if Path::new(selector)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }

        let direct = self.root.join(selector);
        if direct.is_file() {
            return Some(direct);
        }

        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| entry.file_name().to_string_lossy() == selector)
            .map(|entry| entry.into_path())
    }
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
