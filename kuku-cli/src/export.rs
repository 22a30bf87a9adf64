//! The "download" step: copy the generated audio under a user-facing name.

use std::path::{Path, PathBuf};

use tracing::info;

/// Where `--download` writes when given a name or directory.
///
/// A directory target, existing or spelled with a trailing separator, keeps
/// `default_name` inside it.
#[must_use]
pub fn resolve_target(target: &Path, default_name: &str) -> PathBuf {
    if target.is_dir() || ends_with_separator(target) {
        target.join(default_name)
    } else {
        target.to_path_buf()
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

/// Copy `audio` to `target`, overwriting any existing file.
///
/// A target that already is `audio` is left untouched.
pub async fn export_audio(audio: &Path, target: &Path) -> std::io::Result<PathBuf> {
    if target.exists()
        && tokio::fs::canonicalize(target).await? == tokio::fs::canonicalize(audio).await?
    {
        info!(path = %target.display(), "audio already at download target");
        return Ok(target.to_path_buf());
    }

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = tokio::fs::copy(audio, target).await?;
    info!(from = %audio.display(), to = %target.display(), bytes, "exported audio");

    Ok(target.to_path_buf())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn directory_target_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_target(dir.path(), "kuku_ai_voice.mp3"),
            dir.path().join("kuku_ai_voice.mp3")
        );

        let file = dir.path().join("mine.mp3");
        assert_eq!(resolve_target(&file, "kuku_ai_voice.mp3"), file);
    }

    #[tokio::test]
    async fn new_directory_with_trailing_separator() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("ai_audio.mp3");
        tokio::fs::write(&audio, b"voice").await.unwrap();

        let spelled = format!(
            "{}{}",
            dir.path().join("notes").display(),
            std::path::MAIN_SEPARATOR
        );
        let target = resolve_target(Path::new(&spelled), "kuku_ai_voice.mp3");
        assert!(target.ends_with("kuku_ai_voice.mp3"));

        let written = export_audio(&audio, &target).await.unwrap();
        assert_eq!(
            std::fs::read(dir.path().join("notes").join("kuku_ai_voice.mp3")).unwrap(),
            b"voice"
        );
        assert_eq!(written, target);
    }

    #[tokio::test]
    async fn exporting_onto_the_source_keeps_its_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("ai_audio.mp3");
        tokio::fs::write(&audio, b"\x00\x01audio-bytes").await.unwrap();

        let target = resolve_target(&audio, "kuku_ai_voice.mp3");
        let written = export_audio(&audio, &target).await.unwrap();
        assert_eq!(written, audio);
        assert_eq!(std::fs::read(&audio).unwrap(), b"\x00\x01audio-bytes");

        // Same file reached through a different spelling.
        let dotted = dir.path().join(".").join("ai_audio.mp3");
        export_audio(&audio, &dotted).await.unwrap();
        assert_eq!(std::fs::read(&audio).unwrap(), b"\x00\x01audio-bytes");
    }

    #[tokio::test]
    async fn copies_bytes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("ai_audio.mp3");
        let target = dir.path().join("downloads").join("kuku_ai_voice.mp3");

        tokio::fs::write(&audio, b"first").await.unwrap();
        export_audio(&audio, &target).await.unwrap();
        tokio::fs::write(&audio, b"second").await.unwrap();
        let written = export_audio(&audio, &target).await.unwrap();

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"second");
    }
}
