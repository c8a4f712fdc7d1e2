//! Video lookup shared by the live and seekable entry points.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use webinar_common::paths::video_path;
use webinar_common::{Error, Result};

/// Read-only directory of video files.
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    root: PathBuf,
    default_video: String,
}

/// A video resolved inside the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl VideoLibrary {
    pub fn new(root: impl Into<PathBuf>, default_video: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_video: default_video.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a client-supplied name to a file in the library.
    ///
    /// `None` or an empty name selects the default video. The name is
    /// validated before the filesystem is touched.
    pub async fn resolve(&self, name: Option<&str>) -> Result<VideoFile> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => self.default_video.as_str(),
        };

        let path = video_path(&self.root, name)?;

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::not_found("Video not found"));
            }
            Err(e) => return Err(Error::StatFailure(e)),
        };

        if !metadata.is_file() {
            return Err(Error::not_found("Video not found"));
        }

        Ok(VideoFile {
            name: name.to_string(),
            path,
            size: metadata.len(),
        })
    }
}

impl VideoFile {
    /// Open the file for reading. The handle is released when dropped.
    pub async fn open(&self) -> Result<File> {
        File::open(&self.path).await.map_err(Error::OpenFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library_with(files: &[(&str, usize)]) -> (tempfile::TempDir, VideoLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for (name, size) in files {
            std::fs::write(dir.path().join(name), vec![7u8; *size]).unwrap();
        }
        let library = VideoLibrary::new(dir.path(), "video1.mp4");
        (dir, library)
    }

    #[tokio::test]
    async fn test_resolve_named_video() {
        let (dir, library) = library_with(&[("video2.mp4", 300)]);
        let video = library.resolve(Some("video2.mp4")).await.unwrap();
        assert_eq!(video.name, "video2.mp4");
        assert_eq!(video.path, dir.path().join("video2.mp4"));
        assert_eq!(video.size, 300);
    }

    #[tokio::test]
    async fn test_resolve_defaults_when_missing_or_empty() {
        let (_dir, library) = library_with(&[("video1.mp4", 10)]);
        assert_eq!(library.resolve(None).await.unwrap().name, "video1.mp4");
        assert_eq!(library.resolve(Some("")).await.unwrap().name, "video1.mp4");
    }

    #[tokio::test]
    async fn test_resolve_rejects_traversal() {
        let (_dir, library) = library_with(&[("video1.mp4", 10)]);

        for name in ["../video1.mp4", "..", "a/b.mp4", "/etc/passwd", "..\\x"] {
            assert!(matches!(
                library.resolve(Some(name)).await,
                Err(Error::InvalidName)
            ));
        }
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let (_dir, library) = library_with(&[]);
        let err = library.resolve(Some("missing.mp4")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "Video not found");
    }

    #[tokio::test]
    async fn test_resolve_directory_is_not_a_video() {
        let (dir, library) = library_with(&[]);
        std::fs::create_dir(dir.path().join("folder.mp4")).unwrap();
        assert!(matches!(
            library.resolve(Some("folder.mp4")).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_open_resolved_file() {
        use tokio::io::AsyncReadExt;

        let (_dir, library) = library_with(&[("video1.mp4", 4)]);
        let video = library.resolve(None).await.unwrap();
        let mut file = video.open().await.unwrap();
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, vec![7u8; 4]);
    }

    #[tokio::test]
    async fn test_open_after_removal_fails() {
        let (dir, library) = library_with(&[("video1.mp4", 4)]);
        let video = library.resolve(None).await.unwrap();
        std::fs::remove_file(dir.path().join("video1.mp4")).unwrap();
        assert!(matches!(video.open().await, Err(Error::OpenFailure(_))));
    }
}
