//! Path utilities for client-supplied video names.
//!
//! Video names arrive straight from the request path and are joined onto the
//! configured video directory. Rejecting parent references and separators
//! here is the only thing keeping a request inside that directory.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Content type served for every video.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Check that a video name is a single path component.
///
/// Rejects names containing `..`, `/`, or `\`.
///
/// # Examples
///
/// ```
/// use webinar_common::paths::validate_video_name;
///
/// assert!(validate_video_name("video1.mp4").is_ok());
/// assert!(validate_video_name("../etc/passwd").is_err());
/// assert!(validate_video_name("clips/intro.mp4").is_err());
/// ```
pub fn validate_video_name(name: &str) -> Result<()> {
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidName);
    }
    Ok(())
}

/// Join a validated video name onto the video directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use webinar_common::paths::video_path;
///
/// let path = video_path(Path::new("/srv/videos"), "video1.mp4").unwrap();
/// assert_eq!(path, Path::new("/srv/videos/video1.mp4"));
/// ```
pub fn video_path(root: &Path, name: &str) -> Result<PathBuf> {
    validate_video_name(name)?;
    Ok(root.join(name))
}
