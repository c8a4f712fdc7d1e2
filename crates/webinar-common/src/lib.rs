//! Webinar-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across the webinar backend:
//!
//! - **Typed IDs**: Integer newtypes for users, chat messages, and webinars
//! - **Path Utilities**: Validation of client-supplied video names
//! - **Error Handling**: Common error type with HTTP status mapping
//!
//! # Examples
//!
//! ```
//! use webinar_common::{Error, Result, UserId};
//! use webinar_common::paths::validate_video_name;
//!
//! let id = UserId::from(7);
//! assert_eq!(id.get(), 7);
//!
//! assert!(validate_video_name("video1.mp4").is_ok());
//! assert!(validate_video_name("../secret").is_err());
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("Video not found"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod paths;

pub use error::{Error, Result};
pub use ids::*;
