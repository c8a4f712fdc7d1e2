//! Typed ID wrappers for type safety across the webinar backend.
//!
//! Rows use SQLite integer primary keys, so each ID wraps an `i64` and
//! serializes as a plain JSON number.

use serde::{Deserialize, Serialize};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Raw integer value as stored in the database.
            #[must_use]
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Identifier for a registered attendee.
    UserId
);

integer_id!(
    /// Identifier for a chat message.
    ChatMessageId
);

integer_id!(
    /// Identifier for a webinar.
    WebinarId
);
