//! Identifier types for the Slack API.
//!
//! Thin string newtypes so that a channel id cannot be passed where a user id
//! is expected. All of them serialize as the bare string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Channel, group or IM id (`C…`, `G…`, `D…`)
    ChannelId
);
string_id!(
    /// User id (`U…`, `W…`)
    UserId
);
string_id!(
    /// Team id (`T…`)
    TeamId
);
string_id!(
    /// File id (`F…`)
    FileId
);
string_id!(
    /// User group id (`S…`)
    UsergroupId
);
string_id!(
    /// Reminder id (`Rm…`)
    ReminderId
);
string_id!(
    /// Message timestamp, which doubles as the message id within a channel
    Timestamp
);

impl ChannelId {
    /// Public channel (starts with C)
    pub fn is_public_channel(&self) -> bool {
        self.0.starts_with('C')
    }

    /// Private channel or multi-party IM (starts with G)
    pub fn is_group(&self) -> bool {
        self.0.starts_with('G')
    }

    /// Direct message (starts with D)
    pub fn is_im(&self) -> bool {
        self.0.starts_with('D')
    }
}

impl Timestamp {
    /// Seconds part of the timestamp as a UTC date
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.0.split('.').next()?.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}
