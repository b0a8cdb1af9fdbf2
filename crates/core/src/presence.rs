use chrono::{DateTime, FixedOffset, Utc};
use std::fmt;

/// Coarse "last seen" bucket shown next to a user in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastSeen {
    Online,
    JustNow,
    MinutesAgo(i64),
    HoursAgo(i64),
    DaysAgo(i64),
    LongAgo,
}

impl LastSeen {
    /// A user that is offline but has no recorded disconnect is treated as
    /// not seen for a long time.
    pub fn compute(
        is_online: bool,
        disconnected_at: Option<DateTime<FixedOffset>>,
        now: DateTime<Utc>,
    ) -> Self {
        if is_online {
            return LastSeen::Online;
        }
        let Some(disconnected_at) = disconnected_at else {
            return LastSeen::LongAgo;
        };

        let elapsed = now.signed_duration_since(disconnected_at);
        if elapsed.num_minutes() < 1 {
            LastSeen::JustNow
        } else if elapsed.num_minutes() < 60 {
            LastSeen::MinutesAgo(elapsed.num_minutes())
        } else if elapsed.num_hours() < 24 {
            LastSeen::HoursAgo(elapsed.num_hours())
        } else if elapsed.num_days() < 30 {
            LastSeen::DaysAgo(elapsed.num_days())
        } else {
            LastSeen::LongAgo
        }
    }
}

impl fmt::Display for LastSeen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastSeen::Online => write!(f, "Online"),
            LastSeen::JustNow => write!(f, "Just now"),
            LastSeen::MinutesAgo(n) => write!(f, "{} minutes ago", n),
            LastSeen::HoursAgo(n) => write!(f, "{} hours ago", n),
            LastSeen::DaysAgo(n) => write!(f, "{} days ago", n),
            LastSeen::LongAgo => write!(f, "Long time ago"),
        }
    }
}

pub fn connected_info(user_name: &str) -> String {
    format!("{} is online", user_name)
}

pub fn disconnected_info(user_name: &str) -> String {
    format!("{} is offline", user_name)
}
