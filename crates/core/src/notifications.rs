//! Human-readable `content` for friend request rows.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const LONG_DATE: &str = "%A, %B %-d, %Y";
const LONG_TIME: &str = "%-I:%M:%S %p";
const GENERAL_DATE_TIME: &str = "%-m/%-d/%Y %-I:%M:%S %p";

pub fn request_sent<Tz>(sender_name: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} sent friend request at {}", sender_name, at.format(LONG_DATE))
}

pub fn request_declined<Tz>(decliner_name: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} declined your friend request at {} {}",
        decliner_name,
        at.format(LONG_DATE),
        at.format(LONG_TIME)
    )
}

pub fn request_accepted<Tz>(accepter_name: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} accepted friend request at {}",
        accepter_name,
        at.format(GENERAL_DATE_TIME)
    )
}
