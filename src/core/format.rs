use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").unwrap());

/// Flat-duration buckets, largest first. A month is 30 days and a year is
/// 365 days; no calendar arithmetic.
const INTERVALS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// `fetch-quest_tracker` -> `Fetch Quest Tracker`.
pub fn humanize_repo_name(name: &str) -> String {
    let spaced = SEPARATORS.replace_all(name, " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Relative age of `timestamp` as seen from `now`, e.g. `3 days ago`.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();

    for (label, interval) in INTERVALS {
        let count = seconds / interval;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{} {}{} ago", count, label, plural);
        }
    }
    "just now".to_string()
}
