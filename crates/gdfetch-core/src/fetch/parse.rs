//! Response status-line parsing.

use std::fmt;
use std::str;

/// Code and reason phrase from an `HTTP/x.y <code> <reason>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u32,
    pub reason: String,
}

impl StatusLine {
    /// Only the canonical `200` counts as success; other 2xx codes do not.
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.reason)
        }
    }
}

/// Parses one raw header line as delivered by libcurl.
///
/// Returns `None` for ordinary `Name: value` headers and the blank separator line.
/// HTTP/2 status lines carry no reason phrase, so `reason` may be empty.
pub fn parse_status_line(data: &[u8]) -> Option<StatusLine> {
    let line = str::from_utf8(data).ok()?.trim_end();
    let rest = line.strip_prefix("HTTP/")?;
    let mut parts = rest.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.parse::<u32>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some(StatusLine { code, reason })
}
