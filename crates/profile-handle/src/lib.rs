//! Resolver for profile URLs and raw handles
//!
//! Turns free-form user input ("https://x.com/jack", "@jack", "jack") into a
//! validated profile handle. Accepts either a profile URL on a recognized
//! host or the bare handle itself; everything else is rejected.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Hosts recognized as profile pages. Exact match, no subdomain logic.
pub const PROFILE_HOSTS: [&str; 5] = [
    "x.com",
    "twitter.com",
    "www.twitter.com",
    "mobile.twitter.com",
    "www.x.com",
];

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,15}$").unwrap());

/// A validated profile handle: 1-15 characters, alphanumeric or underscore.
///
/// Only the resolver constructs these, so holding a `Handle` means the
/// pattern check has already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a handle was obtained from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInput {
    /// Extracted from the first path segment of a profile URL.
    FromUrl(Handle),
    /// Input was the handle itself, optionally prefixed with "@".
    FromRawHandle(Handle),
}

impl ResolvedInput {
    pub fn handle(&self) -> &Handle {
        match self {
            Self::FromUrl(h) | Self::FromRawHandle(h) => h,
        }
    }

    pub fn into_handle(self) -> Handle {
        match self {
            Self::FromUrl(h) | Self::FromRawHandle(h) => h,
        }
    }
}

/// Resolve free-form input to a profile handle.
///
/// Input that parses as a URL must point at one of [`PROFILE_HOSTS`]; the
/// handle is the first path segment. Input that is not a well-formed URL
/// falls back to raw-handle validation with one leading "@" stripped.
/// Returns `None` for anything that does not yield a valid handle.
///
/// Resolution is deterministic and idempotent: feeding a resolved handle
/// back in returns the same handle.
pub fn resolve(input: &str) -> Option<ResolvedInput> {
    let trimmed = input.trim();

    match Url::parse(trimmed) {
        Ok(parsed) => {
            let host = parsed.host_str()?;
            if !PROFILE_HOSTS.contains(&host) {
                return None;
            }
            let segment = parsed.path_segments()?.next().unwrap_or("");
            if !HANDLE_RE.is_match(segment) {
                return None;
            }
            Some(ResolvedInput::FromUrl(Handle(segment.to_string())))
        }
        Err(_) => {
            let candidate = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
            if !HANDLE_RE.is_match(candidate) {
                return None;
            }
            Some(ResolvedInput::FromRawHandle(Handle(candidate.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_profile_url() {
        let resolved = resolve("https://x.com/elonmusk").unwrap();
        assert_eq!(resolved.handle().as_str(), "elonmusk");
        assert!(matches!(resolved, ResolvedInput::FromUrl(_)));
    }

    #[test]
    fn test_resolve_url_with_extra_path() {
        let resolved = resolve("https://twitter.com/naval/status/123").unwrap();
        assert_eq!(resolved.handle().as_str(), "naval");
    }

    #[test]
    fn test_resolve_all_recognized_hosts() {
        for host in PROFILE_HOSTS {
            let input = format!("https://{}/jack", host);
            assert_eq!(resolve(&input).unwrap().handle().as_str(), "jack");
        }
    }

    #[test]
    fn test_resolve_unrecognized_host() {
        assert!(resolve("https://evil.com/x").is_none());
        assert!(resolve("https://x.com.evil.com/jack").is_none());
    }

    #[test]
    fn test_resolve_url_empty_path() {
        assert!(resolve("https://x.com").is_none());
        assert!(resolve("https://x.com/").is_none());
    }

    #[test]
    fn test_resolve_raw_handle() {
        let resolved = resolve("jack").unwrap();
        assert_eq!(resolved.handle().as_str(), "jack");
        assert!(matches!(resolved, ResolvedInput::FromRawHandle(_)));
    }

    #[test]
    fn test_resolve_at_prefix_and_whitespace() {
        assert_eq!(resolve("@jack").unwrap().handle().as_str(), "jack");
        assert_eq!(resolve("  @jack  ").unwrap().handle().as_str(), "jack");
    }

    #[test]
    fn test_resolve_rejects_non_handles() {
        assert!(resolve("not a url").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("@").is_none());
        assert!(resolve("name-with-dash").is_none());
        // 16 characters, one over the limit
        assert!(resolve("a234567890123456").is_none());
    }

    #[test]
    fn test_resolve_accepts_limit_length() {
        // Exactly 15 characters
        assert_eq!(
            resolve("a23456789012345").unwrap().handle().as_str(),
            "a23456789012345"
        );
    }

    #[test]
    fn test_resolve_non_http_scheme() {
        // Parses as a URL but has no recognized host
        assert!(resolve("mailto:jack@example.com").is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve("https://x.com/elonmusk").unwrap().into_handle();
        let second = resolve(first.as_str()).unwrap().into_handle();
        assert_eq!(first, second);
    }
}
