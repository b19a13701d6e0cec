//! Version parsing and range checks
//!
//! Healthchecks compare tool versions against supported ranges with a small
//! semver subset: `^`, `~`, `>=`, `>`, `<=`, `<`, exact, `*`.

use std::cmp::Ordering;
use std::fmt;

/// Parsed version number.
///
/// Parsing is lenient: missing minor/patch components default to zero and
/// prerelease suffixes are ignored, so `"17"` and `"17.0.0-ea"` both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Parse a version string.
    pub fn parse(version: &str) -> Option<Self> {
        let mut parts = version.trim().split('.');

        let major = parse_component(parts.next()?)?;
        let minor = parts.next().map(parse_component).unwrap_or(Some(0))?;
        let patch = parts.next().map(parse_component).unwrap_or(Some(0))?;

        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

fn parse_component(part: &str) -> Option<u32> {
    // "2-beta.1" counts as 2
    part.split('-').next()?.parse().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => match self.minor.cmp(&other.minor) {
                Ordering::Equal => self.patch.cmp(&other.patch),
                ord => ord,
            },
            ord => ord,
        }
    }
}

/// Version range checker.
pub struct VersionChecker;

impl VersionChecker {
    /// Check whether a version satisfies a range.
    /// Supports: ^1.0.0, ~1.0.0, >=1.0.0, >1.0.0, <=1.0.0, <1.0.0, 1.0.0, *
    pub fn satisfies(version: &str, range: &str) -> bool {
        let range = range.trim();
        if range == "*" || range == "latest" {
            return true;
        }

        let v = match Version::parse(version) {
            Some(v) => v,
            None => return false,
        };

        // ^1.0.0 - same major, at least this version
        if let Some(range_ver) = range.strip_prefix('^') {
            if let Some(r) = Version::parse(range_ver) {
                return v.major == r.major && v >= r;
            }
            return false;
        }

        // ~1.0.0 - same major and minor, at least this patch
        if let Some(range_ver) = range.strip_prefix('~') {
            if let Some(r) = Version::parse(range_ver) {
                return v.major == r.major && v.minor == r.minor && v.patch >= r.patch;
            }
            return false;
        }

        // >=1.0.0
        if let Some(range_ver) = range.strip_prefix(">=") {
            if let Some(r) = Version::parse(range_ver) {
                return v >= r;
            }
            return false;
        }

        // >1.0.0
        if let Some(range_ver) = range.strip_prefix('>') {
            if let Some(r) = Version::parse(range_ver) {
                return v > r;
            }
            return false;
        }

        // <=1.0.0
        if let Some(range_ver) = range.strip_prefix("<=") {
            if let Some(r) = Version::parse(range_ver) {
                return v <= r;
            }
            return false;
        }

        // <1.0.0
        if let Some(range_ver) = range.strip_prefix('<') {
            if let Some(r) = Version::parse(range_ver) {
                return v < r;
            }
            return false;
        }

        // exact match
        match Version::parse(range) {
            Some(r) => v == r,
            None => version == range,
        }
    }
}

/// Pull the first version-looking token out of arbitrary command output.
///
/// `extract("openjdk version \"17.0.2\" 2022-01-18")` yields `"17.0.2"`.
/// Dotted tokens win; when none exist, the first bare number stands in,
/// so a GA banner like `openjdk version "21"` still yields `"21"`.
pub fn extract(text: &str) -> Option<String> {
    let mut bare: Option<&str> = None;
    for token in text.split(|c: char| !c.is_ascii_digit() && c != '.') {
        let token = token.trim_matches('.');
        if token.is_empty() {
            continue;
        }
        if !token.contains('.') {
            if bare.is_none() {
                bare = Some(token);
            }
            continue;
        }
        if token.split('.').all(|part| part.chars().all(|c| c.is_ascii_digit()) && !part.is_empty())
        {
            return Some(token.to_string());
        }
    }
    bare.map(str::to_string)
}
