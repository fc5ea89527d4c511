use std::sync::LazyLock;

use regex::Regex;

/// `6.3.3` or `6.3.3-c842`, nothing before or after.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-c([0-9]+))?$").unwrap());

/// Leading `major.minor` of a version string.
static CYCLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+").unwrap());

/// A vendor release version in `major.minor.patch[-cBUILD]` form.
///
/// Field order matters: the derived `Ord` compares major, minor, patch and
/// then build, so `6.3.3-c842 > 6.3.3 > 6.3.2-c999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Hotfix build number (`-c842`), 0 when absent
    pub build: u64,
}

impl ReleaseVersion {
    pub const fn new(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Parse a version string, returning `None` if it does not follow the
    /// `D.D.D(-cD)?` grammar.
    ///
    /// Examples:
    /// - "6.3.3-c842" -> (6, 3, 3, 842)
    /// - "6.1.5" -> (6, 1, 5, 0)
    /// - "6.1" -> None
    pub fn parse(version: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(version)?;
        let number = |idx: usize| caps.get(idx).map(|m| m.as_str().parse::<u64>());

        Some(Self {
            major: number(1)?.ok()?,
            minor: number(2)?.ok()?,
            patch: number(3)?.ok()?,
            build: match number(4) {
                Some(build) => build.ok()?,
                None => 0,
            },
        })
    }

    pub fn as_tuple(&self) -> (u64, u64, u64, u64) {
        (self.major, self.minor, self.patch, self.build)
    }
}

/// Extract the release cycle (`major.minor`) a version belongs to.
///
/// "6.3.3-c842" -> "6.3"
pub fn release_cycle(version: &str) -> Option<&str> {
    CYCLE_RE.find(version).map(|m| m.as_str())
}
