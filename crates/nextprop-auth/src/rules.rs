//! Path exemption rules.
//!
//! The exemption policy is a flat table of [`PathRule`]s. A path is exempt
//! when any rule matches it; rule order carries no meaning.

use serde::Serialize;

/// How a rule's pattern is compared against a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The path equals the pattern or is a sub-path of it (`pattern + "/"`).
    ExactOrSubpath,
    /// The path starts with the pattern.
    Prefix,
    /// The pattern occurs anywhere in the path.
    Contains,
}

/// A single entry in the exemption table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathRule {
    pub pattern: &'static str,
    pub kind: MatchKind,
}

impl PathRule {
    pub const fn exact_or_subpath(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::ExactOrSubpath,
        }
    }

    pub const fn prefix(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::Prefix,
        }
    }

    pub const fn contains(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::Contains,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self.kind {
            MatchKind::ExactOrSubpath => path
                .strip_prefix(self.pattern)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            MatchKind::Prefix => path.starts_with(self.pattern),
            MatchKind::Contains => path.contains(self.pattern),
        }
    }
}

/// Paths reachable without a credential token.
pub const EXEMPT_PATHS: &[PathRule] = &[
    PathRule::exact_or_subpath("/auth/login"),
    PathRule::exact_or_subpath("/auth/signup"),
    PathRule::exact_or_subpath("/auth/forgot-password"),
    PathRule::exact_or_subpath("/api/health"),
    PathRule::exact_or_subpath("/api/auth"),
    // Framework static assets and image optimization.
    PathRule::prefix("/_next/"),
    PathRule::contains("favicon.ico"),
];

/// Returns true when any rule in `rules` matches `path`.
pub fn is_exempt(rules: &[PathRule], path: &str) -> bool {
    rules.iter().any(|rule| rule.matches(path))
}
