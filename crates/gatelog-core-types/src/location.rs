//! Call-site identity

use serde::Serialize;
use std::fmt;

/// Where a log call was written
///
/// `member` is the path of the enclosing function (closures are folded
/// into the function that contains them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub member: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub const fn new(member: &'static str, file: &'static str, line: u32, column: u32) -> Self {
        Self {
            member,
            file,
            line,
            column,
        }
    }

    /// Last path segment of `member`
    pub fn member_name(&self) -> &'static str {
        self.member.rsplit("::").next().unwrap_or(self.member)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.member, self.file, self.line)
    }
}

/// Strip the helper item and closure segments from a `type_name` path
///
/// `type_name` of a fn item declared inside `my_crate::run` reads
/// `my_crate::run::__here`, or `my_crate::run::{{closure}}::__here` inside a
/// closure.
pub fn trim_member_path(path: &'static str) -> &'static str {
    let mut trimmed = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(rest) = trimmed.strip_suffix("::{{closure}}") {
        trimmed = rest;
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_member_path() {
        assert_eq!(trim_member_path("app::run::__here"), "app::run");
        assert_eq!(
            trim_member_path("app::run::{{closure}}::{{closure}}::__here"),
            "app::run"
        );
        assert_eq!(trim_member_path("app::run"), "app::run");
    }

    #[test]
    fn test_member_name_and_display() {
        let loc = SourceLocation::new("game::frame::update", "src/frame.rs", 12, 5);
        assert_eq!(loc.member_name(), "update");
        assert_eq!(loc.to_string(), "game::frame::update (src/frame.rs:12)");
    }
}
