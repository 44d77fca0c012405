// src/filesystem/path.rs
use crate::error::InvalidPathReason;
use regex::Regex;
use std::ffi::OsStr;
use std::path::{Component, Path};
use std::sync::OnceLock;

fn forbidden_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"|?*]"#).expect("static pattern"))
}

/// Lexically validates a path. Never touches the filesystem.
///
/// Returns the path as a `&str` on success so callers can store it without
/// a second UTF-8 check.
pub fn validate(path: &OsStr) -> Result<&str, InvalidPathReason> {
    if path.is_empty() {
        return Err(InvalidPathReason::Required);
    }
    let path = path.to_str().ok_or(InvalidPathReason::NotUnicode)?;

    if has_parent_segment(&normalize_separators(path)) {
        return Err(InvalidPathReason::Traversal);
    }
    if forbidden_chars().is_match(path) {
        return Err(InvalidPathReason::InvalidCharacters);
    }

    Ok(path)
}

// Both separator styles are treated alike so `a\..\b` is caught on unix too.
fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn has_parent_segment(path: &str) -> bool {
    Path::new(path)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(path: &str) -> Result<&str, InvalidPathReason> {
        validate(OsStr::new(path))
    }

    #[test]
    fn test_accepts_plain_paths() {
        assert_eq!(check("notes.txt"), Ok("notes.txt"));
        assert_eq!(check("./docs/./readme.md"), Ok("./docs/./readme.md"));
        assert_eq!(check("/var/log/syslog"), Ok("/var/log/syslog"));
        // dots inside a name are not a traversal segment
        assert!(check("archive..tar").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(check(""), Err(InvalidPathReason::Required));
    }

    #[test]
    fn test_rejects_traversal() {
        for path in ["..", "../etc/passwd", "a/../b", "a/b/..", "./..", "a\\..\\b", "/tmp/x/../../y"] {
            assert_eq!(check(path), Err(InvalidPathReason::Traversal), "{path}");
        }
    }

    #[test]
    fn test_rejects_forbidden_characters() {
        for ch in ['<', '>', ':', '"', '|', '?', '*'] {
            let path = format!("bad{ch}name.txt");
            assert_eq!(check(&path), Err(InvalidPathReason::InvalidCharacters), "{path}");
        }
    }

    #[test]
    fn test_traversal_checked_before_characters() {
        assert_eq!(check("../a*b"), Err(InvalidPathReason::Traversal));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_non_unicode() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x66, 0x6f, 0xff, 0x6f]);
        assert_eq!(validate(raw), Err(InvalidPathReason::NotUnicode));
    }
}
