//! Lexical path joining with containment checking.

use super::error::PathEscape;

/// Lexically normalize a forward-slash path.
///
/// Resolves `.` and `..` components and collapses repeated separators
/// without touching the filesystem. Relative paths that climb above
/// their root keep the leading `..` components; absolute paths drop
/// them. An empty path normalizes to `"."`.
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let mut components: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                let climbs = components.last().is_some_and(|c| *c == "..");
                if (!absolute && components.is_empty()) || climbs {
                    components.push("..");
                } else if !components.is_empty() {
                    components.pop();
                }
                // a ".." at an absolute root has nowhere to go and drops
            }
            other => components.push(other),
        }
    }

    let mut normalized = if absolute {
        "/".to_string()
    } else {
        String::new()
    };
    normalized.push_str(&components.join("/"));

    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Join `path` onto `base` without normalizing.
///
/// A `path` beginning with `/` replaces the accumulated base entirely,
/// mirroring POSIX join semantics.
fn lexical_join(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else if base.is_empty() || base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Join one or more path segments onto a base prefix.
///
/// Returns the normalized joined path, guaranteed to be located inside
/// `base`. Trailing slashes on `base` are ignored; each segment is
/// treated as a platform-neutral forward-slash path. Directory-like
/// segments (ending in `/`) keep their trailing slash in the result,
/// and the result never begins with `/` so it can be used directly as
/// an object key.
///
/// # Errors
///
/// Returns [`PathEscape`] when the joined path would resolve outside of
/// `base`, e.g. through `..` segments that climb above the prefix.
pub fn safe_join<'a, I>(base: &str, segments: I) -> Result<String, PathEscape>
where
    I: IntoIterator<Item = &'a str>,
{
    let base = base.trim_end_matches('/');
    let mut current = format!("{base}/");

    for segment in segments {
        let mut candidate = normalize(&lexical_join(&current, segment));
        // Normalization strips the trailing slash; put it back when the
        // caller asked for a directory-like path or when the segment
        // resolved to the current directory.
        if segment.ends_with('/') || format!("{candidate}/") == current {
            candidate.push('/');
        }
        current = candidate;
    }

    if current == base {
        current.push('/');
    }

    // The joined path must start with the base prefix, and the character
    // immediately after the prefix must be a separator.
    if !current.starts_with(base) || current.as_bytes().get(base.len()) != Some(&b'/') {
        return Err(PathEscape {
            base: base.to_string(),
            joined: current,
        });
    }

    Ok(current.trim_start_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A//B/./C/D/../E", "A/B/C/E")]
    #[case("", ".")]
    #[case(".", ".")]
    #[case("a/", "a")]
    #[case("/..", "/")]
    #[case("/../x", "/x")]
    #[case("../..", "../..")]
    #[case("a/b/../../..", "..")]
    #[case("./a/./b", "a/b")]
    #[case("//a///b", "/a/b")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_normalize_treats_backslash_as_ordinary() {
        // Backslashes are not separators here; the adapter converts them
        // before joining.
        assert_eq!(normalize("a\\b"), "a\\b");
        assert_eq!(normalize("a\\b/../c"), "c");
    }

    #[rstest]
    #[case("photos", &["a/./b/../c.txt"], "photos/a/c.txt")]
    #[case("photos", &["albums/"], "photos/albums/")]
    #[case("photos", &["."], "photos/")]
    #[case("photos", &["a", ".."], "photos/")]
    #[case("photos", &["x/.."], "photos/")]
    #[case("photos", &["a/", "b.txt"], "photos/a/b.txt")]
    #[case("photos", &["../photos/nested.txt"], "photos/nested.txt")]
    #[case("photos/", &["a.txt"], "photos/a.txt")]
    #[case("", &["a.txt"], "a.txt")]
    #[case("", &["dir/"], "dir/")]
    #[case("/var/data", &["a.txt"], "var/data/a.txt")]
    fn test_safe_join_ok(#[case] base: &str, #[case] segments: &[&str], #[case] expected: &str) {
        let joined = safe_join(base, segments.iter().copied()).expect("should stay inside base");
        assert_eq!(joined, expected);
    }

    #[rstest]
    #[case("photos", &[".."])]
    #[case("photos", &["..", "secret.txt"])]
    #[case("photos", &["../secret.txt"])]
    #[case("photos", &["a/../../secret.txt"])]
    #[case("photos", &["/etc/passwd"])]
    #[case("photos", &["photos2/x", "/abs"])]
    fn test_safe_join_escape(#[case] base: &str, #[case] segments: &[&str]) {
        let err = safe_join(base, segments.iter().copied()).expect_err("should escape base");
        assert_eq!(err.base, base);
    }

    #[test]
    fn test_safe_join_sibling_prefix_is_rejected() {
        // "photos2" starts with "photos" but is a different directory.
        let err = safe_join("photos", ["../photos2/x.txt"]).expect_err("sibling should escape");
        assert_eq!(err.joined, "photos2/x.txt");
    }

    #[test]
    fn test_safe_join_no_segments_yields_prefix() {
        assert_eq!(safe_join("photos", []).expect("base is contained"), "photos/");
    }

    #[test]
    fn test_safe_join_empty_base_allows_climb_to_root() {
        // An empty base is an unrestricted root: climbing stops at "/".
        assert_eq!(safe_join("", ["../a.txt"]).expect("root absorbs .."), "a.txt");
    }

    #[test]
    fn test_escape_error_display() {
        let err = safe_join("photos", [".."]).expect_err("should escape");
        assert!(err.to_string().contains("outside of base path 'photos'"));
    }
}
