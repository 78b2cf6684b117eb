//! Forward-slash path helpers for site-relative paths.
//!
//! Paths here are site paths, not host filesystem paths: both `/` and `\`
//! separate segments and the result always uses `/`.

/// Normalizes a file path: `\` becomes `/`, `.` segments are dropped and
/// `..` segments cancel the preceding segment where one exists.
#[must_use]
pub fn normalize_file(path: &str) -> String {
    let rooted = path.starts_with(['/', '\\']);
    let joined = segments(path).join("/");
    if rooted { format!("/{joined}") } else { joined }
}

/// Returns `path` expressed relative to the directory `base`.
///
/// Returns `"."` when both name the same location.
#[must_use]
pub fn relative_path(base: &str, path: &str) -> String {
    let base = segments(base);
    let target = segments(path);

    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = std::iter::repeat_n("..", base.len() - common).collect();
    parts.extend(target[common..].iter().map(String::as_str));

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn segments(path: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." if out.last().is_some_and(|last| last != "..") => {
                out.pop();
            }
            other => out.push(other.to_string()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dots_and_backslashes() {
        assert_eq!(normalize_file("./a\\b/../c.json"), "a/c.json");
        assert_eq!(normalize_file("/a//b"), "/a/b");
        assert_eq!(normalize_file("../x"), "../x");
    }

    #[test]
    fn relative_path_walks_up_and_down() {
        assert_eq!(relative_path("docs", "docs/a/b.json"), "a/b.json");
        assert_eq!(relative_path("docs/a", "docs/toc.json"), "../toc.json");
        assert_eq!(relative_path("docs", "docs"), ".");
        assert_eq!(relative_path("", "a.json"), "a.json");
    }
}
