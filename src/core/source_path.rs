//! Source path trimming for entry locations

/// Marker used when the logger is not configured with another build root.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Strip everything up to and including the last occurrence of `root`
/// among the components of `path`.
///
/// Components are split on both `/` and `\`. `root` may itself span several
/// components (`"src/common"`), in which case the whole sequence must match
/// consecutive components of `path`. When `root` is empty or never matches,
/// `path` is returned unchanged.
///
/// ```
/// use rust_term_logger::trim_source_path;
///
/// assert_eq!(trim_source_path("/build/src/foo/bar.rs", "src"), "foo/bar.rs");
/// assert_eq!(trim_source_path("/build/nomatch.rs", "src"), "/build/nomatch.rs");
/// ```
pub fn trim_source_path<'a>(path: &'a str, root: &str) -> &'a str {
    let root_parts: Vec<&str> = root.split(is_separator).filter(|c| !c.is_empty()).collect();
    if root_parts.is_empty() {
        return path;
    }

    // (start, end) byte spans of the non-empty components
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, c) in path.char_indices() {
        if is_separator(c) {
            if i > start {
                spans.push((start, i));
            }
            start = i + c.len_utf8();
        }
    }
    if path.len() > start {
        spans.push((start, path.len()));
    }

    if spans.len() < root_parts.len() {
        return path;
    }

    for first in (0..=spans.len() - root_parts.len()).rev() {
        let matched = root_parts
            .iter()
            .enumerate()
            .all(|(j, part)| &path[spans[first + j].0..spans[first + j].1] == *part);
        if matched {
            let end = spans[first + root_parts.len() - 1].1;
            // skip the separator that follows the matched component, if any
            return path.get(end + 1..).unwrap_or("");
        }
    }
    path
}
