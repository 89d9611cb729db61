//! crates/printer/src/location.rs
//! Call-site prefixes printed in verbose modes.

use std::fmt;

/// Longest base filename rendered in a call-site prefix, in characters.
///
/// Longer names keep their trailing characters, which usually carry the
/// distinguishing part of the name.
pub const MAX_FILE_PATH_LENGTH: usize = 30;

/// Returns the part of `path` after its last `/` or `\` separator.
///
/// ```
/// use printer::location::base_filename;
///
/// assert_eq!(base_filename("/a/b/c.cpp"), "c.cpp");
/// assert_eq!(base_filename(r"C:\src\state\Propagator.cpp"), "Propagator.cpp");
/// assert_eq!(base_filename("main.rs"), "main.rs");
/// ```
pub fn base_filename(path: &str) -> &str {
    path.rfind(['/', '\\'])
        .map_or(path, |separator| &path[separator + 1..])
}

/// Returns the base filename of `path`, keeping only its last
/// [`MAX_FILE_PATH_LENGTH`] characters when it is longer.
pub fn truncated_filename(path: &str) -> &str {
    let base = base_filename(path);
    match base.char_indices().rev().nth(MAX_FILE_PATH_LENGTH - 1) {
        Some((start, _)) => &base[start..],
        None => base,
    }
}

/// Source location of an emission, rendered as `<basename>:<line> `.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from a source path (usually `file!()`) and line number.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the source path as supplied.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ", truncated_filename(self.file), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_filename_handles_mixed_separators() {
        assert_eq!(base_filename("a/b\\c/d.cpp"), "d.cpp");
        assert_eq!(base_filename("a\\b/c\\e.cpp"), "e.cpp");
    }

    #[test]
    fn base_filename_of_trailing_separator_is_empty() {
        assert_eq!(base_filename("/a/b/"), "");
    }

    #[test]
    fn short_names_are_kept_whole() {
        assert_eq!(truncated_filename("/a/b/c.cpp"), "c.cpp");
    }

    #[test]
    fn name_at_exact_limit_is_kept_whole() {
        let name = "x".repeat(MAX_FILE_PATH_LENGTH);
        let path = format!("/tmp/{name}");
        assert_eq!(truncated_filename(&path), name);
    }

    #[test]
    fn long_names_keep_trailing_suffix() {
        let path = "/x/an_exceptionally_long_source_file_name_for_tests.cpp";
        let truncated = truncated_filename(path);

        assert_eq!(truncated, "source_file_name_for_tests.cpp");
        assert_eq!(truncated.len(), MAX_FILE_PATH_LENGTH);
        assert!(!truncated.contains('/'));
    }

    #[test]
    fn name_one_past_limit_drops_first_character() {
        let name = format!("a{}", "b".repeat(MAX_FILE_PATH_LENGTH));
        assert_eq!(truncated_filename(&name), "b".repeat(MAX_FILE_PATH_LENGTH));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let name = format!("{}é.rs", "ü".repeat(40));
        let truncated = truncated_filename(&name);
        assert_eq!(truncated.chars().count(), MAX_FILE_PATH_LENGTH);
        assert!(truncated.ends_with("é.rs"));
    }

    #[test]
    fn call_site_renders_prefix_with_trailing_space() {
        assert_eq!(CallSite::new("/a/b/c.cpp", 7).to_string(), "c.cpp:7 ");
    }
}
