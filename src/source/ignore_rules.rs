use anyhow::{anyhow, Context, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Name of the ignore file looked up at the repository root
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// The set of ignore patterns for a single repository.
///
/// Repositories without an ignore file get [`IgnoreRules::NoFilter`], which accepts every path.
#[derive(Debug)]
pub enum IgnoreRules {
    NoFilter,
    Patterns(Gitignore),
}

impl IgnoreRules {
    /// Load the `.gitignore` at the root of `root`, if there is one.
    ///
    /// The file must be valid UTF-8 and every pattern in it must compile; either failure is
    /// reported with the offending file (and line, for patterns).
    pub fn load(root: &Path) -> Result<IgnoreRules> {
        let path = root.join(IGNORE_FILE_NAME);
        if !path.is_file() {
            log::debug!("No {} in {}", IGNORE_FILE_NAME, root.display());
            return Ok(IgnoreRules::NoFilter);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read ignore file {}", path.display()))?;
        IgnoreRules::from_lines(root, contents.lines())
            .with_context(|| format!("Failed to parse ignore file {}", path.display()))
    }

    /// Build a matcher from individual gitignore lines, anchored at `root`
    pub fn from_lines<'a, I>(root: &Path, lines: I) -> Result<IgnoreRules>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = GitignoreBuilder::new(root);
        for (i, line) in lines.into_iter().enumerate() {
            builder
                .add_line(None, line)
                .with_context(|| format!("Invalid pattern `{}` on line {}", line, i + 1))?;
        }
        let gitignore = builder
            .build()
            .map_err(|e| anyhow!("Failed to compile ignore patterns: {e}"))?;
        log::info!("Loaded {} ignore patterns", gitignore.num_ignores());

        Ok(IgnoreRules::Patterns(gitignore))
    }

    /// Whether the file at `relative_path` (relative to the repository root) should be excluded
    pub fn matches(&self, relative_path: &Path) -> bool {
        match self {
            IgnoreRules::NoFilter => false,
            IgnoreRules::Patterns(gitignore) => gitignore
                .matched_path_or_any_parents(relative_path, false)
                .is_ignore(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rules(lines: &[&str]) -> IgnoreRules {
        IgnoreRules::from_lines(Path::new("/repo"), lines.iter().copied())
            .expect("can build ignore rules")
    }

    #[test]
    fn no_filter_accepts_everything() {
        let rules = IgnoreRules::NoFilter;
        assert!(!rules.matches(Path::new("a.txt")));
        assert!(!rules.matches(Path::new("target/debug/thing")));
    }

    #[test]
    fn wildcard_patterns_match_anywhere() {
        let rules = rules(&["*.log"]);
        assert!(rules.matches(Path::new("trace.log")));
        assert!(rules.matches(Path::new("logs/deep/trace.log")));
        assert!(!rules.matches(Path::new("keep.py")));
    }

    #[test]
    fn directory_patterns_exclude_their_contents() {
        let rules = rules(&["build/"]);
        assert!(rules.matches(Path::new("build/out.txt")));
        assert!(rules.matches(Path::new("src/build/out.txt")));
        // a file named `build` isn't a directory
        assert!(!rules.matches(Path::new("build")));
    }

    #[test]
    fn anchored_patterns_only_match_at_root() {
        let rules = rules(&["/dist"]);
        assert!(rules.matches(Path::new("dist/bundle.js")));
        assert!(!rules.matches(Path::new("web/dist/bundle.js")));
    }

    #[test]
    fn later_negations_override_earlier_patterns() {
        let rules = rules(&["*.txt", "!keep.txt"]);
        assert!(rules.matches(Path::new("drop.txt")));
        assert!(!rules.matches(Path::new("keep.txt")));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let rules = rules(&["# a comment", "", "*.o"]);
        assert!(rules.matches(Path::new("main.o")));
        assert!(!rules.matches(Path::new("# a comment")));
    }

    #[test]
    fn missing_ignore_file_means_no_filter() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let rules = IgnoreRules::load(dir.path()).expect("can load rules");
        assert!(matches!(rules, IgnoreRules::NoFilter));
    }

    #[test]
    fn loads_ignore_file_from_root() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        std::fs::write(dir.path().join(".gitignore"), "*.log\n").expect("can write");
        let rules = IgnoreRules::load(dir.path()).expect("can load rules");
        assert!(rules.matches(Path::new("trace.log")));
        assert!(!rules.matches(Path::new("keep.py")));
    }

    #[test]
    fn invalid_pattern_names_its_line() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        std::fs::write(dir.path().join(".gitignore"), "*.log\na[z-a]\n").expect("can write");
        let err = IgnoreRules::load(dir.path()).expect_err("invalid range is rejected");
        let message = format!("{err:#}");
        assert!(message.contains("line 2"), "unexpected error: {message}");
        assert!(message.contains("a[z-a]"), "unexpected error: {message}");
    }

    #[test]
    fn braces_are_alternations() {
        let rules = rules(&["*.{log,tmp}"]);
        assert!(rules.matches(Path::new("trace.log")));
        assert!(rules.matches(Path::new("scratch.tmp")));
        assert!(!rules.matches(Path::new("*.{log,tmp}")));

        let err = IgnoreRules::from_lines(Path::new("/repo"), ["*.log", "{unclosed"])
            .expect_err("unclosed brace is rejected");
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn undecodable_ignore_file_is_an_error() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        std::fs::write(dir.path().join(".gitignore"), [b'*', 0xff, 0xfe, b'\n'])
            .expect("can write");
        assert!(IgnoreRules::load(dir.path()).is_err());
    }
}
