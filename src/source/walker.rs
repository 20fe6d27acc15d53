use super::{FileEntry, IgnoreRules};
use anyhow::{anyhow, Context, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Options for walking a repository
#[derive(Debug, Default, Clone)]
pub struct WalkOptions {
    /// Visit entries in file name order at each level rather than in listing order
    pub sorted: bool,
    /// Canonical path of a file to leave out, such as the PDF being written into the repository
    pub exclude: Option<PathBuf>,
}

impl WalkOptions {
    /// Whether `path` is the excluded file
    fn is_excluded(&self, path: &Path) -> bool {
        let Some(exclude) = &self.exclude else {
            return false;
        };
        // only pay for canonicalizing when the names line up
        if path.file_name() != exclude.file_name() {
            return false;
        }
        std::fs::canonicalize(path)
            .map(|p| &p == exclude)
            .unwrap_or(false)
    }
}

/// Make sure `root` is a directory we can walk
pub fn check_root(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(anyhow!(
            "Repository path {} isn't a directory!",
            root.display()
        ));
    }
    Ok(())
}

/// Whether a root-relative path is considered hidden.
///
/// Only the first character of the whole relative path is inspected, so `.env` and
/// `.github/ci.yml` are hidden but `src/.env` is not.
pub fn is_hidden(relative_path: &str) -> bool {
    relative_path.starts_with('.')
}

/// Render a root-relative path with `/` separators on every platform
fn relative_display(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Recursively list every file under `root` that should be rendered.
///
/// Hidden paths (see [`is_hidden`]) and anything `rules` matches are left out. Symbolic links
/// to directories aren't descended into, but links to files are listed like files.
pub fn list_files(root: &Path, rules: &IgnoreRules, options: WalkOptions) -> Result<Vec<FileEntry>> {
    check_root(root)?;

    // our own filters replace all of the walker's built in ones
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);
    if options.sorted {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut files = Vec::default();
    for entry in builder.build() {
        let entry = entry.with_context(|| "Failed to walk repository directory")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("{} isn't inside {}", path.display(), root.display()))?;
        let relative_path = relative_display(relative);

        if is_hidden(&relative_path) {
            log::debug!("Skipping hidden file {relative_path}");
            continue;
        }
        if rules.matches(relative) {
            log::debug!("Skipping ignored file {relative_path}");
            continue;
        }
        if options.is_excluded(path) {
            log::debug!("Skipping output file {relative_path}");
            continue;
        }

        files.push(FileEntry {
            relative_path,
            path: PathBuf::from(path),
        });
    }

    log::info!("Found {} files to render in {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod test {
    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("can create directories");
        }
        std::fs::write(path, contents).expect("can write file");
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        let mut names: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        names.sort();
        names
    }

    #[test]
    fn hidden_check_only_looks_at_the_leading_character() {
        assert!(is_hidden(".secret"));
        assert!(is_hidden(".github/workflows/ci.yml"));
        assert!(!is_hidden("src/.env"));
        assert!(!is_hidden("a.txt"));
    }

    #[test]
    fn lists_nested_files_relative_to_root() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(dir.path(), "a.txt", "a");
        write(dir.path(), "src/lib.rs", "b");
        write(dir.path(), "src/deep/mod.rs", "c");

        let files = list_files(dir.path(), &IgnoreRules::NoFilter, WalkOptions::default())
            .expect("can list files");
        assert_eq!(names(&files), vec!["a.txt", "src/deep/mod.rs", "src/lib.rs"]);
        for file in files.iter() {
            assert!(file.path.starts_with(dir.path()));
            assert!(file.path.is_file());
        }
    }

    #[test]
    fn skips_top_level_hidden_paths_only() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(dir.path(), "a.txt", "hello");
        write(dir.path(), ".secret", "x");
        write(dir.path(), ".git/config", "x");
        write(dir.path(), "src/.env", "KEY=1");

        let files = list_files(dir.path(), &IgnoreRules::NoFilter, WalkOptions::default())
            .expect("can list files");
        assert_eq!(names(&files), vec!["a.txt", "src/.env"]);
    }

    #[test]
    fn skips_ignored_files() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(dir.path(), ".gitignore", "*.log\ntarget/\n");
        write(dir.path(), "keep.py", "print()");
        write(dir.path(), "trace.log", "noise");
        write(dir.path(), "target/debug/out", "bin");

        let rules = IgnoreRules::load(dir.path()).expect("can load rules");
        let files = list_files(dir.path(), &rules, WalkOptions::default()).expect("can list files");
        assert_eq!(names(&files), vec!["keep.py"]);
    }

    #[test]
    fn sorted_walk_is_in_name_order() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(dir.path(), "c.txt", "");
        write(dir.path(), "a.txt", "");
        write(dir.path(), "b/x.txt", "");

        let options = WalkOptions {
            sorted: true,
            ..WalkOptions::default()
        };
        let files =
            list_files(dir.path(), &IgnoreRules::NoFilter, options).expect("can list files");
        let order: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(order, vec!["a.txt", "b/x.txt", "c.txt"]);
    }

    #[test]
    fn skips_the_excluded_file() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(dir.path(), "a.txt", "a");
        write(dir.path(), "book.pdf", "");
        write(dir.path(), "docs/book.pdf", "");

        let exclude = std::fs::canonicalize(dir.path().join("book.pdf")).expect("can canonicalize");
        let options = WalkOptions {
            exclude: Some(exclude),
            ..WalkOptions::default()
        };
        let files = list_files(dir.path(), &IgnoreRules::NoFilter, options).expect("can list files");
        assert_eq!(names(&files), vec!["a.txt", "docs/book.pdf"]);
    }

    #[test]
    fn root_must_be_a_directory() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(dir.path(), "file", "");
        assert!(list_files(
            &dir.path().join("file"),
            &IgnoreRules::NoFilter,
            WalkOptions::default()
        )
        .is_err());
        assert!(list_files(
            &dir.path().join("missing"),
            &IgnoreRules::NoFilter,
            WalkOptions::default()
        )
        .is_err());
    }
}
