mod decode;
pub use decode::*;

mod ignore_rules;
pub use ignore_rules::*;

mod walker;
pub use walker::*;

use std::path::PathBuf;

/// One file accepted for rendering
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the repository root, always `/` separated; used as the section title
    pub relative_path: String,
    /// Where to read the file's contents from
    pub path: PathBuf,
}
