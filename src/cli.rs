use clap::Parser;
use std::path::PathBuf;

/// Render the text of every file in a repository into a single PDF
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Root directory of the repository to render
    pub repo_dir: PathBuf,

    /// Where to write the generated PDF
    pub output_pdf: PathBuf,

    /// Skip files that can't be read instead of aborting the whole run
    #[clap(long)]
    pub skip_unreadable: bool,

    /// Replace invalid UTF-8 sequences with U+FFFD instead of dropping them
    #[clap(long)]
    pub replace_invalid: bool,

    /// Visit directory entries in file name order rather than listing order
    #[clap(long)]
    pub sort: bool,

    /// Don't show the progress bar or the summary
    #[clap(short, long)]
    pub quiet: bool,
}
