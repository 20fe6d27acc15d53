use anyhow::{Context, Result};
use cli::Cli;
use indicatif::{ProgressBar, ProgressStyle};
use sinks::pdf::{PageGeometry, RenderOptions, RenderStats, PDF};
use source::{check_root, list_files, DecodePolicy, IgnoreRules, WalkOptions};
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod sinks;
mod source;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("can parse progress style")
                .progress_chars("#>-"),
        );
        progress
    };

    let stats = run(&cli, &progress)?;
    progress.finish_and_clear();

    if !cli.quiet {
        print_summary(&cli.output_pdf, &stats);
    }
    Ok(())
}

/// Render the repository named on the command line into the requested PDF
fn run(cli: &Cli, progress: &ProgressBar) -> Result<RenderStats> {
    let root = cli.repo_dir.as_path();
    check_root(root)?;

    // create the output up front so a bad path fails before any rendering
    let file = std::fs::File::create(&cli.output_pdf).with_context(|| {
        format!(
            "Failed to create output file {}",
            cli.output_pdf.display()
        )
    })?;
    let mut out = std::io::BufWriter::new(file);
    // the output may well live inside the repository; it must not render itself
    let output = std::fs::canonicalize(&cli.output_pdf)
        .with_context(|| format!("Failed to resolve {}", cli.output_pdf.display()))?;

    let rules = IgnoreRules::load(root)
        .with_context(|| format!("Failed to load ignore rules for {}", root.display()))?;
    let walk = WalkOptions {
        sorted: cli.sort,
        exclude: Some(output),
    };
    let files = list_files(root, &rules, walk)?;
    progress.set_length(files.len() as u64);
    progress.set_message("Rendering PDF...");

    let pdf = PDF {
        geometry: PageGeometry::default(),
        options: RenderOptions {
            decode: if cli.replace_invalid {
                DecodePolicy::ReplaceInvalid
            } else {
                DecodePolicy::DropInvalid
            },
            skip_unreadable: cli.skip_unreadable,
        },
        title: repository_title(root),
    };

    pdf.render(&files, &mut out, progress)
        .with_context(|| format!("Failed to write {}", cli.output_pdf.display()))
}

/// The repository's directory name, used as the document title
fn repository_title(root: &Path) -> Option<String> {
    let canonical = std::fs::canonicalize(root).ok()?;
    canonical
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
}

fn print_summary(outfile: &Path, stats: &RenderStats) {
    let size = byte_unit::Byte::from_u64(stats.byte_count)
        .get_appropriate_unit(byte_unit::UnitType::Binary);

    println!("  PDF:     {} ({:.1})", outfile.display(), size);
    println!("  Files:   {}", stats.file_count);
    if stats.skipped_count > 0 {
        println!(
            "  Skipped: {}",
            console::style(stats.skipped_count).yellow()
        );
    }
    println!("  Pages:   {}", stats.page_count);
}
