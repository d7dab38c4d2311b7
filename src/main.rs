use anyhow::Result;
use clap::Parser;

use fw_version::config;
use fw_version::git::Git2Repository;
use fw_version::render::{self, RenderStyle};
use fw_version::resolver::VersionResolver;
use fw_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "fw-version",
    about = "Derive a firmware version string from git tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print build-time defines (NAME=VALUE lines) to stdout")]
    defines: bool,

    #[arg(
        long,
        conflicts_with = "defines",
        help = "Write the generated version header"
    )]
    header: bool,

    #[arg(short, long, help = "Header output path (overrides configuration)")]
    out: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("fw-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Open the repository in the current working directory
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match &config.tags.match_pattern {
        Some(pattern) => repo.with_match_pattern(pattern),
        None => repo,
    };

    // Derive the version descriptor from current repository state
    let resolver = VersionResolver::new(&repo);
    let descriptor = match resolver.resolve() {
        Ok(descriptor) => descriptor,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.defines {
        // Machine-readable mode: nothing but the defines on stdout
        print!("{}", render::render(&descriptor, RenderStyle::Defines));
        return Ok(());
    }

    if args.header {
        let path = args
            .out
            .unwrap_or_else(|| config.output.header_path.clone());
        if let Err(e) = std::fs::write(&path, render::header(&descriptor)) {
            ui::display_error(&format!("Failed to write '{}': {}", path, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Wrote {}", path));
    }

    ui::display_resolved_version(&render::compact(&descriptor));

    Ok(())
}
