//! CLI entry point for tree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{OutputConfig, StreamingFormatter, TreeOutput, TreeRenderer, WalkerConfig};

const USAGE: &str = "Usage: python tree.py <directory_path>";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tree")]
#[command(about = "List a directory as an ASCII tree, skipping common noise directories")]
#[command(version)]
struct Args {
    /// Directory to display
    path: Option<PathBuf>,

    /// Also skip entries with this exact name (can be used multiple times)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    exclude_dir: Vec<String>,

    /// Also skip files with this exact name (can be used multiple times)
    #[arg(long = "exclude-file", value_name = "NAME")]
    exclude_file: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirtree={},tree={}", level, level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(path) = args.path else {
        println!("{}", USAGE);
        process::exit(1);
    };

    let walker_config = WalkerConfig::default()
        .exclude_dirs(args.exclude_dir)
        .exclude_files(args.exclude_file);
    tracing::debug!(?walker_config, "Loaded configuration");

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let renderer = TreeRenderer::from_config(&walker_config);
    let mut formatter = StreamingFormatter::new(output_config);

    let result = formatter
        .output_root(&path.display().to_string())
        .map_err(dirtree::TreeError::from)
        .and_then(|()| renderer.render(&path, &mut formatter));

    match result {
        Ok(summary) => {
            tracing::info!(
                directories = summary.directories,
                files = summary.files,
                "Rendered {}",
                path.display()
            );
        }
        Err(e) if e.is_broken_pipe() => process::exit(1),
        Err(e) => {
            let _ = formatter.finish();
            eprintln!("tree: {}", e);
            process::exit(1);
        }
    }
}
