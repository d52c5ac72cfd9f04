use clap::Parser;
use log::LevelFilter;
use mdclean::config::Config;
use mdclean::lint::{self, LintStatus};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "mdclean",
    about = "Markdown cleaner — normalize whitespace and structural noise across a Markdown tree"
)]
struct Cli {
    /// Root directory (or file) to clean
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Config file path (default: mdclean.config.json under the root)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report what would change without writing files
    #[arg(long)]
    dry_run: bool,

    /// Skip the markdownlint pass
    #[arg(long)]
    no_lint: bool,

    /// File extension to clean (repeatable, default: md)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_root = if cli.root.is_dir() {
        cli.root.clone()
    } else {
        cli.root
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    };

    // Load config
    let loaded = match cli.config {
        Some(ref path) => Config::from_file(path),
        None => Config::discover(&config_root),
    };
    let mut config = loaded.unwrap_or_else(|e| die(&e.to_string()));

    // CLI overrides
    if cli.dry_run {
        config.dry_run = true;
    }
    if cli.no_lint {
        config.lint.enabled = false;
    }
    if !cli.extensions.is_empty() {
        config.extensions = cli
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
    }

    let files = mdclean::list_files(&[cli.root.clone()], &config.extensions)
        .unwrap_or_else(|e| die(&e.to_string()));
    log::info!("found {} file(s) under {}", files.len(), cli.root.display());

    let report = mdclean::batch::run(&files, config.dry_run);

    if cli.json {
        println!("{}", report.render_json());
    } else {
        print!("{}", report.render_text());
    }

    // The linter rewrites files, so it only runs for real passes.
    if config.lint.enabled && !config.dry_run {
        let status = lint::run_linter(&config.lint, &config_root);
        if status == LintStatus::Skipped {
            log::info!("lint step skipped");
        }
    }
}
