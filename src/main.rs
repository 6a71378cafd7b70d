use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use gh_prs::browser::BrowserOpener;
use gh_prs::config::{load_config, SearchConfig};
use gh_prs::error::{AppError, EXIT_SUCCESS};
use gh_prs::github::{GhCli, QueryKind};
use gh_prs::output;
use gh_prs::run::fetch_pick_open;
use gh_prs::tui::TerminalPicker;

#[derive(Args, Debug)]
struct QueryArgs {
    /// Organization to search in (defaults to config, then the current repo's owner)
    #[arg(short, long)]
    org: Option<String>,

    /// Include draft pull requests
    #[arg(short = 'd', long)]
    include_drafts: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List open PRs where your review is requested and pick one to open
    ToReview(QueryArgs),
    /// List open PRs you have already reviewed and pick one to open
    Reviewed(QueryArgs),
}

#[derive(Parser, Debug)]
#[command(name = "gh-prs")]
#[command(about = "Interactively list pull requests via the GitHub CLI and open one in your browser")]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Print the gh command line and other diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gh-prs/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn exit_with(err: AppError) -> ! {
    eprintln!(
        "{}",
        output::format_error(&err.to_string(), output::should_use_colors_stderr())
    );
    std::process::exit(err.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let (kind, args) = match cli.command {
        Commands::ToReview(args) => (QueryKind::ToReview, args),
        Commands::Reviewed(args) => (QueryKind::Reviewed, args),
    };

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(AppError::Config(e)),
    };

    let search = SearchConfig::from_parts(&config, args.org, args.include_drafts, cli.verbose);

    if cli.verbose {
        eprintln!(
            "Searching {} PRs (org: {}, drafts: {}, limit: {})",
            kind.label(),
            search.org.as_deref().unwrap_or("auto"),
            if search.include_drafts { "included" } else { "excluded" },
            search.limit
        );
    }

    let source = GhCli::new(search.clone());
    let picker = TerminalPicker::new(config.theme);
    let mut stdout = std::io::stdout();

    match fetch_pick_open(
        &source,
        &picker,
        &BrowserOpener,
        kind,
        &search,
        &mut stdout,
        output::should_use_colors(),
    )
    .await
    {
        Ok(outcome) => {
            if cli.verbose {
                eprintln!("Done: {}", outcome);
            }
        }
        Err(e) => exit_with(e),
    }

    std::process::exit(EXIT_SUCCESS);
}
