use clap::{ArgAction, Parser, Subcommand};
use cinescope_config::{Config, PathManager};
use commands::{config, genre, home, movie, open, recent, search, watchlist};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinescope")]
#[command(about = "CineScope - discover movies and keep a watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home screen category rows
    Home,
    /// Search movies by title
    #[command(long_about = "Search movies by title. Each page holds twelve results; use --page to move through them.")]
    Search {
        query: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Browse a genre
    Genre {
        name: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show full details for a movie
    Movie {
        /// IMDb id, e.g. tt0133093
        imdb_id: String,
    },
    /// Open a screen by path, e.g. /movie/tt0133093 or "/search?q=alien&page=2"
    Open { path: String },
    /// Manage the watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: Option<WatchlistCommands>,
    },
    /// Show recent searches
    Recent {
        /// Forget all recent searches
        #[arg(long, action = ArgAction::SetTrue)]
        clear: bool,
    },
    /// View or change configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum WatchlistCommands {
    /// List saved movies
    List,
    /// Add a movie by IMDb id
    Add { imdb_id: String },
    /// Remove a movie by IMDb id
    Remove { imdb_id: String },
    /// Add the movie if absent, remove it if present
    Toggle { imdb_id: String },
    /// Remove every saved movie
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (the API key is masked)
    Show,
    /// Store the OMDb API key (prompts when not given)
    SetApiKey { key: Option<String> },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    let log_file = config.logging.file.as_deref().map(|f| path_manager.resolve_log_file(f));
    logging::init_logging(cli.verbose, cli.quiet, &config.logging.level, log_file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let ctx = commands::AppContext::new(config, path_manager);

    match cli.command {
        Commands::Home => home::run_home(&ctx, &output).await,
        Commands::Search { query, page } => search::run_search(&ctx, &query, page, &output).await,
        Commands::Genre { name, page } => genre::run_genre(&ctx, &name, page, &output).await,
        Commands::Movie { imdb_id } => movie::run_movie(&ctx, &imdb_id, &output).await,
        Commands::Open { path } => open::run_open(&ctx, &path, &output).await,
        Commands::Watchlist { cmd } => {
            let cmd = cmd.unwrap_or(WatchlistCommands::List);
            watchlist::run_watchlist(&ctx, cmd, &output).await
        }
        Commands::Recent { clear } => recent::run_recent(&ctx, clear, &output),
        Commands::Config { cmd } => config::run_config(&ctx, cmd, &output),
    }
}
