use clap::ValueEnum;
use cinescope_models::{format_rating, RatingFormat, SearchResult, WatchlistEntry};
use comfy_table::{Attribute, Cell, Color, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::json;
use std::io::IsTerminal;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", "✓".green().to_string(), msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", "⚠".yellow().to_string(), msg.as_ref());
    }

    fn message(&self, kind: &str, marker: String, msg: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", marker, msg),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": kind, "message": msg }));
            }
        }
    }

    pub fn heading(&self, title: impl AsRef<str>) {
        if self.quiet || !self.is_human() {
            return;
        }
        println!("\n{}", title.as_ref().bright_cyan().bold());
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }
        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(data).unwrap_or_default()),
            OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(data).unwrap_or_default()),
            OutputFormat::Human => println!("{}", data),
        }
    }

    /// Render a row of movie cards as a table
    pub fn movie_table(&self, movies: &[SearchResult]) {
        if self.quiet || !self.is_human() {
            return;
        }
        if movies.is_empty() {
            println!("{}", "No movies found".dimmed());
            return;
        }

        let mut table = styled_table(vec!["#", "Title", "Year", "Type", "IMDb ID"]);
        for (i, movie) in movies.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&movie.title),
                Cell::new(&movie.year),
                Cell::new(movie.media_type.as_str()),
                Cell::new(&movie.imdb_id).fg(Color::DarkGrey),
            ]);
        }
        println!("{}", table);
    }

    pub fn watchlist_table(&self, entries: &[WatchlistEntry]) {
        if self.quiet || !self.is_human() {
            return;
        }

        let mut table = styled_table(vec!["#", "Title", "Year", "Rating", "Genre", "IMDb ID"]);
        for (i, entry) in entries.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&entry.title),
                Cell::new(&entry.year),
                Cell::new(format_rating(entry.rating.as_deref(), RatingFormat::Star)),
                Cell::new(entry.genre.as_deref().unwrap_or("N/A")),
                Cell::new(&entry.imdb_id).fg(Color::DarkGrey),
            ]);
        }
        println!("{}", table);
    }

    /// Spinner shown while waiting on the network; hidden when it would corrupt output
    pub fn spinner(&self, msg: impl Into<String>) -> ProgressBar {
        if self.quiet || !self.is_human() || !std::io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        spinner.set_style(style);
        spinner.set_message(msg.into());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

pub fn styled_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan)),
    );
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
