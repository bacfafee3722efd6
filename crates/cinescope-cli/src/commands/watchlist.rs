use super::prompts;
use super::AppContext;
use crate::output::Output;
use crate::WatchlistCommands;
use cinescope_models::{MovieLookup, WatchlistEntry};
use color_eyre::Result;
use serde_json::json;

pub async fn run_watchlist(ctx: &AppContext, cmd: WatchlistCommands, output: &Output) -> Result<()> {
    let mut store = ctx.watchlist();

    match cmd {
        WatchlistCommands::List => {
            if output.is_human() {
                output.heading(format!("My Watchlist ({})", store.count()));
                if store.count() == 0 {
                    output.info("Your watchlist is empty. Add movies with: cinescope watchlist add <imdb-id>");
                } else {
                    output.watchlist_table(store.entries());
                }
            } else {
                output.json(&json!({ "count": store.count(), "entries": store.entries() }));
            }
        }
        WatchlistCommands::Add { imdb_id } => {
            if store.is_in_watchlist(&imdb_id) {
                output.info(format!("{} is already in your watchlist", imdb_id));
                return Ok(());
            }
            let entry = fetch_entry(ctx, &imdb_id, output).await?;
            let title = entry.title.clone();
            store.add(entry);
            output.success(format!("Added \"{}\" to your watchlist", title));
        }
        WatchlistCommands::Remove { imdb_id } => {
            if !store.is_in_watchlist(&imdb_id) {
                output.warn(format!("{} is not in your watchlist", imdb_id));
                return Ok(());
            }
            store.remove(&imdb_id);
            output.success(format!("Removed {} from your watchlist", imdb_id));
        }
        WatchlistCommands::Toggle { imdb_id } => {
            if store.is_in_watchlist(&imdb_id) {
                store.remove(&imdb_id);
                output.success(format!("Removed {} from your watchlist", imdb_id));
            } else {
                let entry = fetch_entry(ctx, &imdb_id, output).await?;
                let title = entry.title.clone();
                store.toggle(entry);
                output.success(format!("Added \"{}\" to your watchlist", title));
            }
        }
        WatchlistCommands::Clear { yes } => {
            if store.count() == 0 {
                output.info("Your watchlist is already empty");
                return Ok(());
            }
            let confirmed = yes
                || prompts::prompt_yes_no(
                    &format!("Remove all {} movies from your watchlist?", store.count()),
                    false,
                )?;
            if !confirmed {
                output.info("Cancelled");
                return Ok(());
            }
            store.clear();
            output.success("Watchlist cleared");
        }
    }

    Ok(())
}

/// Details are fetched first so the entry carries a rating, genre and runtime snapshot
async fn fetch_entry(ctx: &AppContext, imdb_id: &str, output: &Output) -> Result<WatchlistEntry> {
    let gateway = ctx.gateway()?;

    let spinner = output.spinner("Looking up movie...");
    let lookup = gateway.get_movie_by_id(imdb_id).await;
    spinner.finish_and_clear();

    match lookup? {
        MovieLookup::Found(details) => Ok(WatchlistEntry::from(&details)),
        MovieLookup::NotFound(message) => Err(color_eyre::eyre::eyre!("{}: {}", imdb_id, message)),
    }
}
