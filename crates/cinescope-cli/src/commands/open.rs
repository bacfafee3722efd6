use super::{genre, home, movie, search, watchlist, AppContext};
use crate::output::Output;
use crate::WatchlistCommands;
use cinescope_core::Route;
use color_eyre::Result;

pub async fn run_open(ctx: &AppContext, path: &str, output: &Output) -> Result<()> {
    let route = Route::parse(path);
    tracing::debug!("Opening {} as {:?}", path, route);
    dispatch(ctx, route, output).await
}

pub async fn dispatch(ctx: &AppContext, route: Route, output: &Output) -> Result<()> {
    match route {
        Route::Home => home::run_home(ctx, output).await,
        Route::Movie(imdb_id) => movie::run_movie(ctx, &imdb_id, output).await,
        // An empty search screen has nothing to fetch
        Route::Search { query, .. } if query.trim().is_empty() => {
            output.info("Type a query: cinescope search <query>");
            Ok(())
        }
        Route::Search { query, page } => search::run_search(ctx, &query, page, output).await,
        Route::Watchlist => watchlist::run_watchlist(ctx, WatchlistCommands::List, output).await,
        Route::Genre(name) => genre::run_genre(ctx, &name, 1, output).await,
    }
}
