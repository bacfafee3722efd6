use super::AppContext;
use crate::output::{styled_table, Output};
use cinescope_core::{preload_movie, Preload};
use cinescope_models::{format_rating, format_runtime, split_genres, MovieDetails, RatingFormat};
use color_eyre::Result;
use comfy_table::Cell;
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_movie(ctx: &AppContext, imdb_id: &str, output: &Output) -> Result<()> {
    let gateway = ctx.gateway()?;

    let spinner = output.spinner("Loading movie details...");
    let preloaded = preload_movie(&gateway, Some(imdb_id)).await;
    spinner.finish_and_clear();

    let details = match preloaded {
        Preload::Ready(details) => details,
        Preload::Redirect(route) => {
            // Preload only ever redirects home
            output.warn(format!("Movie {} could not be loaded, showing {}", imdb_id, route.path()));
            return super::home::run_home(ctx, output).await;
        }
    };

    let in_watchlist = ctx.watchlist().is_in_watchlist(&details.imdb_id);

    if output.is_human() {
        print_details(&details, in_watchlist, output);
    } else {
        output.json(&json!({
            "movie": details,
            "runtime_display": format_runtime(Some(&details.runtime)),
            "rating_display": format_rating(Some(&details.imdb_rating), RatingFormat::Star),
            "genres": split_genres(&details.genre),
            "in_watchlist": in_watchlist,
        }));
    }

    Ok(())
}

fn print_details(details: &MovieDetails, in_watchlist: bool, output: &Output) {
    output.heading(format!("{} ({})", details.title, details.year));

    let mut table = styled_table(vec!["Field", "Value"]);
    let rows = [
        ("Rated", details.rated.clone()),
        ("Released", details.released.clone()),
        ("Runtime", format_runtime(Some(&details.runtime))),
        ("Genre", split_genres(&details.genre).join(" · ")),
        ("IMDb rating", format_rating(Some(&details.imdb_rating), RatingFormat::Star)),
        ("Director", details.director.clone()),
        ("Writer", details.writer.clone()),
        ("Actors", details.actors.clone()),
        ("Language", details.language.clone()),
        ("Country", details.country.clone()),
        ("Awards", details.awards.clone()),
        ("Box office", details.box_office.clone()),
    ];
    for (label, value) in rows {
        if value.is_empty() || value == "N/A" {
            continue;
        }
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    for rating in &details.ratings {
        table.add_row(vec![Cell::new(&rating.source), Cell::new(&rating.value)]);
    }
    println!("{}", table);

    if !details.plot.is_empty() && details.plot != "N/A" {
        println!("\n{}", details.plot);
    }

    if in_watchlist {
        output.success("In your watchlist");
    } else {
        output.info(format!(
            "{} cinescope watchlist add {}",
            "Save it:".dimmed(),
            details.imdb_id
        ));
    }
}
