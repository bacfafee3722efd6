use super::home::title_case;
use super::AppContext;
use crate::output::Output;
use cinescope_core::{DISPLAY_PAGE_SIZE, MAX_DISPLAY_PAGE};
use color_eyre::Result;
use serde_json::json;

/// First page comes from the category row, later pages from the paginated search
pub async fn run_genre(ctx: &AppContext, name: &str, page: u32, output: &Output) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(color_eyre::eyre::eyre!("Genre name cannot be empty"));
    }
    let page = page.clamp(1, MAX_DISPLAY_PAGE);
    let gateway = ctx.gateway()?;

    let spinner = output.spinner(format!("Loading {} movies...", name));
    let result = if page == 1 {
        gateway
            .get_movies_by_category(name, DISPLAY_PAGE_SIZE)
            .await
            .map(|movies| {
                let has_more = movies.len() >= DISPLAY_PAGE_SIZE;
                (movies, has_more)
            })
    } else {
        gateway
            .fetch_page(name, page)
            .await
            .map(|merged| (merged.results, merged.has_more))
    };
    spinner.finish_and_clear();
    let (movies, has_more) = result?;

    if output.is_human() {
        output.heading(format!("{} Movies", title_case(name)));
        output.movie_table(&movies);
        if has_more {
            output.info(format!("More available: cinescope genre {} --page {}", name, page.saturating_add(1)));
        }
    } else {
        output.json(&json!({
            "genre": name,
            "page": page,
            "movies": movies,
            "has_more": has_more,
        }));
    }

    Ok(())
}
