use super::AppContext;
use crate::output::Output;
use cinescope_core::DISPLAY_PAGE_SIZE;
use color_eyre::Result;
use futures::future::try_join_all;
use serde_json::json;

pub async fn run_home(ctx: &AppContext, output: &Output) -> Result<()> {
    let gateway = ctx.gateway()?;
    let categories = &ctx.config.home.categories;
    tracing::debug!("Loading home rows: {:?}", categories);

    let spinner = output.spinner("Loading movies...");
    let rows = try_join_all(
        categories
            .iter()
            .map(|category| gateway.get_movies_by_category(category, DISPLAY_PAGE_SIZE)),
    )
    .await;
    spinner.finish_and_clear();
    let rows = rows?;

    if output.is_human() {
        for (category, movies) in categories.iter().zip(&rows) {
            output.heading(title_case(category));
            output.movie_table(movies);
        }
    } else {
        let data: Vec<_> = categories
            .iter()
            .zip(&rows)
            .map(|(category, movies)| json!({ "category": category, "movies": movies }))
            .collect();
        output.json(&json!({ "rows": data }));
    }

    Ok(())
}

pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
