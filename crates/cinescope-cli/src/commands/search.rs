use super::AppContext;
use crate::output::Output;
use cinescope_core::MAX_DISPLAY_PAGE;
use color_eyre::Result;
use serde_json::json;

pub async fn run_search(ctx: &AppContext, query: &str, page: u32, output: &Output) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(color_eyre::eyre::eyre!("Search query cannot be empty"));
    }
    let page = page.clamp(1, MAX_DISPLAY_PAGE);

    let gateway = ctx.gateway()?;
    ctx.recent_searches().record(query);

    let spinner = output.spinner(format!("Searching for \"{}\"...", query));
    let result = gateway.fetch_page(query, page).await;
    spinner.finish_and_clear();
    let result = result?;

    if output.is_human() {
        output.heading(format!("Results for \"{}\"", query));
        output.movie_table(&result.results);
        if !result.results.is_empty() {
            output.info(format!(
                "Showing {} of {} results",
                result.results.len(),
                result.total_results
            ));
            output.info(format!("Page {} of {}", page, result.total_pages.max(1)));
            if result.has_more {
                output.info(format!("Next: cinescope search \"{}\" --page {}", query, page.saturating_add(1)));
            }
        }
    } else {
        output.json(&json!({
            "query": query,
            "page": page,
            "results": result.results,
            "total_results": result.total_results,
            "total_pages": result.total_pages,
            "has_more": result.has_more,
        }));
    }

    Ok(())
}
