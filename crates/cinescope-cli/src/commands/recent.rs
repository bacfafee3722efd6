use super::AppContext;
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;

pub fn run_recent(ctx: &AppContext, clear: bool, output: &Output) -> Result<()> {
    let mut recent = ctx.recent_searches();

    if clear {
        recent.clear();
        output.success("Recent searches cleared");
        return Ok(());
    }

    if output.is_human() {
        output.heading("Recent Searches");
        if recent.list().is_empty() {
            output.info("No recent searches");
        }
        for query in recent.list() {
            output.info(format!("  {}", query));
        }
    } else {
        output.json(&json!({ "recent": recent.list() }));
    }

    Ok(())
}
