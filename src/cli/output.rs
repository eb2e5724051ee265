use anyhow::Result;
use serde_json::json;

use artsearch::SearchOutcome;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
    if outcome.query.is_empty() {
        println!("No query entered");
        return;
    }

    println!(
        "{} occurrence{} of '{}'",
        outcome.total_matches,
        if outcome.total_matches == 1 { "" } else { "s" },
        outcome.query
    );
    if let Some(focused) = &outcome.focused {
        println!("Focused article: {} (#{})", focused.title, focused.index);
    }
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
    let focused = match &outcome.focused {
        Some(focused) => json!({
            "index": focused.index,
            "title": focused.title,
        }),
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "query": outcome.query,
        "total_matches": outcome.total_matches,
        "focused": focused,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
