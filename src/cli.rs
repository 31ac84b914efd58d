//! Outcome rendering and the CLI entry point for dispatched intents.

use crate::connection::ConnectionManager;
use crate::errors::StoreError;
use crate::intent::{Intent, Outcome, dispatch};
use serde_json::json;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Dispatches the intent and prints its outcome in the requested format.
///
/// Not-found and cancelled outcomes are reported, not raised; the caller
/// only sees `Err` for validation and store failures.
///
/// # Errors
/// Whatever `dispatch` returns.
pub async fn run(
    conn: &ConnectionManager,
    intent: Intent,
    mode: OutputMode,
) -> Result<(), StoreError> {
    let outcome = dispatch(conn, intent).await?;
    println!("{}", render(&outcome, mode));
    Ok(())
}

/// Formats an outcome as a human-readable message or a JSON line.
#[must_use]
pub fn render(outcome: &Outcome, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => render_json(outcome),
        OutputMode::Human => render_human(outcome),
    }
}

fn render_json(outcome: &Outcome) -> String {
    let value = match outcome {
        Outcome::Inserted { id } => json!({"action": "inserted", "id": id}),
        Outcome::Found(record) => json!({"action": "found", "order": record}),
        Outcome::NotFound => json!({"action": "found", "order": null}),
        Outcome::Listed(records) => json!({"action": "listed", "orders": records}),
        Outcome::Deleted { count } => json!({"action": "deleted", "count": count}),
        Outcome::Cleared { count } => json!({"action": "cleared", "count": count}),
        Outcome::Seeded { count } => json!({"action": "seeded", "count": count}),
        Outcome::Cancelled => json!({"action": "cancelled"}),
    };
    value.to_string()
}

fn render_human(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Inserted { id } => format!("Inserted order with id: {id}"),
        Outcome::Found(record) => {
            let body = serde_json::to_string_pretty(record).unwrap_or_default();
            format!("Order from collection:\n{body}")
        }
        Outcome::NotFound => "No matching order found.".to_string(),
        Outcome::Listed(records) => {
            let mut out = format!("All orders from collection ({}):", records.len());
            for record in records {
                let line = serde_json::to_string(record).unwrap_or_default();
                out.push('\n');
                out.push_str(&line);
            }
            out
        }
        Outcome::Deleted { count: 0 } => "No order found to delete.".to_string(),
        Outcome::Deleted { count } => format!("Deleted orders: {count}"),
        Outcome::Cleared { count } => format!("Successfully deleted {count} orders."),
        Outcome::Seeded { count } => format!("Successfully inserted {count} orders."),
        Outcome::Cancelled => "Delete operation canceled.".to_string(),
    }
}
