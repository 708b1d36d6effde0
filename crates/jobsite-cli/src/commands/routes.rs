//! Route table listing.

use serde::Serialize;
use tabled::Tabled;

use jobsite_api::router::all_routes;
use jobsite_core::error::AppError;

use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    method: &'static str,
    path: &'static str,
    class: String,
    token: String,
    capability: String,
}

/// Print every mounted route with its class.
pub fn execute(format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<RouteRow> = all_routes()
        .map(|r| RouteRow {
            method: r.method,
            path: r.path,
            class: r.class.to_string(),
            token: match (r.class.namespace(), r.class.is_protected()) {
                (Some(kind), _) => kind.to_string(),
                (None, true) => "authType".to_string(),
                (None, false) => "-".to_string(),
            },
            capability: r
                .class
                .capability()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
