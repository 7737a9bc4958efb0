//! Route listing inspection
//!
//! Reads the recorded route definitions on demand; nothing here is cached
//! or fatal. A missing or malformed listing is an expected absence, in
//! contrast to the pipeline's preconditions.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::ui::Reporter;

/// Fixed name of the route listing file in the working directory.
pub const ROUTES_FILE: &str = "routes.json";

/// The route listing document.
///
/// Entries are opaque strings; no structure is imposed beyond one entry per
/// list item. An absent `routers` key is an empty listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteListing {
    #[serde(default)]
    pub routers: Vec<String>,
}

/// Print every recorded route, preserving the listing's order.
pub fn display_added_routers(reporter: &Reporter) {
    display_routers_from(Path::new(ROUTES_FILE), reporter);
}

fn display_routers_from(path: &Path, reporter: &Reporter) {
    reporter.step("Displaying added routers:");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            reporter.warn(&format!(
                "No routers found. '{}' does not exist.",
                path.display()
            ));
            return;
        }
        Err(e) => {
            reporter.warn(&format!("Error reading '{}': {}", path.display(), e));
            return;
        }
    };

    match serde_json::from_str::<RouteListing>(&content) {
        Ok(listing) => {
            for route in &listing.routers {
                println!("- {}", route);
            }
        }
        Err(e) => {
            reporter.warn(&format!("Error parsing '{}': {}", path.display(), e));
        }
    }
}
