//! Anchors command - records a document's links and shows them grouped by text.

use docfeed::{AnchorMap, anchor::AnchorRecord};

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::output::{OutputFormat, print_table};

/// Label shown for links that had no anchor text.
const NO_TEXT: &str = "(none)";

/// Build an anchor map from a JSON array of `{"uri", "text"}` records.
pub fn record_anchors(json: &str) -> docfeed::Result<AnchorMap> {
    let records: Vec<AnchorRecord> = serde_json::from_str(json)?;

    let mut map = AnchorMap::new();
    for (index, record) in records.iter().enumerate() {
        map.add_anchor_str(record.uri.as_deref(), record.text.as_deref())
            .inspect_err(|e| {
                tracing::warn!(record = index, error = %e, "Rejected anchor record");
            })?;
    }
    tracing::info!(
        anchors = map.len(),
        distinct_texts = map.key_set().len(),
        "Recorded anchors"
    );
    Ok(map)
}

/// Rows of `(text, uri)` in first-occurrence order of the text.
pub fn grouped_rows(map: &AnchorMap) -> Vec<Vec<String>> {
    map.groups()
        .flat_map(|(text, uris)| {
            let text = text.unwrap_or(NO_TEXT);
            uris.into_iter()
                .map(move |uri| vec![text.to_string(), uri.to_string()])
        })
        .collect()
}

/// Run the anchors command
pub fn run(args: &InputArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.input.as_deref())?;
    let map = record_anchors(&input)?;

    match format {
        OutputFormat::Human => {
            if map.is_empty() {
                println!("No anchors recorded");
            } else {
                print_table(&["TEXT", "URI"], &grouped_rows(&map));
            }
        }
        OutputFormat::Json => {
            let groups: Vec<_> = map
                .groups()
                .map(|(text, uris)| {
                    let uris: Vec<&str> = uris.into_iter().map(|u| u.as_str()).collect();
                    serde_json::json!({ "text": text, "uris": uris })
                })
                .collect();
            let value = serde_json::json!({
                "anchors": map,
                "groups": groups,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
