use std::fs;

use crate::derive_bindings;
use crate::report::console::format_console_report;
use crate::report::report_model::BindingReport;
use crate::tag::tag_model::TagDescription;

// ============================================================================
// derive subcommand
// ============================================================================

/// Derive bindings from an element dump and return whether every generated
/// field name passed the identifier check. With `validate` off the check is
/// skipped entirely and the run always counts as passing.
pub fn cmd_derive(
    input: &str,
    prefix: &str,
    format: &str,
    output: Option<&str>,
    validate: bool,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let tags: Vec<TagDescription> = serde_json::from_str(&content)?;

    if verbose > 0 {
        eprintln!(
            "Deriving bindings for {} elements (prefix=\"{}\")...",
            tags.len(),
            prefix
        );
    }

    let mut batch = derive_bindings(&tags, prefix);

    if validate {
        for element in &mut batch.elements {
            element.check_validity();
        }
    }

    if verbose > 0 {
        for err in &batch.skipped {
            eprintln!("Skipped: {}", err);
        }
    }

    let report = BindingReport::from_elements(&batch.elements, &batch.skipped);

    let rendered = match format {
        "console" => format_console_report(&report),
        "json" => serde_json::to_string_pretty(&report)?,
        other => return Err(format!("Unknown format: {}", other).into()),
    };

    match output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }

    Ok(!validate || report.all_valid())
}
