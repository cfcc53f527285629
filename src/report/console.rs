use crate::report::report_model::BindingReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a derivation report for terminal output.
///
/// Produces output like:
/// ```text
/// === Layout Bindings ===
///
/// ✓ mBtnSubmit               R.id.btn_submit              Button  [clickable]
/// ✗ m9lives                  R.id.9lives                  TextView
///
///     [SKIP] Tag 'LinearLayout' has no id attribute
///
/// === Results: 2 derived (1 invalid), 1 skipped ===
/// ```
pub fn format_console_report(report: &BindingReport) -> String {
    let mut out = String::new();

    out.push_str("=== Layout Bindings ===\n\n");

    for row in &report.rows {
        let marker = if row.is_valid {
            "\u{2713}"
        } else {
            "\u{2717}"
        };

        let mut flags = Vec::new();
        if row.is_clickable {
            flags.push("clickable");
        }
        if row.is_editable {
            flags.push("editable");
        }

        let flag_text = if flags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", flags.join(", "))
        };

        out.push_str(&format!(
            "{} {:<24} {:<28} {}{}\n",
            marker, row.field_name, row.full_reference, row.type_name, flag_text
        ));
    }

    if !report.skip_reasons.is_empty() {
        out.push('\n');
        for reason in &report.skip_reasons {
            out.push_str(&format!("    [SKIP] {}\n", reason));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} derived ({} invalid), {} skipped ===\n",
        report.total, report.invalid, report.skipped
    ));

    out
}
