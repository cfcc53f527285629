use serde::{Deserialize, Serialize};

use crate::binding::binding_model::Element;
use crate::binding::error::BindingError;

// ============================================================================
// Derivation report — aggregates the elements of one batch run
// ============================================================================

/// One derived binding, as shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingRow {
    /// Generated field name
    pub field_name: String,

    /// Qualified `R.id.*` reference
    pub full_reference: String,

    /// Simple view-type name
    pub type_name: String,

    pub is_clickable: bool,
    pub is_editable: bool,

    /// Whether the field name passed the identifier check
    pub is_valid: bool,
}

/// Aggregated report for one derivation run.
///
/// Built from a batch's elements via `from_elements()`, which expects
/// `check_validity` to have been run on each element. Consumed by the
/// console and JSON renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingReport {
    /// Number of derived bindings
    pub total: usize,

    /// Bindings whose field name is a legal identifier
    pub valid: usize,

    /// Bindings whose field name failed the identifier check
    pub invalid: usize,

    /// Tags skipped during the batch (no id, unparsable id)
    pub skipped: usize,

    pub rows: Vec<BindingRow>,

    /// Human-readable reason per skipped tag
    pub skip_reasons: Vec<String>,
}

impl BindingRow {
    pub fn from_element(element: &Element<'_>) -> Self {
        Self {
            field_name: element.field_name.clone(),
            full_reference: element.full_reference(),
            type_name: element.type_name.clone(),
            is_clickable: element.is_clickable,
            is_editable: element.is_editable,
            is_valid: element.is_valid,
        }
    }
}

impl BindingReport {
    /// Build a report from a batch's elements and skip records.
    ///
    /// Automatically computes total, valid, and invalid counts.
    pub fn from_elements(elements: &[Element<'_>], skipped: &[BindingError]) -> Self {
        let rows: Vec<BindingRow> = elements.iter().map(BindingRow::from_element).collect();
        let valid = rows.iter().filter(|r| r.is_valid).count();
        let invalid = rows.len() - valid;

        Self {
            total: rows.len(),
            valid,
            invalid,
            skipped: skipped.len(),
            skip_reasons: skipped.iter().map(|e| e.to_string()).collect(),
            rows,
        }
    }

    /// Whether every derived field name passed the identifier check.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}
