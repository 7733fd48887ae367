/// Report data access seam
///
/// The demo ships no backend, so FixtureStore stands in for one.
/// The trait exists so the fixture set can later be swapped for a
/// real store without touching any rendering code.

use chrono::{DateTime, Utc};

use crate::state::draft::ReportDraft;
use crate::state::fixtures::{ReportRecord, MOCK_REPORTS};

/// Identifier assigned to every demo submission.
///
/// The real service would mint unique ids; the demo reuses the
/// first fixture's id as a placeholder.
pub const PLACEHOLDER_REPORT_ID: &str = "CIV-2024-001";

/// Which slice of reports the dashboard asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Resolved,
}

impl StatusFilter {
    /// All filters, in the order the button row shows them
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Issues",
            StatusFilter::Active => "Active",
            StatusFilter::Resolved => "Resolved",
        }
    }
}

/// Outcome of a (simulated) report submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
}

/// Data access operations the views depend on
pub trait ReportStore {
    /// List the reports matching the filter
    fn list_reports(&self, filter: StatusFilter) -> Vec<ReportRecord>;

    /// Record a new report and hand back its receipt
    fn create_report(&self, draft: &ReportDraft) -> SubmitReceipt;
}

/// Fixture-backed store.
///
/// Listing ignores the filter: the demo list is a fixed sample set,
/// so every filter shows the same three reports. Creation logs the
/// payload it would transmit and discards it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureStore;

impl ReportStore for FixtureStore {
    fn list_reports(&self, _filter: StatusFilter) -> Vec<ReportRecord> {
        MOCK_REPORTS.to_vec()
    }

    fn create_report(&self, draft: &ReportDraft) -> SubmitReceipt {
        match draft.to_json() {
            Ok(payload) => println!("📤 Would submit report payload: {}", payload),
            Err(e) => eprintln!("⚠️  Could not encode report payload: {}", e),
        }

        SubmitReceipt {
            id: PLACEHOLDER_REPORT_ID.to_string(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::Category;

    #[test]
    fn test_listing_ignores_the_filter() {
        let store = FixtureStore;

        let all = store.list_reports(StatusFilter::All);
        let active = store.list_reports(StatusFilter::Active);
        let resolved = store.list_reports(StatusFilter::Resolved);

        assert_eq!(all.len(), 3);
        assert_eq!(all, active);
        assert_eq!(all, resolved);
    }

    #[test]
    fn test_every_submission_gets_the_placeholder_id() {
        let store = FixtureStore;

        let mut draft = ReportDraft::new();
        draft.category = Some(Category::Road);
        draft.description = "pothole".to_string();

        let first = store.create_report(&draft);
        let second = store.create_report(&draft);

        assert_eq!(first.id, PLACEHOLDER_REPORT_ID);
        assert_eq!(second.id, PLACEHOLDER_REPORT_ID);
    }
}
