/// Fixture data standing in for a real reporting backend
///
/// These records and stat tiles are compile-time constants; the
/// dashboard renders them as-is. A real deployment would source
/// them through the ReportStore seam instead.

/// Workflow status of a tracked report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Submitted,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "Submitted",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        }
    }
}

/// Triage priority of a tracked report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A tracked report as the dashboard displays it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: &'static str,
    pub category_label: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub status: ReportStatus,
    pub priority: Priority,
    /// Relative display string, not a live timestamp
    pub reported_at: &'static str,
    /// Resolution progress, 0-100
    pub progress: u8,
    pub assigned_to: &'static str,
}

/// Dashboard stat tile: label, headline value, month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Hero section stat: headline value over a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub caption: &'static str,
}

/// The three sample reports the dashboard always shows
pub const MOCK_REPORTS: [ReportRecord; 3] = [
    ReportRecord {
        id: "CIV-2024-001",
        category_label: "Road Issues",
        description: "Large pothole on Main Street affecting traffic",
        location: "Main Street, Downtown",
        status: ReportStatus::InProgress,
        priority: Priority::High,
        reported_at: "2 hours ago",
        progress: 65,
        assigned_to: "Public Works Dept",
    },
    ReportRecord {
        id: "CIV-2024-002",
        category_label: "Street Lighting",
        description: "Broken streetlight causing safety concerns",
        location: "Park Avenue & 5th St",
        status: ReportStatus::Resolved,
        priority: Priority::Medium,
        reported_at: "1 day ago",
        progress: 100,
        assigned_to: "Electrical Dept",
    },
    ReportRecord {
        id: "CIV-2024-003",
        category_label: "Waste Management",
        description: "Overflowing garbage bins in residential area",
        location: "Oak Street Complex",
        status: ReportStatus::Submitted,
        priority: Priority::Low,
        reported_at: "3 hours ago",
        progress: 10,
        assigned_to: "Sanitation Dept",
    },
];

/// The four dashboard stat tiles
pub const DASHBOARD_STATS: [StatTile; 4] = [
    StatTile { label: "Total Reports", value: "2,847", change: "+12%" },
    StatTile { label: "Resolved Issues", value: "2,453", change: "+8%" },
    StatTile { label: "Active Citizens", value: "15,234", change: "+25%" },
    StatTile { label: "Avg Resolution", value: "24h", change: "-15%" },
];

/// The three hero stats under the headline
pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat { value: "2,847", caption: "Issues Resolved" },
    HeroStat { value: "24h", caption: "Avg Response" },
    HeroStat { value: "15K+", caption: "Active Citizens" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_are_stable() {
        let ids: Vec<&str> = MOCK_REPORTS.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["CIV-2024-001", "CIV-2024-002", "CIV-2024-003"]);
    }

    #[test]
    fn test_progress_is_within_bounds() {
        for report in &MOCK_REPORTS {
            assert!(report.progress <= 100, "{} out of range", report.id);
        }
    }

    #[test]
    fn test_resolved_report_is_complete() {
        let resolved = MOCK_REPORTS
            .iter()
            .find(|r| r.status == ReportStatus::Resolved)
            .unwrap();
        assert_eq!(resolved.progress, 100);
    }
}
