/// Report draft state for the issue submission form
///
/// This struct stores everything the user has entered so far.
/// It serializes to JSON as the payload a real client would send
/// to the reporting API; the demo store only logs and discards it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The five fixed categories a civic issue can be filed under
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Road,
    Lighting,
    Waste,
    Water,
    Safety,
}

impl Category {
    /// All categories, in the order the selector grid shows them
    pub const ALL: [Category; 5] = [
        Category::Road,
        Category::Lighting,
        Category::Waste,
        Category::Water,
        Category::Safety,
    ];

    /// Label shown on the selector button and in report cards
    pub fn label(&self) -> &'static str {
        match self {
            Category::Road => "Road Issues",
            Category::Lighting => "Street Lighting",
            Category::Waste => "Waste Management",
            Category::Water => "Water Issues",
            Category::Safety => "Safety Concerns",
        }
    }

    /// Icon glyph for the selector button
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Road => "🚗",
            Category::Lighting => "💡",
            Category::Waste => "🗑",
            Category::Water => "💧",
            Category::Safety => "⚠",
        }
    }
}

/// Reference to a photo the user attached as evidence
///
/// Only the path and display name are kept. The file itself is
/// never read or uploaded by the demo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AttachedImage {
    pub name: String,
    pub path: PathBuf,
}

impl AttachedImage {
    /// Build a reference from a path returned by the file picker
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());

        Self { name, path }
    }
}

/// The in-progress, unsaved report form state
///
/// Created empty on startup, mutated by input events, and reset to
/// empty after a successful submission. Never persisted anywhere.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReportDraft {
    /// Selected issue category (at most one at a time)
    pub category: Option<Category>,
    /// Free-text description of the issue
    pub description: String,
    /// Free text or "lat, lon" filled in by the location fix
    pub location: String,
    /// At most one attached photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AttachedImage>,
    /// True while the simulated submission is in flight
    #[serde(skip)]
    pub submitting: bool,
}

impl ReportDraft {
    /// Create a new empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft is submittable once a category is picked and the
    /// description is non-empty. Location and photo stay optional.
    pub fn is_submittable(&self) -> bool {
        self.category.is_some() && !self.description.is_empty()
    }

    /// Check whether the form holds no user input at all
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.description.is_empty()
            && self.location.is_empty()
            && self.image.is_none()
    }

    /// Clear every field back to the empty draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert to a JSON payload string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a draft back from its JSON payload
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty_and_not_submittable() {
        let draft = ReportDraft::new();
        assert!(draft.is_empty());
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_submittable_requires_category_and_description() {
        let mut draft = ReportDraft::new();

        draft.description = "pothole".to_string();
        assert!(!draft.is_submittable());

        draft.category = Some(Category::Road);
        assert!(draft.is_submittable());

        draft.description.clear();
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut draft = ReportDraft::new();
        draft.category = Some(Category::Water);
        draft.description = "burst main".to_string();
        draft.location = "Oak Street".to_string();
        draft.image = Some(AttachedImage::from_path(PathBuf::from("/tmp/leak.jpg")));
        draft.submitting = true;

        draft.reset();

        assert!(draft.is_empty());
        assert!(!draft.submitting);
    }

    #[test]
    fn test_payload_serialization() {
        let mut draft = ReportDraft::new();
        draft.category = Some(Category::Lighting);
        draft.description = "streetlight out".to_string();
        draft.location = "Park Avenue & 5th St".to_string();
        draft.submitting = true;

        let json = draft.to_json().unwrap();
        // The in-flight flag is UI state, not payload
        assert!(!json.contains("submitting"));
        assert!(json.contains("\"lighting\""));

        let restored = ReportDraft::from_json(&json).unwrap();
        assert_eq!(restored.category, Some(Category::Lighting));
        assert_eq!(restored.description, draft.description);
        assert!(!restored.submitting);
    }

    #[test]
    fn test_attached_image_keeps_file_name() {
        let image = AttachedImage::from_path(PathBuf::from("/home/me/photos/pothole.jpg"));
        assert_eq!(image.name, "pothole.jpg");
    }

    #[test]
    fn test_category_labels_are_distinct() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
    }
}
