use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::time::Duration;

// Declare the application modules
mod geo;
mod notify;
mod state;
mod store;
mod ui;

use geo::{Coordinates, LocationError};
use notify::{ToastKind, Toasts, TOAST_DURATION};
use state::draft::{AttachedImage, Category, ReportDraft};
use state::fixtures::ReportRecord;
use store::{FixtureStore, ReportStore, StatusFilter, SubmitReceipt};

/// Simulated network round trip for the submit call
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Main application state
struct CivicPulse {
    /// The in-progress report form
    draft: ReportDraft,
    /// Which dashboard filter button is highlighted
    filter: StatusFilter,
    /// Reports shown on the dashboard
    reports: Vec<ReportRecord>,
    /// Data access seam, fixture-backed in the demo
    store: FixtureStore,
    /// Active toast notifications
    toasts: Toasts,
    /// Bumped on every submission; completions carrying an older
    /// epoch are ignored instead of mutating a superseded form
    submit_epoch: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked an issue category on the selector grid
    CategorySelected(Category),
    /// Description input changed
    DescriptionChanged(String),
    /// Location input changed
    LocationChanged(String),
    /// User asked for a device location fix
    UseCurrentLocation,
    /// The location fix resolved (exactly once)
    LocationCaptured(Result<Coordinates, LocationError>),
    /// User clicked the photo upload area
    PickImage,
    /// User submitted the report form
    SubmitReport,
    /// The simulated submission finished
    SubmitComplete { epoch: u64, receipt: SubmitReceipt },
    /// Dashboard filter button clicked
    FilterSelected(StatusFilter),
    /// A toast's display time elapsed
    ToastExpired(u64),
}

impl CivicPulse {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let store = FixtureStore;
        let reports = store.list_reports(StatusFilter::All);

        println!("🏙️  CivicPulse initialized with {} tracked reports", reports.len());

        (
            CivicPulse {
                draft: ReportDraft::new(),
                filter: StatusFilter::All,
                reports,
                store,
                toasts: Toasts::new(),
                submit_epoch: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(category) => {
                // Selecting a second category replaces the first
                self.draft.category = Some(category);
                Task::none()
            }
            Message::DescriptionChanged(description) => {
                self.draft.description = description;
                Task::none()
            }
            Message::LocationChanged(location) => {
                self.draft.location = location;
                Task::none()
            }
            Message::UseCurrentLocation => {
                Task::perform(geo::current_position(), Message::LocationCaptured)
            }
            Message::LocationCaptured(Ok(coords)) => {
                self.draft.location = coords.to_field_string();
                self.push_toast(
                    "Location Captured",
                    "Your current location has been added to the report.",
                    ToastKind::Info,
                )
            }
            Message::LocationCaptured(Err(e)) => {
                // Leave whatever the user typed in place
                eprintln!("⚠️  Location fix failed: {}", e);
                self.push_toast(
                    "Location Error",
                    "Unable to get your location. Please enter it manually.",
                    ToastKind::Error,
                )
            }
            Message::PickImage => {
                // Native picker, single image file. The file is held
                // as a reference only and never read or uploaded.
                let picked = FileDialog::new()
                    .set_title("Attach Photo Evidence")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "heic"])
                    .pick_file();

                if let Some(path) = picked {
                    self.draft.image = Some(AttachedImage::from_path(path));
                }

                Task::none()
            }
            Message::SubmitReport => {
                if !self.draft.is_submittable() {
                    return self.push_toast(
                        "Missing Information",
                        "Please select an issue type and provide a description.",
                        ToastKind::Error,
                    );
                }

                self.draft.submitting = true;
                self.submit_epoch += 1;
                let epoch = self.submit_epoch;

                println!("📨 Submitting report (epoch {})...", epoch);

                let store = self.store;
                let draft = self.draft.clone();
                Task::perform(submit_report_async(store, draft), move |receipt| {
                    Message::SubmitComplete { epoch, receipt }
                })
            }
            Message::SubmitComplete { epoch, receipt } => {
                if epoch != self.submit_epoch {
                    // A newer submission superseded this one
                    println!("⏭️  Ignoring stale submission completion (epoch {})", epoch);
                    return Task::none();
                }

                println!("✅ Report submitted: {} at {}", receipt.id, receipt.submitted_at);

                self.draft.reset();
                self.push_toast(
                    "Issue Reported Successfully!",
                    format!("Your report has been submitted and assigned ID #{}", receipt.id),
                    ToastKind::Info,
                )
            }
            Message::FilterSelected(filter) => {
                self.filter = filter;
                // The fixture store returns the full sample set for
                // every filter, so this is a cosmetic toggle
                self.reports = self.store.list_reports(filter);
                Task::none()
            }
            Message::ToastExpired(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    /// Queue a toast and schedule its expiry
    fn push_toast(
        &mut self,
        title: &str,
        body: impl Into<String>,
        kind: ToastKind,
    ) -> Task<Message> {
        let id = self.toasts.push(title, body, kind);

        Task::perform(tokio::time::sleep(TOAST_DURATION), move |_| {
            Message::ToastExpired(id)
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = column![
            ui::hero::view(),
            ui::report_form::view(&self.draft),
            ui::dashboard::view(self.filter, &self.reports),
        ]
        .spacing(20);

        let mut content = column![];
        if !self.toasts.is_empty() {
            content = content.push(ui::toast::view(&self.toasts));
        }
        content = content.push(scrollable(page).height(Length::Fill));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("CivicPulse", CivicPulse::update, CivicPulse::view)
        .theme(CivicPulse::theme)
        .centered()
        .run_with(CivicPulse::new)
}

/// Simulated report submission
/// Stands in for the network round trip and always succeeds
async fn submit_report_async(store: FixtureStore, draft: ReportDraft) -> SubmitReceipt {
    tokio::time::sleep(SUBMIT_DELAY).await;
    store.create_report(&draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::store::PLACEHOLDER_REPORT_ID;

    fn app() -> CivicPulse {
        CivicPulse::new().0
    }

    fn receipt() -> SubmitReceipt {
        SubmitReceipt {
            id: PLACEHOLDER_REPORT_ID.to_string(),
            submitted_at: Utc::now(),
        }
    }

    fn toast_titles(app: &CivicPulse) -> Vec<&str> {
        app.toasts.iter().map(|t| t.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_submit_without_required_fields_raises_notice() {
        let mut app = app();

        let _ = app.update(Message::SubmitReport);

        assert!(!app.draft.submitting);
        assert!(app.draft.is_empty());
        assert_eq!(toast_titles(&app), vec!["Missing Information"]);
        assert_eq!(app.toasts.iter().next().unwrap().kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_valid_submission_enters_then_leaves_submitting() {
        let mut app = app();
        let _ = app.update(Message::CategorySelected(Category::Road));
        let _ = app.update(Message::DescriptionChanged("pothole".to_string()));

        let _ = app.update(Message::SubmitReport);
        assert!(app.draft.submitting);

        let _ = app.update(Message::SubmitComplete {
            epoch: app.submit_epoch,
            receipt: receipt(),
        });

        assert!(!app.draft.submitting);
        assert!(app.draft.is_empty());
        let success = app.toasts.iter().next().unwrap();
        assert_eq!(success.title, "Issue Reported Successfully!");
        assert!(success.body.contains("CIV-2024-001"));
    }

    #[test]
    fn test_stale_submission_completion_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::CategorySelected(Category::Safety));
        let _ = app.update(Message::DescriptionChanged("loose railing".to_string()));
        let _ = app.update(Message::SubmitReport);

        let _ = app.update(Message::SubmitComplete {
            epoch: app.submit_epoch - 1,
            receipt: receipt(),
        });

        // The in-flight form is untouched by the stale completion
        assert!(app.draft.submitting);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_selecting_a_category_replaces_the_previous_one() {
        let mut app = app();

        for category in Category::ALL {
            let _ = app.update(Message::CategorySelected(category));
            assert_eq!(app.draft.category, Some(category));
        }
    }

    #[tokio::test]
    async fn test_location_capture_fills_the_field() {
        let mut app = app();

        let coords = Coordinates {
            latitude: 37.7749,
            longitude: -122.4194,
        };
        let _ = app.update(Message::LocationCaptured(Ok(coords)));

        assert_eq!(app.draft.location, "37.774900, -122.419400");
        assert_eq!(toast_titles(&app), vec!["Location Captured"]);
    }

    #[tokio::test]
    async fn test_location_failure_leaves_the_field_alone() {
        let mut app = app();
        let _ = app.update(Message::LocationChanged("Main Street".to_string()));

        let _ = app.update(Message::LocationCaptured(Err(LocationError::Unavailable)));

        assert_eq!(app.draft.location, "Main Street");
        assert_eq!(toast_titles(&app), vec!["Location Error"]);
        assert_eq!(app.toasts.iter().next().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_filter_toggle_never_changes_the_list() {
        let mut app = app();
        let baseline: Vec<&str> = app.reports.iter().map(|r| r.id).collect();
        assert_eq!(baseline, vec!["CIV-2024-001", "CIV-2024-002", "CIV-2024-003"]);

        for filter in StatusFilter::ALL {
            let _ = app.update(Message::FilterSelected(filter));
            assert_eq!(app.filter, filter);

            let ids: Vec<&str> = app.reports.iter().map(|r| r.id).collect();
            assert_eq!(ids, baseline);
        }
    }

    #[tokio::test]
    async fn test_toast_expiry_dismisses_it() {
        let mut app = app();
        let _ = app.update(Message::SubmitReport);
        let id = app.toasts.iter().next().unwrap().id;

        let _ = app.update(Message::ToastExpired(id));

        assert!(app.toasts.is_empty());
    }
}
