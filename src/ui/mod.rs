/// View builders for the page sections
///
/// Each file renders one surface from borrowed state and emits
/// Messages back into the main update loop:
/// - Hero promo section (hero.rs)
/// - Issue submission form (report_form.rs)
/// - Fixture-backed dashboard (dashboard.rs)
/// - Toast notification banners (toast.rs)

pub mod dashboard;
pub mod hero;
pub mod report_form;
pub mod toast;
