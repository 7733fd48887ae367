/// State management module
///
/// This module handles all application state, including:
/// - The in-progress report form draft (draft.rs)
/// - The fixture reports and stats the dashboard renders (fixtures.rs)

pub mod draft;
pub mod fixtures;
