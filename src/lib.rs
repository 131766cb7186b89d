pub mod api;
pub mod app;
pub mod input;
pub mod schedule;
pub mod storage;
pub mod studio;
pub mod ui;

pub use app::{AppState, FormField, SessionForm, SessionMode};
pub use schedule::{generate_preview, OccurrencePreview, RecurrenceConfig, RecurrenceType};
