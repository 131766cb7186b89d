pub mod format;
pub mod recurrence;
pub mod session;

pub use format::{build_date_label, build_preview_summary, build_time_range, DisplayLocale};
pub use recurrence::{
    generate_preview, weekday_from_label, weekday_label, OccurrencePreview, RecurrenceConfig,
    RecurrenceType, DAY_LABELS,
};
pub use session::{resolve_session_window, SessionWindow};
