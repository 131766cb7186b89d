pub mod listing;
pub mod portal_view;
pub mod preview_panel;
pub mod theme;
