pub mod form_mode;
