use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub active_field: Color,
    pub inactive_field: Color,
    pub day_selected: Color,
    pub day_cursor: Color,
    pub preview_label: Color,
    pub preview_time: Color,
    pub hint: Color,
    pub status_bar: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            active_field: Color::Green,
            inactive_field: Color::DarkGray,
            day_selected: Color::Green,
            day_cursor: Color::Yellow,
            preview_label: Color::White,
            preview_time: Color::Gray,
            hint: Color::DarkGray,
            status_bar: Color::White,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            active_field: Color::Rgb(163, 190, 140),
            inactive_field: Color::Rgb(76, 86, 106),
            day_selected: Color::Rgb(163, 190, 140),
            day_cursor: Color::Rgb(235, 203, 139),
            preview_label: Color::Rgb(236, 239, 244),
            preview_time: Color::Rgb(216, 222, 233),
            hint: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            active_field: Color::Rgb(80, 250, 123),
            inactive_field: Color::Rgb(98, 114, 164),
            day_selected: Color::Rgb(80, 250, 123),
            day_cursor: Color::Rgb(241, 250, 140),
            preview_label: Color::Rgb(248, 248, 242),
            preview_time: Color::Rgb(189, 147, 249),
            hint: Color::Rgb(98, 114, 164),
            status_bar: Color::Rgb(248, 248, 242),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "nord", "dracula"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
