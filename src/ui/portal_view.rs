use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::studio::{ClientPortal, ProtectionLevel};

pub const PARTIAL_ACCESS_NOTICE: &str = "This link gives limited, view-only access. For invoices or changes to bookings, contact your photographer directly.";
pub const NO_SHOOTS: &str = "No upcoming shoots are currently scheduled.";
pub const NO_GALLERIES: &str = "No galleries have been delivered yet.";
pub const NOT_FOUND: &str = "This portal link is not valid or has expired.";

const LOCATION_PENDING: &str = "TBC";

#[derive(Debug, Clone, PartialEq)]
pub struct PortalView {
    pub heading: String,
    pub notice: Option<&'static str>,
    pub shoots: Vec<PortalShootRow>,
    pub galleries: Vec<GalleryRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortalShootRow {
    pub title: String,
    pub when: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryRow {
    pub title: String,
    pub state: &'static str,
    pub url: Option<String>,
}

pub fn build_portal_view(portal: &ClientPortal, tz: Tz) -> PortalView {
    let notice = (portal.protection_level == ProtectionLevel::Partial).then_some(PARTIAL_ACCESS_NOTICE);

    let shoots = portal
        .shoots
        .iter()
        .map(|shoot| PortalShootRow {
            title: shoot.title.clone(),
            when: format_shoot_time(&shoot.date, tz),
            location: shoot
                .location
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| LOCATION_PENDING.to_string()),
        })
        .collect();

    let galleries = portal
        .galleries
        .iter()
        .map(|gallery| GalleryRow {
            title: gallery.title.clone(),
            state: if gallery.delivered { "Delivered" } else { "Processing" },
            url: gallery.url.clone().filter(|u| !u.is_empty()),
        })
        .collect();

    PortalView {
        heading: format!("{}'s Client Portal", portal.name),
        notice,
        shoots,
        galleries,
    }
}

/// Renders an API timestamp as `"22 Nov 2024, 20:00"` in `tz`.
///
/// Timestamps without an offset are taken as already local. Anything else is
/// shown as sent.
pub fn format_shoot_time(raw: &str, tz: Tz) -> String {
    const DISPLAY: &str = "%-d %b %Y, %H:%M";

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return at.with_timezone(&tz).format(DISPLAY).to_string();
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        Ok(local) => local.format(DISPLAY).to_string(),
        Err(_) => raw.to_string(),
    }
}
