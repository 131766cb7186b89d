use serde::{Deserialize, Serialize};

/// Shoot categories offered when booking.
pub const SHOOT_TYPES: [&str; 6] = [
    "Nightclub",
    "Bar / promo",
    "Wedding",
    "Corporate",
    "Portraits",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoot {
    pub id: i64,
    pub client_name: String,
    pub date: String,
    pub time_range: String,
    #[serde(rename = "type")]
    pub shoot_type: String,
    pub location: String,
    pub status: ShootStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShootStatus {
    Scheduled,
    Confirmed,
    Delivered,
}

impl ShootStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Confirmed => "Confirmed",
            Self::Delivered => "Delivered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shoot_reads_type_field() {
        let json = r#"{
            "id": 1,
            "clientName": "Salvation York",
            "date": "Fri 22 Nov",
            "timeRange": "22:30 – 02:00",
            "type": "Nightclub",
            "location": "Salvation",
            "status": "Confirmed"
        }"#;

        let shoot: Shoot = serde_json::from_str(json).unwrap();

        assert_eq!(shoot.shoot_type, "Nightclub");
        assert_eq!(shoot.status, ShootStatus::Confirmed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{
            "id": 1, "clientName": "c", "date": "d", "timeRange": "t",
            "type": "Other", "location": "l", "status": "Cancelled"
        }"#;

        assert!(serde_json::from_str::<Shoot>(json).is_err());
    }
}
