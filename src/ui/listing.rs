use crate::studio::{Client, Shoot, ShootStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientRow {
    pub name: String,
    pub email: Option<String>,
    pub portal_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShootRow {
    pub when: String,
    pub client_name: String,
    pub detail: String,
    pub status: ShootStatus,
}

pub fn client_rows(clients: &[Client]) -> Vec<ClientRow> {
    clients
        .iter()
        .map(|client| ClientRow {
            name: client.name.clone(),
            email: client.email.clone().filter(|e| !e.is_empty()),
            portal_path: client.portal_path(),
        })
        .collect()
}

pub fn shoot_rows(shoots: &[Shoot]) -> Vec<ShootRow> {
    shoots
        .iter()
        .map(|shoot| ShootRow {
            when: format!("{} · {}", shoot.date, shoot.time_range),
            client_name: shoot.client_name.clone(),
            detail: format!("{} · {}", shoot.shoot_type, shoot.location),
            status: shoot.status,
        })
        .collect()
}

pub fn scheduled_badge(count: usize) -> String {
    format!("{count} scheduled")
}
