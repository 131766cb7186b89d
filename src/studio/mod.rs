pub mod client;
pub mod portal;
pub mod shoot;

pub use client::{Client, NewClient};
pub use portal::{ClientPortal, Gallery, PortalShoot, ProtectionLevel};
pub use shoot::{Shoot, ShootStatus, SHOOT_TYPES};
