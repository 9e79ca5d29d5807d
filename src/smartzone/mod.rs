pub mod client;
pub mod session;
pub mod types;

pub use client::{QueryMode, SmartZoneClient};
pub use session::{Session, SessionManager};
