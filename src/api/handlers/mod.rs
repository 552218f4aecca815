// src/api/handlers/mod.rs
mod health;
mod page;
mod sessions;
mod synergy;

pub use health::health_check;
pub use page::{download_resume, index, static_asset};
pub use sessions::{close_session, open_session};
pub use synergy::{get_synergy, submit_synergy};
