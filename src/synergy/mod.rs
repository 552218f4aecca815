// src/synergy/mod.rs
pub mod analyzer;
pub mod panel;
pub mod prompts;

pub use analyzer::SynergyAnalyzer;
pub use panel::{PendingRequest, SubmitRejection, SynergyPanel, Ticket};
pub use prompts::RESUME_CONTEXT;
