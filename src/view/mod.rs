// src/view/mod.rs
pub mod content;
pub mod motion;
pub mod page;

pub use content::PORTFOLIO;
pub use motion::MotionConfig;
pub use page::{PageContext, PageRenderer};
