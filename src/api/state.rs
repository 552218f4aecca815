// src/api/state.rs
use crate::config::AppConfig;
use crate::providers::gemini::GeminiProvider;
use crate::session::SessionStore;
use crate::synergy::SynergyAnalyzer;
use crate::view::{MotionConfig, PageRenderer};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<SynergyAnalyzer<GeminiProvider>>,
    pub sessions: SessionStore,
    pub motion: MotionConfig,
    pub page: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: AppConfig, client: Client) -> Self {
        let provider = GeminiProvider::new(client, config.gemini.clone());
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(SynergyAnalyzer::new(provider)),
            sessions: SessionStore::new(),
            motion: MotionConfig::default(),
            page: Arc::new(PageRenderer::new()),
        }
    }
}
