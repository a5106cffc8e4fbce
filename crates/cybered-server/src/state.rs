//! Shared request-handler state.

use std::sync::Arc;
use std::time::Duration;

use cybered_core::ContentStore;
use cybered_password::{create_estimator, HibpClient, PasswordEvaluator};

use crate::config::ServerConfig;

/// State handed to every handler. Cheap to clone; the evaluator holds the
/// only long-lived resource (the outbound HTTP client).
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub evaluator: Arc<PasswordEvaluator>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let estimator = create_estimator(config.estimator);
        let directory = HibpClient::with_timeout(
            config.hibp_base_url.clone(),
            Duration::from_secs(config.breach_timeout_secs),
        );

        Self {
            store: ContentStore::new(&config.data_path),
            evaluator: Arc::new(PasswordEvaluator::new(estimator, Box::new(directory))),
        }
    }
}
