pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::services::{quiz_service::QuizService, render_service::RenderService};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub quiz_service: QuizService,
    pub render_service: RenderService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let quiz_service = QuizService::new(config.quiz_data_path.clone());
        let render_service = RenderService::new(config.templates_dir.clone());

        Self {
            config,
            quiz_service,
            render_service,
        }
    }
}
