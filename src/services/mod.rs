pub mod quiz_service;
pub mod render_service;
