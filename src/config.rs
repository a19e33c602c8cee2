use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub quiz_data_path: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            host: get_env_default("HOST", "0.0.0.0"),
            port: get_env_parse("PORT", 8080)?,
            debug: get_env_flag("DEBUG"),
            quiz_data_path: get_env_default("QUIZ_DATA_PATH", "static/data/quizzes.json").into(),
            templates_dir: get_env_default("TEMPLATES_DIR", "templates").into(),
            static_dir: get_env_default("STATIC_DIR", "static").into(),
        })
    }
}

fn get_env_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_flag(name: &str) -> bool {
    matches!(
        env::var(name).unwrap_or_default().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn get_env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
