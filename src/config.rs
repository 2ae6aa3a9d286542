#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        let log_filter = std::env::var("WORKOUT_STATS_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "workout_stats=info".to_string());

        Self { log_filter }
    }
}
