use serde::{Deserialize, Serialize};

/// Where the served-query counter is persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    #[serde(default = "default_stats_path")]
    pub path: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            path: default_stats_path(),
        }
    }
}

fn default_stats_path() -> String {
    "stats.txt".to_string()
}
