use std::env;
use tracing::warn;

pub const DEFAULT_SITES: [&str; 3] = ["unu", "aviso", "socpublic"];
pub const DEFAULT_GENERAL_TARGET: f64 = 500.0;
pub const DEFAULT_PORT: u16 = 8080;

pub const RUB_GOAL_MIN: i64 = 10;
pub const RUB_GOAL_MAX: i64 = 50;
pub const TASK_GOAL_MIN: i64 = 5;
pub const TASK_GOAL_MAX: i64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub sites: Vec<String>,
    pub general_target: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sites: DEFAULT_SITES.iter().map(|site| site.to_string()).collect(),
            general_target: DEFAULT_GENERAL_TARGET,
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("TRACKER_SITES").ok().as_deref(),
            env::var("GENERAL_TARGET").ok().as_deref(),
        )
    }

    pub fn from_values(sites: Option<&str>, target: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = sites {
            let parsed: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|site| !site.is_empty())
                .map(str::to_owned)
                .collect();
            if parsed.is_empty() {
                warn!("TRACKER_SITES is empty, using defaults");
            } else {
                config.sites = parsed;
            }
        }

        if let Some(raw) = target {
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => config.general_target = value,
                _ => warn!("ignoring invalid GENERAL_TARGET {raw:?}"),
            }
        }

        config
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|known| known == site)
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = TrackerConfig::from_values(None, None);
        assert_eq!(config.sites, vec!["unu", "aviso", "socpublic"]);
        assert_eq!(config.general_target, 500.0);
    }

    #[test]
    fn parses_sites_and_target() {
        let config = TrackerConfig::from_values(Some(" a, b ,,c "), Some("1000"));
        assert_eq!(config.sites, vec!["a", "b", "c"]);
        assert_eq!(config.general_target, 1000.0);
        assert!(config.has_site("b"));
        assert!(!config.has_site("d"));
    }

    #[test]
    fn rejects_non_positive_target() {
        assert_eq!(TrackerConfig::from_values(None, Some("0")).general_target, 500.0);
        assert_eq!(TrackerConfig::from_values(None, Some("-5")).general_target, 500.0);
        assert_eq!(TrackerConfig::from_values(None, Some("abc")).general_target, 500.0);
        assert_eq!(TrackerConfig::from_values(Some(" , "), None).sites.len(), 3);
    }
}
