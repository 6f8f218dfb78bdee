use crate::constants::{DEFAULT_ASSET_ROOT, LOADING_MIN_MS};

/// Runtime knobs, overridable from the page query string.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub log_level: log::Level,
    pub muted: bool,
    pub loading_min_ms: f64,
    pub asset_root: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            muted: false,
            loading_min_ms: LOADING_MIN_MS,
            asset_root: DEFAULT_ASSET_ROOT.to_string(),
        }
    }
}

impl SceneConfig {
    /// Parse `?log=debug&mute=1&loading_ms=500&asset_root=/static/`. Unknown
    /// keys are ignored; unparsable values keep the default and are logged.
    pub fn from_query(query: &str) -> Self {
        let (cfg, rejected) = Self::parse_query(query);
        for msg in &rejected {
            log::warn!("[config] {}", msg);
        }
        cfg
    }

    /// Like [`SceneConfig::from_query`], but hands back the rejected values
    /// instead of logging them, for callers that install the logger from the
    /// parsed level.
    pub fn parse_query(query: &str) -> (Self, Vec<String>) {
        let mut cfg = Self::default();
        let mut rejected = Vec::new();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => match value.parse() {
                    Ok(level) => cfg.log_level = level,
                    Err(_) => rejected.push(format!("bad log level `{}`", value)),
                },
                "mute" => cfg.muted = matches!(value, "" | "1" | "true" | "yes"),
                "loading_ms" => match value.parse::<f64>() {
                    Ok(ms) if ms >= 0.0 => cfg.loading_min_ms = ms,
                    _ => rejected.push(format!("bad loading_ms `{}`", value)),
                },
                "asset_root" if !value.is_empty() => {
                    cfg.asset_root = if value.ends_with('/') {
                        value.to_string()
                    } else {
                        format!("{}/", value)
                    };
                }
                _ => {}
            }
        }
        (cfg, rejected)
    }

    #[inline]
    pub fn asset_url(&self, file_name: &str) -> String {
        format!("{}{}", self.asset_root, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_default() {
        assert_eq!(SceneConfig::from_query(""), SceneConfig::default());
        assert_eq!(SceneConfig::from_query("?"), SceneConfig::default());
    }

    #[test]
    fn known_keys_override() {
        let cfg = SceneConfig::from_query("?log=debug&mute&loading_ms=250&asset_root=/static");
        assert_eq!(cfg.log_level, log::Level::Debug);
        assert!(cfg.muted);
        assert_eq!(cfg.loading_min_ms, 250.0);
        assert_eq!(cfg.asset_url("room.json"), "/static/room.json");
    }

    #[test]
    fn bad_values_keep_defaults() {
        let cfg = SceneConfig::from_query("log=loud&loading_ms=-5&mute=0&other=1");
        assert_eq!(cfg.log_level, log::Level::Info);
        assert_eq!(cfg.loading_min_ms, LOADING_MIN_MS);
        assert!(!cfg.muted);
    }

    #[test]
    fn rejected_values_are_reported() {
        let (cfg, rejected) = SceneConfig::parse_query("?log=loud&loading_ms=abc&log_extra=1");
        assert_eq!(cfg, SceneConfig::default());
        assert_eq!(
            rejected,
            vec![
                "bad log level `loud`".to_string(),
                "bad loading_ms `abc`".to_string(),
            ]
        );
        assert!(SceneConfig::parse_query("?log=warn").1.is_empty());
    }
}
