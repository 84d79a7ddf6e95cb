//! TOML-based application configuration.
//!
//! Stores the tunables that shape tracker behavior:
//! - XP amounts (per check-in, per level)
//! - Streak horizon
//! - Which achievement milestones the evaluator awards
//!
//! Configuration is stored at `<data_dir>/config.toml`. The evaluated
//! milestone list defaults to the three lowest milestones; wiring in the
//! higher badges is a config edit, not a code change.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::achievements;
use crate::error::ValidationError;
use crate::progress::{DEFAULT_XP_PER_CHECK, DEFAULT_XP_PER_LEVEL};
use crate::streak::DEFAULT_HORIZON_DAYS;
use crate::tracker::TrackerSettings;

/// XP configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpConfig {
    #[serde(default = "default_xp_per_check")]
    pub per_check: u32,
    #[serde(default = "default_xp_per_level")]
    pub per_level: u32,
}

/// Streak configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// How many days back the streak walk looks, today included.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

/// Achievement evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsConfig {
    /// Catalog codes the evaluator awards automatically.
    #[serde(default = "default_evaluated_codes")]
    pub evaluated: Vec<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub xp: XpConfig,
    #[serde(default)]
    pub streak: StreakConfig,
    #[serde(default)]
    pub achievements: AchievementsConfig,
}

// Default functions
fn default_xp_per_check() -> u32 {
    DEFAULT_XP_PER_CHECK
}
fn default_xp_per_level() -> u32 {
    DEFAULT_XP_PER_LEVEL
}
fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}
fn default_evaluated_codes() -> Vec<String> {
    achievements::DEFAULT_EVALUATED
        .iter()
        .map(|code| code.to_string())
        .collect()
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            per_check: default_xp_per_check(),
            per_level: default_xp_per_level(),
        }
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
        }
    }
}

impl Default for AchievementsConfig {
    fn default() -> Self {
        Self {
            evaluated: default_evaluated_codes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            xp: XpConfig::default(),
            streak: StreakConfig::default(),
            achievements: AchievementsConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| format!("cannot parse '{value}' as number"))?
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
        }

        Err(format!("unknown config key: {key}").into())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Resolve the file into tracker settings.
    ///
    /// # Errors
    /// Returns an error if an evaluated code is not in the catalog, so a
    /// typo in the config is a visible failure rather than a silently
    /// never-awarded badge.
    pub fn tracker_settings(&self) -> Result<TrackerSettings, ValidationError> {
        let mut evaluated = Vec::with_capacity(self.achievements.evaluated.len());
        for code in &self.achievements.evaluated {
            let achievement = achievements::find(code)
                .ok_or_else(|| ValidationError::UnknownAchievementCode(code.clone()))?;
            evaluated.push(achievement);
        }
        Ok(TrackerSettings {
            xp_per_check: self.xp.per_check,
            xp_per_level: self.xp.per_level,
            streak_horizon_days: self.streak.horizon_days,
            evaluated_milestones: evaluated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.xp.per_check, 10);
        assert_eq!(parsed.streak.horizon_days, 400);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let parsed: Config = toml::from_str("[xp]\nper_check = 25\n").unwrap();
        assert_eq!(parsed.xp.per_check, 25);
        assert_eq!(parsed.xp.per_level, 200);
        assert_eq!(parsed.achievements.evaluated.len(), 3);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("xp.per_check").as_deref(), Some("10"));
        assert_eq!(cfg.get("streak.horizon_days").as_deref(), Some("400"));
        assert!(cfg.get("streak.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "streak.horizon_days", "30").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "streak.horizon_days").unwrap(),
            &serde_json::Value::Number(30.into())
        );
    }

    #[test]
    fn set_json_value_by_path_updates_array_from_json() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(
            &mut json,
            "achievements.evaluated",
            r#"["FIRST_CHECK", "NINJA_90"]"#,
        )
        .unwrap();
        let evaluated = Config::get_json_value_by_path(&json, "achievements.evaluated").unwrap();
        assert_eq!(evaluated.as_array().unwrap().len(), 2);
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "xp.nonexistent_key", "5");
        assert!(result.is_err());
    }

    #[test]
    fn tracker_settings_resolves_default_milestones() {
        let settings = Config::default().tracker_settings().unwrap();
        assert_eq!(settings.xp_per_check, 10);
        assert_eq!(settings.streak_horizon_days, 400);
        let days: Vec<u32> = settings
            .evaluated_milestones
            .iter()
            .map(|a| a.milestone_days)
            .collect();
        assert_eq!(days, vec![1, 7, 30]);
    }

    #[test]
    fn tracker_settings_rejects_unknown_code() {
        let mut cfg = Config::default();
        cfg.achievements.evaluated.push("NOT_A_BADGE".to_string());
        assert!(cfg.tracker_settings().is_err());
    }

    #[test]
    fn tracker_settings_can_wire_the_full_ladder() {
        let mut cfg = Config::default();
        cfg.achievements.evaluated = crate::achievements::CATALOG
            .iter()
            .map(|a| a.code.to_string())
            .collect();
        let settings = cfg.tracker_settings().unwrap();
        assert_eq!(settings.evaluated_milestones.len(), 6);
    }
}
