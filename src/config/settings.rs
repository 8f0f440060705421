//! Configuration settings for Betslip.

use crate::state::{DEFAULT_STAKE, MIN_STAKE, STAKE_STEP, StakeRules};
use chrono::{FixedOffset, Offset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable prefix for overrides, e.g. `BETSLIP__SLIP__MIN_STAKE`.
pub const ENV_PREFIX: &str = "BETSLIP";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event catalog configuration.
    pub catalog: CatalogConfig,
    /// Betting slip configuration.
    pub slip: SlipConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration: defaults, then the TOML file, then `BETSLIP__*`
    /// environment variables.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        let config: Self = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Reject settings the slip cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        let slip = &self.slip;
        if slip.min_stake <= Decimal::ZERO {
            return Err(crate::Error::config("slip.min_stake must be positive"));
        }
        if slip.stake_step <= Decimal::ZERO {
            return Err(crate::Error::config("slip.stake_step must be positive"));
        }
        if slip.default_stake < slip.min_stake {
            return Err(crate::Error::config(
                "slip.default_stake must not be below slip.min_stake",
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(crate::Error::config("ui.tick_rate_ms must be positive"));
        }
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Event catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file with events. The bundled sample catalog is used when unset.
    pub events_path: Option<PathBuf>,
}

/// Betting slip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Stake on a fresh slip and after each submission.
    pub default_stake: Decimal,
    /// Lowest accepted stake.
    pub min_stake: Decimal,
    /// Increment for the +/- stake keys.
    pub stake_step: Decimal,
    /// How long the success message stays up, in milliseconds.
    pub success_message_ms: u64,
}

impl SlipConfig {
    pub fn stake_rules(&self) -> StakeRules {
        StakeRules {
            default_stake: self.default_stake,
            min_stake: self.min_stake,
            step: self.stake_step,
        }
    }

    pub fn success_message_duration(&self) -> Duration {
        Duration::from_millis(self.success_message_ms)
    }
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            default_stake: DEFAULT_STAKE,
            min_stake: MIN_STAKE,
            stake_step: STAKE_STEP,
            success_message_ms: 5000,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Offset from UTC, in minutes, used to display event start times.
    pub utc_offset_minutes: i32,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl UiConfig {
    /// The display offset; UTC when the configured value is out of range.
    pub fn display_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            utc_offset_minutes: 0,
            show_status_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Previous choice.
    pub left: String,
    /// Next choice.
    pub right: String,
    /// Toggle the highlighted choice.
    pub select: String,
    /// Close popups / cancel editing.
    pub back: String,
    /// Switch focus between event list and slip.
    pub focus: String,
    /// Switch to events view.
    pub events: String,
    /// Switch to history view.
    pub history: String,
    /// Remove the highlighted slip bet.
    pub remove_bet: String,
    /// Raise the stake by one step.
    pub increase_stake: String,
    /// Lower the stake by one step.
    pub decrease_stake: String,
    /// Put the stake back to its default.
    pub reset_stake: String,
    /// Type a stake.
    pub edit_stake: String,
    /// Submit the slip.
    pub submit: String,
    /// Clear the slip.
    pub clear_slip: String,
    /// Clear the submission history.
    pub clear_history: String,
    /// Reload events.
    pub refresh: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            left: "h".to_string(),
            right: "l".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            focus: "Tab".to_string(),
            events: "1".to_string(),
            history: "2".to_string(),
            remove_bet: "d".to_string(),
            increase_stake: "+".to_string(),
            decrease_stake: "-".to_string(),
            reset_stake: "0".to_string(),
            edit_stake: "e".to_string(),
            submit: "s".to_string(),
            clear_slip: "c".to_string(),
            clear_history: "x".to_string(),
            refresh: "r".to_string(),
        }
    }
}
