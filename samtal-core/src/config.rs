use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamtalError};

/// Demo configuration, layered TOML with serde defaults throughout. The
/// conversation scripts, time slots and timing knobs that the source
/// duplicated across three file variants all resolve from here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamtalConfig {
    pub demo: DemoConfig,
    pub chat: ChatConfig,
    pub booking: BookingConfig,
    pub branding: BrandingConfig,
    pub logging: LoggingConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Pause after a message has fully appeared.
    #[serde(default = "default_message_delay")]
    pub message_delay_ms: u64,

    /// Pause between two conversation passes.
    #[serde(default = "default_conversation_pause")]
    pub conversation_pause_ms: u64,

    /// How long the driver waits for the booking modal before resuming.
    #[serde(default = "default_booking_wait")]
    pub booking_wait_ms: u64,

    /// Base "thinking" time before a message starts typing.
    #[serde(default = "default_typing_base")]
    pub typing_base_ms: u64,

    /// Additional typing time per character of the message.
    #[serde(default = "default_typing_per_char")]
    pub typing_per_char_ms: u64,

    /// Which built-in conversation the loop starts with.
    #[serde(default)]
    pub start_scenario: usize,

    /// Let the modal complete itself when nobody intervenes.
    #[serde(default = "default_true")]
    pub autopilot: bool,

    /// Replace the built-in scripts with a TOML file.
    #[serde(default)]
    pub scripts_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Bubbles kept fully opaque before the oldest start fading.
    #[serde(default = "default_visible_cap")]
    pub visible_cap: usize,

    /// Characters revealed per animation tick while a bubble types out.
    #[serde(default = "default_reveal_chars")]
    pub reveal_chars_per_tick: usize,

    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Quick-pick buttons offered above the calendar grid.
    #[serde(default = "default_quick_pick_days")]
    pub quick_pick_days: usize,

    /// Animation ticks between two auto-pilot steps.
    #[serde(default = "default_autopilot_beat")]
    pub autopilot_beat_ticks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default = "default_logo_url")]
    pub logo_url: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Skip the network entirely when false.
    #[serde(default = "default_true")]
    pub fetch_logo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Kept quiet by default; the TUI owns the terminal.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_message_delay() -> u64 {
    2000
}

fn default_conversation_pause() -> u64 {
    5000
}

fn default_booking_wait() -> u64 {
    10_000
}

fn default_typing_base() -> u64 {
    300
}

fn default_typing_per_char() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_visible_cap() -> usize {
    4
}

fn default_reveal_chars() -> usize {
    2
}

fn default_quick_pick_days() -> usize {
    5
}

fn default_autopilot_beat() -> u32 {
    6
}

fn default_brand_name() -> String {
    "Svea Studio".to_string()
}

fn default_tagline() -> String {
    "Online • Redo att hjälpa dig".to_string()
}

fn default_logo_url() -> String {
    "https://www.sveastudio.se/logo.jpg".to_string()
}

fn default_fetch_timeout() -> u64 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_tick_rate() -> u64 {
    80
}

fn default_theme() -> String {
    "studio".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message_delay_ms: default_message_delay(),
            conversation_pause_ms: default_conversation_pause(),
            booking_wait_ms: default_booking_wait(),
            typing_base_ms: default_typing_base(),
            typing_per_char_ms: default_typing_per_char(),
            start_scenario: 0,
            autopilot: true,
            scripts_path: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            visible_cap: default_visible_cap(),
            reveal_chars_per_tick: default_reveal_chars(),
            show_timestamps: true,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            quick_pick_days: default_quick_pick_days(),
            autopilot_beat_ticks: default_autopilot_beat(),
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            tagline: default_tagline(),
            logo_url: default_logo_url(),
            fetch_timeout_secs: default_fetch_timeout(),
            fetch_logo: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme(),
        }
    }
}

impl SamtalConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_paths(config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SAMTAL")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let samtal_config: SamtalConfig = config.try_deserialize()?;

        samtal_config.validate()?;
        Ok(samtal_config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chat.visible_cap == 0 {
            return Err(SamtalError::invalid_config(
                "chat.visible_cap",
                "must be at least 1",
            ));
        }

        if self.chat.reveal_chars_per_tick == 0 {
            return Err(SamtalError::invalid_config(
                "chat.reveal_chars_per_tick",
                "must be at least 1",
            ));
        }

        if self.tui.tick_rate_ms < 10 {
            return Err(SamtalError::invalid_config(
                "tui.tick_rate_ms",
                "must be at least 10",
            ));
        }

        if self.booking.quick_pick_days == 0 || self.booking.quick_pick_days > 10 {
            return Err(SamtalError::invalid_config(
                "booking.quick_pick_days",
                "must be between 1 and 10",
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level = self.logging.level.to_lowercase();
        if !valid_levels.contains(&level.as_str()) && !level.contains('=') {
            return Err(SamtalError::invalid_config(
                "logging.level",
                format!("unknown log level '{}'", self.logging.level),
            ));
        }

        Ok(())
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("samtal.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("samtal").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SamtalConfig::default();
        assert_eq!(config.chat.visible_cap, 4);
        assert_eq!(config.demo.message_delay_ms, 2000);
        assert_eq!(config.booking.quick_pick_days, 5);
        assert_eq!(config.branding.name, "Svea Studio");
        assert!(config.demo.autopilot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let mut config = SamtalConfig::default();
        config.chat.visible_cap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let mut config = SamtalConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_paths_gives_defaults() {
        let config =
            SamtalConfig::load_from_paths(vec![PathBuf::from("/nonexistent/samtal.toml")])
                .unwrap();
        assert_eq!(config.chat.visible_cap, 4);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samtal.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[chat]\nvisible_cap = 6\n\n[demo]\nmessage_delay_ms = 500\n"
        )
        .unwrap();

        let config = SamtalConfig::load_from_paths(vec![path]).unwrap();
        assert_eq!(config.chat.visible_cap, 6);
        assert_eq!(config.demo.message_delay_ms, 500);
        // untouched sections keep their defaults
        assert_eq!(config.booking.quick_pick_days, 5);
    }
}
