use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::animate::AnimationConfig;
use crate::render::carousel::SliderConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("[{0}] slides_per_view must be at least 1")]
    ZeroSlidesPerView(&'static str),
    #[error("[ui] tick_ms must be greater than 0")]
    ZeroTick,
    #[error("[catalog] filter button {0} has an empty label")]
    EmptyFilterLabel(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default = "SliderConfig::catalog")]
    pub carousel: SliderConfig,
    #[serde(default = "SliderConfig::history")]
    pub history: SliderConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterButtonConfig {
    pub label: String,
    /// Missing token means "show everything".
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_debounce")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterButtonConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Rows scrolled before the header changes look.
    #[serde(default = "default_header_threshold")]
    pub header_threshold: u16,
    /// Rows below the top edge used as the scroll-spy reading line.
    #[serde(default = "default_spy_offset")]
    pub spy_offset: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    #[serde(default = "default_true")]
    pub detail_overlay: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick")]
    pub tick_ms: u64,
}

fn default_debounce() -> u64 {
    120
}
fn default_filters() -> Vec<FilterButtonConfig> {
    [
        ("Todos", Some("todos")),
        ("Fantasia", Some("fantasia")),
        ("Clássicos", Some("Clássicos")),
        ("Romance", Some("romance")),
        ("Contos", Some("contos")),
        ("Sci-fi", Some("sci-fi")),
    ]
    .into_iter()
    .map(|(label, token)| FilterButtonConfig {
        label: label.to_string(),
        token: token.map(str::to_string),
    })
    .collect()
}
fn default_header_threshold() -> u16 {
    1
}
fn default_spy_offset() -> u16 {
    3
}
fn default_sections() -> Vec<String> {
    ["inicio", "historia", "catalogo", "contato"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
fn default_true() -> bool {
    true
}
fn default_tick() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            carousel: SliderConfig::catalog(),
            history: SliderConfig::history(),
            animation: AnimationConfig::default(),
            scroll: ScrollConfig::default(),
            page: PageConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_debounce(),
            filters: default_filters(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: default_header_threshold(),
            spy_offset: default_spy_offset(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            detail_overlay: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/arcana/config.toml"));
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", "arcana") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.slides_per_view == 0
            || self.carousel.breakpoints.iter().any(|b| b.slides_per_view == 0)
        {
            return Err(ConfigError::ZeroSlidesPerView("carousel"));
        }
        if self.history.slides_per_view == 0
            || self.history.breakpoints.iter().any(|b| b.slides_per_view == 0)
        {
            return Err(ConfigError::ZeroSlidesPerView("history"));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if let Some(i) = self
            .catalog
            .filters
            .iter()
            .position(|f| f.label.trim().is_empty())
        {
            return Err(ConfigError::EmptyFilterLabel(i));
        }
        Ok(())
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "arcana") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/arcana/logs")
    }
}
