use directories::ProjectDirs;
use fave_core::glyph::{self, Shape};
use fave_core::{ColorPair, ColorScheme, Glyph, Insets, Surface};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub size: f64,
    pub padding: f64,
    #[serde(deserialize_with = "glyph::deserialize_optional")]
    pub normal_image: Option<Glyph>,
    #[serde(deserialize_with = "glyph::deserialize_optional")]
    pub selected_image: Option<Glyph>,
    pub colors: ColorScheme,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            size: 96.0,
            padding: 0.0,
            normal_image: None,
            selected_image: None,
            colors: ColorScheme::default(),
        }
    }
}

impl ButtonConfig {
    pub fn surface(&self, host_image: Option<Glyph>) -> Surface {
        let surface = Surface::new(self.size, self.size).with_insets(Insets::uniform(self.padding));
        match host_image {
            Some(image) => surface.with_image(image),
            None => surface,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub button: ButtonConfig,
    #[serde(default)]
    pub dot_palette: Vec<ColorPair>,
}

impl Config {
    /// Used before the user has written a config file.
    pub fn starter() -> Self {
        Self {
            button: ButtonConfig {
                normal_image: Some(Glyph::Shape(Shape::Heart)),
                ..Default::default()
            },
            dot_palette: Vec::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "fave", "fave").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("FAVE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Failed to write default config: {}", e),
        }
        return Config::starter();
    }

    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::starter()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let touches_config = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                ) && event.paths.iter().any(|p| p == &config_path);

                if touches_config && tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fave_core::Color;

    #[test]
    fn test_config_deserialization() {
        let json = r##"{
            "button": {
                "size": 64.0,
                "normal_image": "star",
                "selected_image": "emblem-favorite",
                "colors": { "selected": "#ff0000" }
            },
            "dot_palette": [
                { "first": "#000000", "second": "#ffffff" }
            ]
        }"##;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.button.size, 64.0);
        assert_eq!(config.button.padding, 0.0);
        assert_eq!(config.button.normal_image, Some(Glyph::Shape(Shape::Star)));
        assert_eq!(
            config.button.selected_image,
            Some("emblem-favorite".parse().unwrap())
        );
        assert_eq!(config.button.colors.selected, Color::rgb8(255, 0, 0));
        assert_eq!(config.button.colors.normal, ColorScheme::default().normal);
        assert_eq!(
            config.dot_palette,
            vec![ColorPair::new(
                Color::rgb8(0, 0, 0),
                Color::rgb8(255, 255, 255)
            )]
        );
    }

    #[test]
    fn test_empty_config_has_no_image() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.button.normal_image, None);
        assert!(config.dot_palette.is_empty());
        assert!(Config::starter().button.normal_image.is_some());
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.button.normal_image, Some(Glyph::Shape(Shape::Heart)));
        assert_eq!(config.button.selected_image, None);
        assert_eq!(config.button.colors, ColorScheme::default());
        assert_eq!(config.dot_palette.len(), 3);
    }

    #[test]
    fn test_blank_selected_image_keeps_the_rest() {
        let toml = r##"
            [button]
            size = 64.0
            normal_image = "star"
            selected_image = ""

            [button.colors]
            selected = "#ff0000"
        "##;
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.button.size, 64.0);
        assert_eq!(config.button.normal_image, Some(Glyph::Shape(Shape::Star)));
        assert_eq!(config.button.selected_image, None);
        assert_eq!(config.button.colors.selected, Color::rgb8(255, 0, 0));
    }

    #[test]
    fn test_surface_from_button_config() {
        let button = ButtonConfig {
            size: 80.0,
            padding: 8.0,
            ..Default::default()
        };
        let surface = button.surface(Some(Glyph::Shape(Shape::Star)));
        assert_eq!(surface.content_width(), 64.0);
        assert_eq!(surface.image, Some(Glyph::Shape(Shape::Star)));
    }
}
