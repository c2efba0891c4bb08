use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::renderer::DisplayMode;
use crate::shared::constants;

/// Render settings read from `pixcast.config`.
///
/// The file holds `key = value` lines; unknown keys and blank or `#` lines are
/// ignored. CLI flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub tick: Duration,
    pub mode: DisplayMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_CANVAS_WIDTH,
            height: constants::DEFAULT_CANVAS_HEIGHT,
            tick: Duration::from_millis(constants::DEFAULT_ANIMATION_DELAY_MS),
            mode: DisplayMode::Rgb,
        }
    }
}

impl RenderConfig {
    /// Load the config from the working directory, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(constants::CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .with_context(|| format!("invalid config in {}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                bail!("expected `key = value`, got `{}`", trimmed);
            };
            let value = value.trim();

            match key.trim() {
                "width" => config.width = parse_dimension("width", value)?,
                "height" => config.height = parse_dimension("height", value)?,
                "tick-ms" => {
                    let ms: u64 = value
                        .parse()
                        .with_context(|| format!("tick-ms must be a number, got `{}`", value))?;
                    config.tick = Duration::from_millis(ms.max(1));
                }
                "mode" => {
                    config.mode = match value {
                        "rgb" => DisplayMode::Rgb,
                        "ascii" => DisplayMode::Ascii,
                        other => bail!("unknown mode `{}`", other),
                    }
                }
                other => crate::utils::logger::debug(&format!("ignoring config key `{}`", other)),
            }
        }

        Ok(config)
    }
}

fn parse_dimension(key: &str, value: &str) -> Result<u32> {
    let parsed: u32 = value
        .parse()
        .with_context(|| format!("{} must be a positive number, got `{}`", key, value))?;
    if parsed == 0 {
        bail!("{} must be greater than zero", key);
    }
    Ok(parsed)
}
