use crate::error::{Error, Result};
use crate::scenes::flashback::FlashbackLayout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Looked up in the working directory; optional.
pub const CONFIG_FILE: &str = "scenegen.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub flashback: FlashbackConfig,
    pub screenshots: ScreenshotConfig,
}

impl Config {
    /// Reads `path`, or falls back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub sphere_nb: usize,
    pub cylinder_nb: usize,
    pub cone_nb: usize,
    pub plane_nb: usize,

    pub x_max: f32,
    pub y_max: f32,
    pub z_max: f32,
    pub radius_max: f32,
    pub height_max: f32,
    pub emissive_max: f32,
    /// Fraction of primitives that emit light, in `[0, 1]`.
    pub emissive_ratio: f64,

    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub scene_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sphere_nb: 10,
            cylinder_nb: 10,
            cone_nb: 10,
            plane_nb: 0,
            x_max: 100.0,
            y_max: 100.0,
            z_max: 100.0,
            radius_max: 3.0,
            height_max: 10.0,
            emissive_max: 2.0,
            emissive_ratio: 1.0,
            seed: None,
            output_dir: PathBuf::from("scenes"),
            scene_name: String::from("scene.json"),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("x_max", self.x_max),
            ("y_max", self.y_max),
            ("z_max", self.z_max),
            ("radius_max", self.radius_max),
            ("height_max", self.height_max),
            ("emissive_max", self.emissive_max),
        ];
        for (name, value) in bounds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite value >= 0, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.emissive_ratio) {
            return Err(Error::InvalidConfig(format!(
                "emissive_ratio must lie in [0, 1], got {}",
                self.emissive_ratio
            )));
        }

        Ok(())
    }

    /// Applies `[scene_name] [object_count] [plane_count]`. The object count
    /// sets spheres, cylinders and cones alike; extra arguments are ignored.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        if let Some(name) = args.first() {
            self.scene_name = name.clone();
        }
        if let Some(count) = args.get(1) {
            let count = parse_count("object_count", count)?;
            self.sphere_nb = count;
            self.cylinder_nb = count;
            self.cone_nb = count;
        }
        if let Some(count) = args.get(2) {
            self.plane_nb = parse_count("plane_count", count)?;
        }
        if args.len() > 3 {
            log::warn!("Ignoring extra arguments: {:?}", &args[3..]);
        }

        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.scene_name)
    }

    pub fn total_count(&self) -> usize {
        self.sphere_nb + self.cylinder_nb + self.cone_nb + self.plane_nb
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| Error::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlashbackConfig {
    pub image_dir: PathBuf,
    pub output: PathBuf,
    pub layout: FlashbackLayout,
}

impl Default for FlashbackConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("textures/flashback"),
            output: PathBuf::from("scenes/flashback.json"),
            layout: FlashbackLayout::Gallery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenshotConfig {
    pub dir: PathBuf,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("textures/screenshots"),
        }
    }
}
