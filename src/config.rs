// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const MIN_FRAME_RATE: u32 = 1;
pub const MAX_FRAME_RATE: u32 = 120;
pub const MIN_ROTATION_STEP: f64 = 0.001;
pub const MAX_ROTATION_STEP: f64 = 0.1;
const DEFAULT_ROTATION_STEP: f64 = 0.01;

// --- Animation ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
  pub enabled: bool,
  pub frame_rate: u32,
  /// Radians added to the rotation angle each frame.
  pub rotation_step: f64,
}

impl Default for AnimationSettings {
  fn default() -> Self {
    Self {
      enabled: true,
      frame_rate: 30,
      rotation_step: DEFAULT_ROTATION_STEP,
    }
  }
}

impl AnimationSettings {
  /// Frame rate clamped into the supported range.
  pub fn effective_frame_rate(&self) -> u32 {
    self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
  }

  /// Rotation step clamped into the supported range. The angle must only
  /// ever grow, so zero, negative and non-finite steps use the default.
  pub fn effective_rotation_step(&self) -> f64 {
    if self.rotation_step.is_finite() && self.rotation_step > 0.0 {
      self.rotation_step.clamp(MIN_ROTATION_STEP, MAX_ROTATION_STEP)
    } else {
      DEFAULT_ROTATION_STEP
    }
  }
}

// --- DiagramStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
  pub background_color: (f64, f64, f64),
  pub nucleus_color: (f64, f64, f64),
  pub electron_color: (f64, f64, f64),
  pub orbit_color: (f64, f64, f64),
  pub show_shell_counts: bool,
}

impl Default for DiagramStyle {
  fn default() -> Self {
    Self {
      background_color: (0.1, 0.1, 0.1),
      nucleus_color: (1.0, 0.25, 0.0),
      electron_color: (0.0, 0.67, 1.0),
      orbit_color: (0.3, 0.3, 0.3),
      show_shell_counts: true,
    }
  }
}

// --- Window ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
  pub width: i32,
  pub height: i32,
  pub show_console: bool,
}

impl Default for WindowSettings {
  fn default() -> Self {
    Self {
      width: 1400,
      height: 900,
      show_console: true,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub animation: AnimationSettings,

  #[serde(default)]
  pub style: DiagramStyle,

  #[serde(default)]
  pub window: WindowSettings,

  /// Pixel edge of exported raster diagrams.
  #[serde(default = "default_export_size")]
  pub export_size: u32,
}

fn default_export_size() -> u32 {
  600
}

impl Default for Config {
  fn default() -> Self {
    Self {
      animation: AnimationSettings::default(),
      style: DiagramStyle::default(),
      window: WindowSettings::default(),
      export_size: default_export_size(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/ptable/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    // Must match the application id in main.rs
    if let Some(proj) = ProjectDirs::from("org", "ptable", "ptable") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::Rotation;

  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, msg) = Config::load_from(&dir.path().join("nope.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("defaults"));
  }

  #[test]
  fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut cfg = Config::default();
    cfg.animation.frame_rate = 60;
    cfg.style.show_shell_counts = false;
    cfg.export_size = 1024;

    let msg = cfg.save_to(&path);
    assert!(msg.starts_with("Config saved"), "{}", msg);

    let (loaded, _) = Config::load_from(&path);
    assert_eq!(loaded, cfg);
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "animation": { "frame_rate": 12 } }"#).unwrap();

    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.animation.frame_rate, 12);
    assert!(cfg.animation.enabled);
    assert_eq!(cfg.animation.rotation_step, 0.01);
    assert_eq!(cfg.export_size, 600);
    assert_eq!(cfg.window, WindowSettings::default());
  }

  #[test]
  fn test_corrupt_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{{{").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }

  #[test]
  fn test_frame_rate_is_clamped() {
    let mut anim = AnimationSettings::default();
    anim.frame_rate = 0;
    assert_eq!(anim.effective_frame_rate(), MIN_FRAME_RATE);
    anim.frame_rate = 1000;
    assert_eq!(anim.effective_frame_rate(), MAX_FRAME_RATE);
  }

  #[test]
  fn test_negative_rotation_step_from_file_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"animation":{"rotation_step":-0.5}}"#).unwrap();

    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.animation.rotation_step, -0.5);
    assert_eq!(cfg.animation.effective_rotation_step(), DEFAULT_ROTATION_STEP);

    let mut rotation = Rotation::new(cfg.animation.effective_rotation_step());
    let mut last = rotation.angle();
    for _ in 0..10 {
      let next = rotation.advance();
      assert!(next > last, "angle went from {} to {}", last, next);
      last = next;
    }
  }

  #[test]
  fn test_rotation_step_is_clamped() {
    let mut anim = AnimationSettings::default();
    anim.rotation_step = 0.0;
    assert_eq!(anim.effective_rotation_step(), DEFAULT_ROTATION_STEP);
    anim.rotation_step = f64::NAN;
    assert_eq!(anim.effective_rotation_step(), DEFAULT_ROTATION_STEP);
    anim.rotation_step = f64::INFINITY;
    assert_eq!(anim.effective_rotation_step(), DEFAULT_ROTATION_STEP);
    anim.rotation_step = 0.00001;
    assert_eq!(anim.effective_rotation_step(), MIN_ROTATION_STEP);
    anim.rotation_step = 3.0;
    assert_eq!(anim.effective_rotation_step(), MAX_ROTATION_STEP);
    anim.rotation_step = 0.05;
    assert_eq!(anim.effective_rotation_step(), 0.05);
  }
}
