//! Application settings loaded from TOML.
//!
//! Every field has a default, so a config file only needs to name the values
//! it changes.

use ::{
    ash::vk,
    serde::{Deserialize, Serialize},
    std::path::{Path, PathBuf},
    thiserror::Error,
};

/// The environment variable which names a config file to load.
pub const CONFIG_PATH_VAR: &str = "VK_SCENES_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read the config file at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse the config")]
    Parse(#[from] toml::de::Error),

    #[error("Unable to serialize the config")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// The camera controller used by scenes which let the user pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraKind {
    Orbit,
    Free,
}

/// The requested presentation mode. FIFO is used whenever the requested mode
/// is not supported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentModePreference {
    Fifo,
    Mailbox,
    Immediate,
}

impl PresentModePreference {
    pub fn to_vk(self) -> vk::PresentModeKHR {
        match self {
            Self::Fifo => vk::PresentModeKHR::FIFO,
            Self::Mailbox => vk::PresentModeKHR::MAILBOX,
            Self::Immediate => vk::PresentModeKHR::IMMEDIATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    /// Enable the Khronos validation layer and route its messages into the
    /// logger.
    pub enable_validation: bool,

    pub present_mode: PresentModePreference,

    /// The frame rate limiter's target.
    pub target_fps: u32,

    /// Log the average FPS once per this many frames.
    pub fps_log_interval: u32,

    /// The directory which holds compiled `.spv` shaders.
    pub shader_dir: PathBuf,

    pub camera: CameraKind,

    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub near_plane: f32,
    pub far_plane: f32,

    pub grid_half_size: u32,
    pub clear_color: [f32; 4],

    /// The log spec used when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Example".to_owned(),
            window_width: 480,
            window_height: 360,
            enable_validation: cfg!(debug_assertions),
            present_mode: PresentModePreference::Fifo,
            target_fps: 120,
            fps_log_interval: 60,
            shader_dir: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/shaders"
            )),
            camera: CameraKind::Orbit,
            field_of_view: 60.0,
            near_plane: 0.5,
            far_plane: 50.0,
            grid_half_size: 5,
            clear_color: [1.0, 1.0, 1.0, 1.0],
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Read and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_owned(),
                source,
            })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `VK_SCENES_CONFIG`, or use the defaults when
    /// the variable is not set.
    pub fn from_env_or_default() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window_width/window_height",
                reason: format!(
                    "the window must not be empty, got {}x{}",
                    self.window_width, self.window_height
                ),
            });
        }
        if !(self.field_of_view > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "field_of_view",
                reason: format!("must be positive, got {}", self.field_of_view),
            });
        }
        if !(self.near_plane < self.far_plane) {
            return Err(ConfigError::InvalidValue {
                field: "near_plane",
                reason: format!(
                    "must be less than far_plane ({} >= {})",
                    self.near_plane, self.far_plane
                ),
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "target_fps",
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window_title, "Example");
        assert_eq!((config.window_width, config.window_height), (480, 360));
        assert_eq!(config.present_mode, PresentModePreference::Fifo);
        assert_eq!(config.camera, CameraKind::Orbit);
    }

    #[test]
    fn partial_documents_override_named_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            window_title = "Grid"
            present_mode = "mailbox"
            camera = "free"
            clear_color = [0.0, 0.0, 0.0, 1.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.window_title, "Grid");
        assert_eq!(config.present_mode.to_vk(), vk::PresentModeKHR::MAILBOX);
        assert_eq!(config.camera, CameraKind::Free);
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.target_fps, 120);
    }

    #[test]
    fn unknown_present_modes_are_parse_errors() {
        let result = AppConfig::from_toml_str(r#"present_mode = "vsync""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn near_plane_must_be_in_front_of_far_plane() {
        let result =
            AppConfig::from_toml_str("near_plane = 10.0\nfar_plane = 1.0");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "near_plane",
                ..
            })
        ));
    }

    #[test]
    fn zero_sized_windows_are_rejected() {
        let result = AppConfig::from_toml_str("window_width = 0");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn field_of_view_and_fps_must_be_positive() {
        assert!(AppConfig::from_toml_str("field_of_view = 0.0").is_err());
        assert!(AppConfig::from_toml_str("target_fps = 0").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.grid_half_size = 12;
        config.present_mode = PresentModePreference::Immediate;
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_files_report_their_path() {
        let result = AppConfig::load("/definitely/not/a/config.toml");
        match result {
            Err(ConfigError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/a/config.toml"))
            }
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
