use crate::ops::FALLBACK_IMAGE_SIZE;
use crate::UvIoError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tool configuration. `image_size` pins the UV pixel scale explicitly and
/// takes precedence over every loaded image; `fallback_size` is used when
/// neither an override nor an image is available.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub image_size: Option<(u32, u32)>,
    pub fallback_size: (u32, u32),
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            image_size: None,
            fallback_size: FALLBACK_IMAGE_SIZE,
            pretty_json: false,
        }
    }
}

impl Config {
    pub fn new(config_file: Option<&Path>) -> Result<Config, UvIoError> {
        use config::File;
        let mut s = config::Config::new();

        if let Some(config_file) = config_file {
            log::info!("Loading config file {:?}", config_file);
            s.merge(File::from(config_file)).map_err(|err| {
                UvIoError::Config(format!(
                    "configuration error in file ({}): {:?}",
                    config_file.display(),
                    err
                ))
            })?;
        }

        let cfg = s
            .try_into()
            .map_err(|err| UvIoError::Config(format!("configuration error: {:?}", err)))?;

        log::info!("configuration: {:#?}", cfg);
        Ok(cfg)
    }

    pub fn from_str(cfg: &str) -> Result<Config, UvIoError> {
        use config::{File, FileFormat};
        let mut s = config::Config::new();

        s.merge(File::from_str(cfg, FileFormat::Json))
            .map_err(|err| UvIoError::Config(format!("configuration error in input: {:?}", err)))?;

        let cfg = s
            .try_into()
            .map_err(|err| UvIoError::Config(format!("configuration error: {:?}", err)))?;

        log::info!("configuration: {:#?}", cfg);
        Ok(cfg)
    }
}
