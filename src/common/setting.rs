//! setting config file
//! - `ENV` picks `config_{ENV}.toml`, default `dev`
//! - a missing file falls back to built-in defaults

use std::{fs::File, io::Read, path::Path};
use lazy_static::lazy_static;
use serde_derive::Deserialize;
use std::env;
use super::error::{DriverError, ErrorCode};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Env {
    pub debug: bool,
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Serial {
    // device path used when none is given on the command line
    pub port: String,
    // upper bound of the ready handshake wait
    pub ready_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub env: Env,
    pub serial: Serial,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            env: Env {
                debug: false,
                env: String::from("dev"),
                log_level: String::from("info"),
            },
            serial: Serial {
                port: String::from("/dev/ttyUSB0"),
                ready_timeout_ms: 10_000,
            },
        }
    }
}

impl Settings {
    pub fn get<'a>() -> &'a Self {
        lazy_static! {
            static ref CACHE: Settings = Settings::from_env();
        }
        &CACHE
    }

    /// load `config_{ENV}.toml` from the working directory
    fn from_env() -> Self {
        let env = match env::var("ENV") {
            Ok(e) => e,
            Err(_) => {
                log::warn!("no ENV set, use default: 'dev'");
                String::from("dev")
            }
        };

        let file_path = format!("config_{}.toml", env);
        if !Path::new(&file_path).exists() {
            log::warn!("no config file {}, use default settings", file_path);
            return Settings::default();
        }

        match Settings::load(&file_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("cannot load config file {}, use default settings: {}", file_path, e);
                Settings::default()
            }
        }
    }

    /// read and parse one config file
    pub fn load(file_path: &str) -> Result<Self, DriverError> {
        let mut file = File::open(file_path).map_err(|e| {
            DriverError::new(ErrorCode::ConfigError, format!("no such file {} exception: {}", file_path, e))
        })?;

        let mut str_val = String::new();
        file.read_to_string(&mut str_val).map_err(|e| {
            DriverError::new(ErrorCode::ConfigError, format!("cannot read config file: {}", e))
        })?;

        Settings::parse(&str_val)
    }

    pub fn parse(str_val: &str) -> Result<Self, DriverError> {
        Ok(toml::from_str(str_val)?)
    }
}
