//! Build-time configuration
//!
//! `APP_CONFIG` is generated by build.rs from atom.toml after validation,
//! so it is known to be consistent with the panel.

use nucleon_core::{AppConfig, DisplayConfig, SceneConfig};

include!(concat!(env!("OUT_DIR"), "/app_config.rs"));
