//! Manage the askwell configuration folder and its settings file.

use std::{
    collections::BTreeMap,
    fs,
    io::{Read, Write},
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use askwell_core::{FarewellTable, ValidationSpec, DEFAULT_ERROR_REPORT, DEFAULT_FAREWELL};
use regex::Regex;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    dialog,
    error::{Error, Result},
};

const DEFAULT_SETTING_FILE_NAME: &str = "settings.yaml";

/// Named validators shipped with a fresh settings file.
pub const DEFAULT_VALIDATORS: [(&str, &str); 2] = [
    ("email", r"^[^@\s]+@[^@\s]+\.[^@\s]+$"),
    ("slug", r"^[a-z0-9]+(-[a-z0-9]+)*$"),
];

/// Farewells shipped with a fresh settings file.
pub const DEFAULT_FAREWELLS: [(&str, &str); 2] = [
    ("grade_calculator", "Good luck with your grades!"),
    ("password_generator", "Keep your passwords safe!"),
];

/// describe configuration folder
#[derive(Debug)]
pub struct Config {
    /// Configuration folder path.
    pub root_folder: PathBuf,
    /// config file.
    pub setting_file_path: PathBuf,
}

/// A regex usable as a custom prompt rule.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NamedValidator {
    #[serde(with = "serde_regex")]
    pub pattern: Regex,
}

/// Describe the configuration yaml
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Printed on a normal exit when the module has no farewell.
    #[serde(default = "default_farewell")]
    pub default_farewell: String,
    /// Printed on an error exit.
    #[serde(default = "default_error_report")]
    pub error_report: String,
    /// Pause before exiting, in milliseconds.
    #[serde(default = "default_exit_pause_ms")]
    pub exit_pause_ms: u64,
    /// Farewell per module id.
    #[serde(default)]
    pub farewells: BTreeMap<String, String>,
    #[serde(default)]
    pub validators: BTreeMap<String, NamedValidator>,
}

fn default_farewell() -> String {
    DEFAULT_FAREWELL.to_string()
}

fn default_error_report() -> String {
    DEFAULT_ERROR_REPORT.to_string()
}

const fn default_exit_pause_ms() -> u64 {
    1000
}

impl Config {
    /// Get application setting config.
    ///
    /// # Errors
    ///
    /// Will return `Err` error return on load/save config
    pub fn new(path: Option<&str>) -> Result<Self> {
        let package_name = env!("CARGO_PKG_NAME");

        let config_folder = match path {
            Some(p) => PathBuf::from(p),
            None => match dirs::home_dir() {
                Some(p) => {
                    // $HOME/.askwell wins when it exists, otherwise the
                    // platform config dir is used
                    let homedir = p.join(format!(".{package_name}"));
                    let conf_dir = dirs::config_dir().unwrap_or_else(|| homedir.clone());
                    if homedir.is_dir() {
                        homedir
                    } else {
                        conf_dir.join(package_name)
                    }
                }
                None => return Err(Error::Config("could not get directory path".to_string())),
            },
        };

        let setting_config = Self {
            setting_file_path: config_folder.join(DEFAULT_SETTING_FILE_NAME),
            root_folder: config_folder,
        };

        setting_config.create_config_folder()?;
        setting_config.manage_setting_file()?;
        debug!(configuration = ?setting_config, "configuration settings loaded");
        Ok(setting_config)
    }

    /// Convert user settings yaml to struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` has an error when loading the config file
    pub fn get_settings_from_file(&self) -> Result<Settings> {
        Ok(serde_yaml::from_str(&self.read_config_file()?)?)
    }

    /// Manage setting folder & file.
    /// * Create default config yaml file if not exists.
    ///
    /// # Errors
    ///
    /// Will return `Err` file could not created or loaded
    pub fn manage_setting_file(&self) -> Result<()> {
        if fs::metadata(&self.setting_file_path).is_err() {
            debug!(path = %self.setting_file_path.display(), "setting file not found");
            self.create_default_settings_file()?;
        }
        debug!(settings = ?self.get_settings_from_file()?, "setting file loaded");
        Ok(())
    }

    /// Set the farewell printed when `module` exits.
    ///
    /// # Errors
    ///
    /// Will return `Err` error return on load/save config
    pub fn update_farewell(&self, module: &str, message: &str) -> Result<()> {
        let mut settings = self.get_settings_from_file()?;
        settings
            .farewells
            .insert(module.to_string(), message.to_string());
        self.save_settings_file_from_struct(&settings)
    }

    /// Remove the farewell of `module`. Returns whether there was one.
    ///
    /// # Errors
    ///
    /// Will return `Err` error return on load/save config
    pub fn remove_farewell(&self, module: &str) -> Result<bool> {
        let mut settings = self.get_settings_from_file()?;
        let removed = settings.farewells.remove(module).is_some();
        if removed {
            self.save_settings_file_from_struct(&settings)?;
        }
        Ok(removed)
    }

    /// Add or replace a named pattern validator.
    ///
    /// # Errors
    ///
    /// Will return `Err` when the pattern does not compile or on load/save
    /// config
    pub fn update_validator(&self, name: &str, pattern: &str) -> Result<()> {
        let pattern = Regex::new(pattern).map_err(askwell_core::Error::from)?;
        let mut settings = self.get_settings_from_file()?;
        settings
            .validators
            .insert(name.to_string(), NamedValidator { pattern });
        self.save_settings_file_from_struct(&settings)
    }

    /// Reset user configuration to the default app.
    ///
    /// # Errors
    ///
    /// Will return `Err` create config folder return an error
    pub fn reset_config(&self, force_selection: Option<usize>) -> Result<()> {
        let selected = if let Some(force_selection) = force_selection {
            force_selection
        } else {
            dialog::reset_config()?
        };

        match selected {
            0 => self.create_default_settings_file()?,
            1 => {
                let backup_to = self.backup()?;
                debug!(backup = %backup_to.display(), "settings file backed up");
                self.create_default_settings_file()?;
            }
            dialog::RESET_CANCEL => debug!("reset cancelled"),
            _ => return Err(Error::Config("unexpected option".to_string())),
        }
        Ok(())
    }

    /// Create config folder if not exists.
    fn create_config_folder(&self) -> Result<()> {
        if let Err(err) = fs::create_dir_all(&self.root_folder) {
            return Err(Error::Config(format!("could not create folder: {err}")));
        }
        debug!(path = %self.root_folder.display(), "configuration folder ready");
        Ok(())
    }

    /// Create config file from default template.
    fn create_default_settings_file(&self) -> Result<()> {
        self.save_settings_file_from_struct(&Settings::with_defaults()?)
    }

    /// Convert the given config to YAML format and the file.
    fn save_settings_file_from_struct(&self, settings: &Settings) -> Result<()> {
        let content = serde_yaml::to_string(settings)?;
        let mut file = fs::File::create(&self.setting_file_path)?;
        file.write_all(content.as_bytes())?;
        debug!(
            path = %self.setting_file_path.display(),
            settings = ?settings,
            "settings file saved"
        );
        Ok(())
    }

    /// Return config content.
    fn read_config_file(&self) -> Result<String> {
        let mut file = fs::File::open(&self.setting_file_path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    fn backup(&self) -> Result<PathBuf> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| Error::Config(err.to_string()))?;
        let mut backup_to = self.setting_file_path.clone().into_os_string();
        backup_to.push(format!(".{}.bak", now.as_secs()));
        let backup_to = PathBuf::from(backup_to);
        fs::rename(&self.setting_file_path, &backup_to)?;
        Ok(backup_to)
    }
}

impl Settings {
    /// Settings written to a fresh configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` when a default validator pattern does not compile
    pub fn with_defaults() -> Result<Self> {
        let validators = DEFAULT_VALIDATORS
            .iter()
            .map(|(name, pattern)| {
                Regex::new(pattern)
                    .map(|pattern| ((*name).to_string(), NamedValidator { pattern }))
                    .map_err(|err| Error::Core(err.into()))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            default_farewell: default_farewell(),
            error_report: default_error_report(),
            exit_pause_ms: default_exit_pause_ms(),
            farewells: DEFAULT_FAREWELLS
                .iter()
                .map(|(module, message)| ((*module).to_string(), (*message).to_string()))
                .collect(),
            validators,
        })
    }

    /// Read-only farewell lookup built from `farewells`.
    #[must_use]
    pub fn farewell_table(&self) -> FarewellTable {
        FarewellTable::new(self.farewells.clone())
    }

    /// A custom rule for the validator registered as `name`.
    ///
    /// # Errors
    ///
    /// Will return `Err` when there is no validator with that name
    pub fn validator(&self, name: &str) -> Result<ValidationSpec> {
        self.validators
            .get(name)
            .map(|named| ValidationSpec::matching(named.pattern.clone()))
            .ok_or_else(|| {
                askwell_core::Error::UnsupportedValidationName {
                    name: name.to_string(),
                }
                .into()
            })
    }
}
