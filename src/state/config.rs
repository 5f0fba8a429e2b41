//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing the default
//! network and user-defined custom networks.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/fuel-palette/config.json`
//! - macOS: `~/Library/Application Support/fuel-palette/config.json`
//! - Windows: `%APPDATA%/fuel-palette/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::{CustomNetwork, FetchError, Network, NetworkConfig};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "fuel-palette";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Network used when no `--network` flag is given.
    #[serde(default)]
    pub network: NetworkConfig,
    /// List of user-defined custom networks.
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// A missing file yields the defaults silently; an unreadable one yields
    /// the defaults with a warning.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file exists but cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Adds a custom network and saves the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a network with the same name exists (including the
    /// built-in names) or if saving fails.
    pub fn add_custom_network(&mut self, network: CustomNetwork) -> Result<()> {
        self.insert_custom_network(network)?;
        self.save()
    }

    fn insert_custom_network(&mut self, network: CustomNetwork) -> Result<()> {
        let name_taken = Network::ALL
            .iter()
            .any(|builtin| builtin.as_str().eq_ignore_ascii_case(&network.name))
            || self.custom_networks.iter().any(|n| n.name == network.name);
        if name_taken {
            return Err(color_eyre::eyre::eyre!(
                "Network '{}' already exists",
                network.name
            ));
        }
        self.custom_networks.push(network);
        Ok(())
    }

    /// Deletes a custom network by name and saves the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the network is not found or if saving fails.
    pub fn delete_custom_network(&mut self, name: &str) -> Result<()> {
        self.remove_custom_network(name)?;
        self.save()
    }

    fn remove_custom_network(&mut self, name: &str) -> Result<()> {
        let original_len = self.custom_networks.len();
        self.custom_networks.retain(|n| n.name != name);

        if self.custom_networks.len() == original_len {
            return Err(color_eyre::eyre::eyre!("Network '{}' not found", name));
        }

        // Fall back to the default network if the deleted one was selected
        if let NetworkConfig::Custom(ref current) = self.network
            && current.name == name
        {
            self.network = NetworkConfig::default();
        }
        Ok(())
    }

    /// Returns all available networks (built-in + custom).
    #[must_use]
    pub fn get_all_networks(&self) -> Vec<NetworkConfig> {
        Network::ALL
            .into_iter()
            .map(NetworkConfig::BuiltIn)
            .chain(self.custom_networks.iter().cloned().map(NetworkConfig::Custom))
            .collect()
    }

    /// Resolves a network name to its configuration.
    ///
    /// Built-in names match case-insensitively and win over custom networks.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidInput` if no network has that name.
    pub fn resolve_network(&self, name: &str) -> Result<NetworkConfig, FetchError> {
        if let Ok(builtin) = name.parse::<Network>() {
            return Ok(NetworkConfig::BuiltIn(builtin));
        }
        self.custom_networks
            .iter()
            .find(|n| n.name == name.trim())
            .cloned()
            .map(NetworkConfig::Custom)
            .ok_or_else(|| FetchError::invalid_input(format!("Unknown network '{}'", name.trim())))
    }
}

// ============================================================================
// Tests
// ============================================================================
