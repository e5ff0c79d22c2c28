// This file is part of Gear.
//
// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::app::App;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Validity period used when none is given on the command line.
pub const DEFAULT_VALIDITY: u64 = 50;

/// Access `era` persistent configuration.
#[derive(Clone, Debug, Parser)]
pub struct Config {
    #[clap(subcommand)]
    action: Action,
}

impl Config {
    pub fn exec(self, app: &App) -> Result<()> {
        let path = app.config_path()?;
        let mut config = ConfigSettings::read(&path)?;

        match self.action {
            Action::Set(option) => {
                config.set(option);
                config
                    .write(&path)
                    .context("failed to write new configuration")?;

                println!("Successfully updated the configuration");
                println!();
                config.pretty_print();
            }
            Action::Get => config.pretty_print(),
            Action::Reset => {
                config = ConfigSettings::default();
                config
                    .write(&path)
                    .context("failed to write new configuration")?;

                println!("Successfully reset the configuration");
                println!();
                config.pretty_print();
            }
        }

        Ok(())
    }
}

/// `era` persistent configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigSettings {
    /// Default validity period, in blocks.
    #[serde(default = "default_validity")]
    pub validity: u64,
}

fn default_validity() -> u64 {
    DEFAULT_VALIDITY
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            validity: DEFAULT_VALIDITY,
        }
    }
}

#[derive(Debug, Clone, Parser)]
enum ConfigOption {
    /// Sets the default validity period.
    Validity {
        /// Number of blocks a transaction stays valid.
        validity: u64,
    },
}

/// Config action
#[derive(Clone, Debug, Parser)]
enum Action {
    /// Set a persistent option.
    #[clap(subcommand)]
    Set(ConfigOption),
    /// Print current configuration.
    Get,
    /// Reset the persistent configuration.
    Reset,
}

impl ConfigSettings {
    /// Reads the configuration from disk.
    pub fn read(path: &Path) -> Result<ConfigSettings> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;

            toml::from_str(&contents).context("failed to parse configuration")
        } else {
            tracing::debug!("no configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Sets the configuration option.
    fn set(&mut self, option: ConfigOption) {
        match option {
            ConfigOption::Validity { validity } => self.validity = validity,
        }
    }

    /// Writes the configuration to disk.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;

        Ok(fs::write(path, contents)?)
    }

    /// Pretty-prints the configuration.
    pub fn pretty_print(&self) {
        println!("{} {}", "Validity:".bold(), self.validity)
    }
}
