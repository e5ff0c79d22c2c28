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

use crate::cmd::{Command, config::ConfigSettings};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "mortal-era/config.toml";

#[derive(Debug, Clone, Parser)]
pub struct Opts {
    /// Increase verbosity level, maximum is 3.
    #[clap(short, long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Path to the configuration file.
    ///
    /// Defaults to `mortal-era/config.toml` in the user's config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    opts: Opts,
}

impl App {
    /// Constructs new application instance.
    pub fn new(opts: Opts) -> Self {
        Self { opts }
    }

    pub fn run(self, command: Command) -> Result<()> {
        let name = env!("CARGO_CRATE_NAME");
        let filter = if env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            EnvFilter::from_default_env()
        } else {
            match self.opts.verbosity {
                0 => format!("{name}=info,mortal_era=info").into(),
                1 => format!("{name}=debug,mortal_era=debug").into(),
                2 => "debug".into(),
                _ => "trace".into(),
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow!("{err}"))?;

        command.exec(&self)
    }

    /// Returns the location of the persistent configuration.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.opts.config {
            Some(path) => Ok(path.clone()),
            None => Ok(dirs::config_dir()
                .context("failed to get config directory")?
                .join(CONFIG_PATH)),
        }
    }

    /// Returns the persistent configuration.
    ///
    /// Falls back to defaults if nothing was written yet.
    pub fn config(&self) -> Result<ConfigSettings> {
        ConfigSettings::read(&self.config_path()?)
    }
}
