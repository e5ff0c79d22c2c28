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

//! Commands
use crate::app::App;
use anyhow::Result;
use clap::Parser;

pub mod config;
pub mod decode;
pub mod lifetime;
pub mod mortal;

pub use self::{config::Config, decode::Decode, lifetime::Lifetime, mortal::Mortal};

/// All supported commands.
#[derive(Clone, Debug, Parser)]
pub enum Command {
    Mortal(Mortal),
    Decode(Decode),
    Lifetime(Lifetime),
    Config(Config),
}

impl Command {
    /// Execute the command.
    pub fn exec(self, app: &App) -> Result<()> {
        match self {
            Command::Mortal(mortal) => mortal.exec(app),
            Command::Decode(decode) => decode.exec(),
            Command::Lifetime(lifetime) => lifetime.exec(),
            Command::Config(config) => config.exec(app),
        }
    }
}
