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

//! command `lifetime`
use crate::utils;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use mortal_era::Era;

/// Print the blocks an encoded era is valid between.
#[derive(Clone, Debug, Parser)]
pub struct Lifetime {
    /// Encoded era as hex.
    pub era: String,

    /// Block number to locate the era instance by.
    #[arg(short, long)]
    pub current: u64,
}

impl Lifetime {
    pub fn exec(self) -> Result<()> {
        let bytes = utils::hex_to_vec(&self.era)?;
        let era = Era::from_bytes(&bytes).context("failed to decode era")?;

        println!("{} #{}", "Birth:".bold(), era.birth(self.current));
        match era {
            Era::Immortal => println!("{} never", "Death:".bold()),
            Era::Mortal(..) => println!("{} #{}", "Death:".bold(), era.death(self.current)),
        }

        Ok(())
    }
}
