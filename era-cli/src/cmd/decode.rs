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

//! command `decode`
use crate::utils;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use mortal_era::{Era, MortalEra};

/// Inspect an encoded era.
#[derive(Clone, Debug, Parser)]
pub struct Decode {
    /// Encoded era as hex, `0x00` for an immortal one.
    pub era: String,
}

impl Decode {
    pub fn exec(self) -> Result<()> {
        let bytes = utils::hex_to_vec(&self.era)?;
        let era = Era::from_bytes(&bytes).context("failed to decode era")?;

        match era {
            Era::Immortal => println!("{} immortal", "Kind:".bold()),
            Era::Mortal(period, phase) => {
                let encoded = MortalEra::try_from(bytes.as_slice())?;

                println!("{} mortal", "Kind:".bold());
                println!("{} {}", "Period exponent:".bold(), encoded.period_exponent());
                println!("{} {}", "Quantized phase:".bold(), encoded.quantized_phase());
                println!("{} {period}", "Period:".bold());
                println!("{} {phase}", "Phase:".bold());
            }
        }

        Ok(())
    }
}
