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

//! command `mortal`
use crate::{app::App, utils};
use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use mortal_era::{encode, normalize, quantize_factor};

/// Compute the mortal era of a transaction.
#[derive(Clone, Debug, Parser)]
pub struct Mortal {
    /// Number of blocks the transaction stays valid.
    ///
    /// Falls back to the configured default.
    #[arg(long)]
    pub validity: Option<u64>,

    /// Block number the era starts at.
    #[arg(short, long, conflicts_with = "current")]
    pub birth: Option<u64>,

    /// Number of the latest block, the era starts one block before it.
    #[arg(short, long)]
    pub current: Option<u64>,
}

impl Mortal {
    pub fn exec(self, app: &App) -> Result<()> {
        let validity = match self.validity {
            Some(validity) => validity,
            None => app.config()?.validity,
        };

        let birth = match (self.birth, self.current) {
            (Some(birth), _) => birth,
            (None, Some(current)) => current.saturating_sub(1),
            (None, None) => bail!("either `--birth` or `--current` is required"),
        };

        tracing::debug!("computing era for validity {validity} from block #{birth}");

        let (period, phase) = normalize(validity, birth);
        let era = encode(period, phase);

        println!("{} {period}", "Period:".bold());
        println!("{} {phase}", "Phase:".bold());
        println!("{} {}", "Quantize factor:".bold(), quantize_factor(period));
        println!("{} {}", "Era:".bold(), utils::vec_to_hex(era.to_bytes()));
        println!("{} {:#04x} {:#04x}", "Bytes:".bold(), era.first, era.second);

        Ok(())
    }
}
