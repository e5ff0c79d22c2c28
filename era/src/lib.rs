// This file is part of Gear.

// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Transaction era encoding.
//!
//! A signed extrinsic carries an era describing the range of blocks it is
//! valid in. A mortal era is anchored to a birth block and lives for
//! `period` blocks, where `period` is a power of two in `[4, 65536]`. On the
//! wire it takes exactly two bytes: the low nibble holds the period exponent
//! and the remaining 12 bits hold the phase, quantized for long periods.
//!
//! ```
//! use mortal_era::{mortal_era, normalize};
//!
//! assert_eq!(normalize(50, 1000), (64, 40));
//! assert_eq!(mortal_era(50, 1000).to_bytes(), [0x85, 0x02]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub use era::Era;
pub use mortal::{MortalEra, encode, mortal_era, normalize, quantize_factor};

mod era;
mod mortal;

#[cfg(test)]
mod tests;

use derive_more::{Display, Error};

/// Length of the validity window, in blocks.
pub type Period = u64;

/// Offset of the era start within its period.
pub type Phase = u64;

/// The shortest period a mortal era may have.
pub const MIN_PERIOD: Period = 4;

/// The longest period a mortal era may have.
pub const MAX_PERIOD: Period = 1 << 16;

/// Bits available for the quantized phase in the encoded era.
pub const PHASE_BITS: u32 = 12;

/// Era decoding and validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EraError {
    /// Encoded era has a wrong number of bytes.
    #[display("Unexpected encoded era length {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// Period is not a power of two within `[4, 65536]`.
    #[display("Period {_0} is not a power of two in [4, 65536]")]
    InvalidPeriod(#[error(not(source))] Period),
    /// Phase does not fit into the period.
    #[display("Phase {phase} is out of range for period {period}")]
    PhaseOutOfRange {
        /// Period of the era.
        period: Period,
        /// Offending phase.
        phase: Phase,
    },
    /// Phase is not a multiple of the quantize factor of its period.
    #[display("Phase {phase} is not a multiple of {factor}")]
    UnalignedPhase {
        /// Offending phase.
        phase: Phase,
        /// Quantize factor of the period.
        factor: u64,
    },
}
