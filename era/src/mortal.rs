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

//! Normalization and 2-byte packing of mortal eras.

use crate::{EraError, MAX_PERIOD, MIN_PERIOD, PHASE_BITS, Period, Phase};
use core::fmt;
#[cfg(feature = "codec")]
use scale_info::{
    TypeInfo,
    scale::{self, Decode, Encode, MaxEncodedLen},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mask of the period exponent nibble.
const EXPONENT_MASK: u16 = 0xF;

/// Returns the divisor applied to the phase of an era with the given period.
///
/// Periods above `1 << 12` can't encode every phase in the 12 available bits,
/// so the phase is stored in units of `period >> 12`.
pub const fn quantize_factor(period: Period) -> u64 {
    let factor = period >> PHASE_BITS;
    if factor > 1 { factor } else { 1 }
}

/// Describes a mortal era from a requested validity period and the block
/// it should start at.
///
/// The period is rounded up to the next power of two and clamped into
/// `[4, 65536]`. The phase is `birth_block_number` reduced modulo the period
/// and rounded down to a multiple of [`quantize_factor`].
pub fn normalize(validity_period: u64, birth_block_number: u64) -> (Period, Phase) {
    let (period, clamped) = period_of(validity_period);

    if clamped {
        log::trace!("validity period {validity_period} clamped to {period}");
    }

    let factor = quantize_factor(period);
    let phase = birth_block_number % period / factor * factor;

    (period, phase)
}

/// Rounds `validity_period` up to a power of two within `[4, 65536]`.
///
/// The flag is set when one of the bounds had to be applied.
fn period_of(validity_period: u64) -> (Period, bool) {
    let rounded = validity_period.checked_next_power_of_two();
    let period = rounded.unwrap_or(MAX_PERIOD).clamp(MIN_PERIOD, MAX_PERIOD);

    (period, rounded != Some(period))
}

/// Packs `period` and `phase` into a [`MortalEra`].
///
/// Inputs are trusted: `period` must be a power of two in `[4, 65536]` and
/// `phase` must be below it, as returned by [`normalize`]. Nothing is checked
/// here. For other inputs the exponent nibble is still derived from the
/// trailing zeros of the raw `period` (clamped into `[1, 15]`) and the
/// quantized phase is truncated to 12 bits, so the result is well defined but
/// does not describe the given window. Use [`MortalEra::try_new`] for
/// untrusted input.
pub const fn encode(period: Period, phase: Phase) -> MortalEra {
    let factor = quantize_factor(period);

    let exponent = period.trailing_zeros().saturating_sub(1);
    let exponent = if exponent < 1 {
        1
    } else if exponent > 15 {
        15
    } else {
        exponent
    };

    let encoded = (((phase / factor) as u16) << 4) | exponent as u16;

    MortalEra::from_u16(encoded)
}

/// Computes the mortal era for a transaction valid for `validity_period`
/// blocks starting at `birth_block_number`.
///
/// Callers signing against the latest header usually pass its number minus
/// one, leaving a block of slack for propagation.
pub fn mortal_era(validity_period: u64, birth_block_number: u64) -> MortalEra {
    let (period, phase) = normalize(validity_period, birth_block_number);
    encode(period, phase)
}

/// Two-byte encoding of a mortal era.
///
/// `first` is the low byte and `second` the high byte of a little-endian
/// 16-bit word whose low nibble is the period exponent and whose upper
/// 12 bits are the quantized phase.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "codec", derive(TypeInfo, Encode, Decode, MaxEncodedLen), codec(crate = scale))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MortalEra {
    /// Low byte.
    pub first: u8,
    /// High byte.
    pub second: u8,
}

impl MortalEra {
    /// Encodes a validated `(period, phase)` pair.
    pub fn try_new(period: Period, phase: Phase) -> Result<Self, EraError> {
        if !period.is_power_of_two() || !(MIN_PERIOD..=MAX_PERIOD).contains(&period) {
            return Err(EraError::InvalidPeriod(period));
        }

        if phase >= period {
            return Err(EraError::PhaseOutOfRange { period, phase });
        }

        let factor = quantize_factor(period);
        if phase % factor != 0 {
            return Err(EraError::UnalignedPhase { phase, factor });
        }

        Ok(encode(period, phase))
    }

    /// Splits the 16-bit word into its wire bytes.
    pub const fn from_u16(encoded: u16) -> Self {
        let [first, second] = encoded.to_le_bytes();
        Self { first, second }
    }

    /// Builds the era from its wire bytes.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            first: bytes[0],
            second: bytes[1],
        }
    }

    /// Returns the wire bytes.
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.first, self.second]
    }

    /// Returns the packed 16-bit word.
    pub const fn to_u16(self) -> u16 {
        u16::from_le_bytes(self.to_bytes())
    }

    /// The low nibble, `log2(period) - 1` for a well-formed era.
    pub const fn period_exponent(self) -> u8 {
        (self.to_u16() & EXPONENT_MASK) as u8
    }

    /// The upper 12 bits, the phase divided by the quantize factor.
    pub const fn quantized_phase(self) -> u16 {
        self.to_u16() >> 4
    }

    /// Recovers `(period, phase)` the way a node validates the era.
    ///
    /// The phase comes back as a multiple of the quantize factor, which is
    /// exactly what [`normalize`] produces.
    pub fn params(self) -> Result<(Period, Phase), EraError> {
        let period: Period = 2 << self.period_exponent();
        let phase = self.quantized_phase() as Phase * quantize_factor(period);

        if period < MIN_PERIOD {
            return Err(EraError::InvalidPeriod(period));
        }

        if phase >= period {
            return Err(EraError::PhaseOutOfRange { period, phase });
        }

        Ok((period, phase))
    }
}

impl From<MortalEra> for u16 {
    fn from(era: MortalEra) -> Self {
        era.to_u16()
    }
}

impl From<u16> for MortalEra {
    fn from(encoded: u16) -> Self {
        Self::from_u16(encoded)
    }
}

impl From<[u8; 2]> for MortalEra {
    fn from(bytes: [u8; 2]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for MortalEra {
    type Error = EraError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 2]>::try_from(bytes)
            .map(Self::from_bytes)
            .map_err(|_| EraError::InvalidLength(bytes.len()))
    }
}

impl fmt::Debug for MortalEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MortalEra(0x{:02x}{:02x})", self.first, self.second)
    }
}

impl fmt::Display for MortalEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}{:02x}", self.first, self.second)
    }
}
