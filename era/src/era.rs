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

use crate::{
    EraError, MortalEra, Period, Phase,
    mortal::{self, normalize},
};
use alloc::{vec, vec::Vec};
#[cfg(feature = "codec")]
use scale_info::scale::{self, Decode, Encode, EncodeLike, Input, MaxEncodedLen, Output};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Longevity of a transaction.
///
/// ```text
/// period = 4, phase = 1
///
/// 0         10        20
/// 012345678901234567890123
///              |...|
///    authored -/   \- expiry
/// ```
///
/// A mortal era built by hand rather than through [`Era::mortal`] or
/// decoding may break the period and phase invariants; [`Era::check`]
/// tells whether it holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Valid forever.
    Immortal,
    /// Valid for `period` blocks starting at a block whose number is
    /// `phase` modulo `period`.
    Mortal(Period, Phase),
}

impl Era {
    /// Creates an era that never expires.
    pub const fn immortal() -> Self {
        Self::Immortal
    }

    /// Creates a mortal era; see [`normalize`].
    pub fn mortal(validity_period: u64, birth_block_number: u64) -> Self {
        let (period, phase) = normalize(validity_period, birth_block_number);
        Self::Mortal(period, phase)
    }

    /// Returns `true` for [`Era::Immortal`].
    pub const fn is_immortal(&self) -> bool {
        matches!(self, Self::Immortal)
    }

    /// Validates the period and phase of a mortal era.
    pub fn check(self) -> Result<Self, EraError> {
        self.to_mortal().map(|_| self)
    }

    /// Block number of the start of the era instance that `current` belongs to.
    ///
    /// A zero period is treated as one, so malformed eras give meaningless
    /// numbers instead of panicking.
    pub fn birth(self, current: u64) -> u64 {
        match self {
            Self::Immortal => 0,
            Self::Mortal(period, phase) => {
                let period = period.max(1);
                (current.max(phase) - phase) / period * period + phase
            }
        }
    }

    /// First block number at which the era instance containing `current`
    /// has ended.
    pub fn death(self, current: u64) -> u64 {
        match self {
            Self::Immortal => u64::MAX,
            Self::Mortal(period, _) => self.birth(current).saturating_add(period),
        }
    }

    /// Two-byte wire form of a mortal era, `None` for immortal ones.
    pub fn to_mortal(self) -> Result<Option<MortalEra>, EraError> {
        match self {
            Self::Immortal => Ok(None),
            Self::Mortal(period, phase) => MortalEra::try_new(period, phase).map(Some),
        }
    }

    /// Wire bytes of the era.
    pub fn to_bytes(self) -> Result<Vec<u8>, EraError> {
        Ok(match self.to_mortal()? {
            None => vec![0],
            Some(era) => era.to_bytes().to_vec(),
        })
    }

    /// Parses the wire bytes of an era.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EraError> {
        match bytes {
            [0] => Ok(Self::Immortal),
            [_, _] => MortalEra::try_from(bytes)?.try_into(),
            _ => Err(EraError::InvalidLength(bytes.len())),
        }
    }
}

impl Default for Era {
    fn default() -> Self {
        Self::Immortal
    }
}

impl TryFrom<MortalEra> for Era {
    type Error = EraError;

    fn try_from(era: MortalEra) -> Result<Self, Self::Error> {
        let (period, phase) = era.params()?;
        Ok(Self::Mortal(period, phase))
    }
}

#[cfg(feature = "codec")]
impl Encode for Era {
    fn size_hint(&self) -> usize {
        if self.is_immortal() { 1 } else { 2 }
    }

    // Encoding can't fail, so malformed mortal eras are packed unchecked.
    fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
        match *self {
            Self::Immortal => dest.push_byte(0),
            Self::Mortal(period, phase) => dest.write(&mortal::encode(period, phase).to_bytes()),
        }
    }
}

#[cfg(feature = "codec")]
impl EncodeLike for Era {}

#[cfg(feature = "codec")]
impl Decode for Era {
    fn decode<I: Input>(input: &mut I) -> Result<Self, scale::Error> {
        let first = input.read_byte()?;
        if first == 0 {
            return Ok(Self::Immortal);
        }

        let second = input.read_byte()?;
        MortalEra::from_bytes([first, second])
            .try_into()
            .map_err(|_| scale::Error::from("invalid mortal era"))
    }
}

#[cfg(feature = "codec")]
impl MaxEncodedLen for Era {
    fn max_encoded_len() -> usize {
        2
    }
}

#[cfg(feature = "serde")]
impl Serialize for Era {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_bytes().map_err(ser::Error::custom)?.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Era {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}
