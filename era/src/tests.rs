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

//! Property testing for era normalization and packing.

use crate::{Era, MAX_PERIOD, MIN_PERIOD, MortalEra, encode, mortal_era, normalize, quantize_factor};
use proptest::{prelude::any, proptest, test_runner::Config as ProptestConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    #[test]
    fn period_is_clamped_power_of_two(validity in 0u64..=100_000, birth in 0u64..=1_000_000_000) {
        let (period, _) = normalize(validity, birth);

        assert!(period.is_power_of_two());
        assert!((MIN_PERIOD..=MAX_PERIOD).contains(&period));
        if validity > MIN_PERIOD && validity <= MAX_PERIOD {
            assert!(period >= validity && period / 2 < validity);
        }
    }

    #[test]
    fn phase_is_quantized_within_period(validity in 0u64..=100_000, birth in 0u64..=1_000_000_000) {
        let (period, phase) = normalize(validity, birth);
        let factor = quantize_factor(period);

        assert!(phase < period);
        assert_eq!(phase % factor, 0);
        assert!(birth % period - phase < factor);
    }

    #[test]
    fn encoding_is_deterministic(validity in any::<u64>(), birth in any::<u64>()) {
        assert_eq!(mortal_era(validity, birth), mortal_era(validity, birth));
    }

    #[test]
    fn packing_is_lossless(validity in 0u64..=100_000, birth in 0u64..=1_000_000_000) {
        let (period, phase) = normalize(validity, birth);
        let era = encode(period, phase);
        let encoded = era.to_u16();

        assert_eq!(era.period_exponent() as u16, encoded & 0xF);
        assert_eq!(era.quantized_phase(), encoded >> 4);
        assert_eq!(1u64 << (era.period_exponent() + 1), period);
        assert_eq!(era.quantized_phase() as u64, phase / quantize_factor(period));
        assert_eq!(MortalEra::from_bytes(era.to_bytes()), era);
    }

    #[test]
    fn node_recovers_normalized_window(validity in any::<u64>(), birth in any::<u64>()) {
        let (period, phase) = normalize(validity, birth);
        let era = mortal_era(validity, birth);

        assert_eq!(era.params(), Ok((period, phase)));
        assert_eq!(MortalEra::try_new(period, phase), Ok(era));
    }

    #[test]
    fn birth_block_lies_in_its_window(validity in 0u64..=100_000, birth in 0u64..=1_000_000_000, offset in 0u64..65_536) {
        let era = Era::mortal(validity, birth);
        let Era::Mortal(period, _) = era else { unreachable!() };
        let current = birth + offset % period;
        let start = era.birth(current);

        assert!(start <= current);
        assert!(current < era.death(current));
        assert_eq!(era.death(current) - start, period);
    }
}
