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

//! Era cli utils

use anyhow::{Context, Result};

/// Decodes an optionally `0x`-prefixed hex string.
pub fn hex_to_vec(string: impl AsRef<str>) -> Result<Vec<u8>> {
    let string = string.as_ref();

    hex::decode(string.trim_start_matches("0x")).with_context(|| format!("invalid hex `{string}`"))
}

/// Formats bytes as `0x`-prefixed hex.
pub fn vec_to_hex(bytes: impl AsRef<[u8]>) -> String {
    ["0x", &hex::encode(bytes)].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(hex_to_vec("0x8502").unwrap(), vec![0x85, 0x02]);
        assert_eq!(hex_to_vec("8502").unwrap(), vec![0x85, 0x02]);
        assert!(hex_to_vec("0x850").is_err());
        assert!(hex_to_vec("zz").is_err());
    }

    #[test]
    fn hex_is_prefixed() {
        assert_eq!(vec_to_hex([0x85, 0x02]), "0x8502");
        assert_eq!(vec_to_hex([0u8; 0]), "0x");
    }
}
