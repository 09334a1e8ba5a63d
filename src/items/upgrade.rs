// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use bitflags::bitflags;
use serde::Deserialize;

use crate::items::gem::Gem;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UpgradeFlags: u8 {
        const SHIELD = 0b0001;
        const LASER  = 0b0010;
        const ENGINE = 0b0100;
        const RADAR  = 0b1000;
    }
}

/// Ship enhancement kinds. Declaration order is the display order.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
pub enum Upgrade {
    Shield,
    Laser,
    Engine,
    Radar,
}

impl Upgrade {
    pub const COUNT: usize = 4;

    pub const ALL: [Upgrade; Upgrade::COUNT] = [
        Upgrade::Shield,
        Upgrade::Laser,
        Upgrade::Engine,
        Upgrade::Radar,
    ];

    pub fn idx(self) -> usize {
        match self {
            Upgrade::Shield => 0,
            Upgrade::Laser  => 1,
            Upgrade::Engine => 2,
            Upgrade::Radar  => 3,
        }
    }

    pub fn to_small_string(self) -> &'static str {
        match self {
            Upgrade::Shield => "SH",
            Upgrade::Laser  => "LA",
            Upgrade::Engine => "EN",
            Upgrade::Radar  => "RA",
        }
    }

    pub fn flag(self) -> UpgradeFlags {
        match self {
            Upgrade::Shield => UpgradeFlags::SHIELD,
            Upgrade::Laser  => UpgradeFlags::LASER,
            Upgrade::Engine => UpgradeFlags::ENGINE,
            Upgrade::Radar  => UpgradeFlags::RADAR,
        }
    }

    /// Number of gems per upgrade kind, indexed by `idx()`. Gems without an
    /// upgrade are not counted.
    pub fn give_upgrades_from(gems: &[Gem]) -> [usize; Upgrade::COUNT] {
        let mut counts = [0; Upgrade::COUNT];
        for upgrade in gems.iter().filter_map(|gem| gem.upgrade()) {
            counts[upgrade.idx()] += 1;
        }
        counts
    }
}
