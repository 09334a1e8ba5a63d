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

use crate::items::upgrade::{Upgrade, UpgradeFlags};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spaceship {
    pub name: String,
    upgrades: UpgradeFlags,
}

impl Spaceship {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upgrades: UpgradeFlags::empty(),
        }
    }

    pub fn with_upgrades(name: impl Into<String>, upgrades: &[Upgrade]) -> Self {
        let mut ship = Self::new(name);
        for upgrade in upgrades {
            ship.install(*upgrade);
        }
        ship
    }

    pub fn has_upgrade(&self, upgrade: Upgrade) -> bool {
        self.upgrades.contains(upgrade.flag())
    }

    /// Returns false if the upgrade was already installed.
    pub fn install(&mut self, upgrade: Upgrade) -> bool {
        if self.has_upgrade(upgrade) {
            return false;
        }
        self.upgrades.insert(upgrade.flag());
        true
    }

    pub fn missing_upgrades(&self) -> Vec<Upgrade> {
        Upgrade::ALL
            .iter()
            .copied()
            .filter(|u| !self.has_upgrade(*u))
            .collect()
    }

    pub fn is_fully_upgraded(&self) -> bool {
        self.upgrades.is_all()
    }

    /// Name, then the installed upgrade labels, each followed by a space.
    pub fn contents(&self) -> String {
        let mut res = format!("{} ", self.name);
        for upgrade in Upgrade::ALL.iter().filter(|u| self.has_upgrade(**u)) {
            res.push_str(upgrade.to_small_string());
            res.push(' ');
        }
        res
    }
}
