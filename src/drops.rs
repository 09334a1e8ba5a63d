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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::items::{gem::Gem, upgrade::Upgrade};

/// Rolls the gems a player picks up.
#[derive(Clone, Debug, PartialEq)]
pub struct GemDropTable {
    upgrade_chance: f64,
    min_value: u32,
    max_value: u32,
}

impl GemDropTable {
    pub fn new(upgrade_chance: f64, min_value: u32, max_value: u32) -> Self {
        let (min_value, max_value) = if min_value <= max_value {
            (min_value, max_value)
        } else {
            (max_value, min_value)
        };
        let upgrade_chance = if upgrade_chance.is_nan() { 0.0 } else { upgrade_chance.clamp(0.0, 1.0) };
        Self {
            upgrade_chance,
            min_value,
            max_value,
        }
    }

    pub fn upgrade_chance(&self) -> f64 {
        self.upgrade_chance
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Gem {
        let value = rng.gen_range(self.min_value..=self.max_value);
        let upgrade = if rng.gen_bool(self.upgrade_chance) {
            Upgrade::ALL.choose(rng).copied()
        } else {
            None
        };
        Gem::new(value, upgrade)
    }

    pub fn roll_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Gem> {
        (0..count).map(|_| self.roll(rng)).collect()
    }
}
