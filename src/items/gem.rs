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

use serde::Deserialize;

use crate::items::upgrade::Upgrade;

/// Value given to gems created straight from an upgrade kind.
pub const UPGRADE_GEM_VALUE: u32 = 1;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Gem {
    pub value: u32,
    #[serde(default)]
    pub upgrade: Option<Upgrade>,
}

impl Gem {
    pub fn new(value: u32, upgrade: Option<Upgrade>) -> Self {
        Self { value, upgrade }
    }

    pub fn plain(value: u32) -> Self {
        Self::new(value, None)
    }

    pub fn for_upgrade(upgrade: Upgrade) -> Self {
        Self::new(UPGRADE_GEM_VALUE, Some(upgrade))
    }

    pub fn upgrade(&self) -> Option<Upgrade> {
        self.upgrade
    }

    pub fn matches(&self, upgrade: Upgrade) -> bool {
        self.upgrade == Some(upgrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_gem_matches_nothing() {
        let gem = Gem::plain(7);
        assert_eq!(gem.value, 7);
        assert!(Upgrade::ALL.iter().all(|u| !gem.matches(*u)));
    }

    #[test]
    fn test_upgrade_gem_matches_only_its_kind() {
        let gem = Gem::for_upgrade(Upgrade::Shield);
        assert!(gem.matches(Upgrade::Shield));
        assert!(!gem.matches(Upgrade::Laser));
        assert_eq!(gem.upgrade(), Some(Upgrade::Shield));
    }

    #[test]
    fn test_deserialize_without_upgrade_field() {
        let gem: Gem = serde_json::from_str(r#"{ "value": 4 }"#).unwrap();
        assert_eq!(gem, Gem::plain(4));

        let gem: Gem = serde_json::from_str(r#"{ "value": 2, "upgrade": "Radar" }"#).unwrap();
        assert_eq!(gem, Gem::new(2, Some(Upgrade::Radar)));
    }
}
