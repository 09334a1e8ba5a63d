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

use std::fmt;

use log::{debug, trace};

use crate::items::{gem::Gem, upgrade::Upgrade};
use crate::spaceship::Spaceship;

/// A player's bag: at most one ship (None means not collected yet) and the
/// gems picked up so far, in pickup order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bag {
    ship: Option<Spaceship>,
    gems: Vec<Gem>,
}

impl Bag {
    pub fn new(ship: Option<Spaceship>, gems: Vec<Gem>) -> Self {
        Self { ship, gems }
    }

    pub fn ship(&self) -> Option<&Spaceship> {
        self.ship.as_ref()
    }

    pub fn gems(&self) -> &[Gem] {
        &self.gems
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn gem_count(&self) -> usize {
        self.gems.len()
    }

    /// Replaces the ship, handing back the previous one.
    pub fn set_ship(&mut self, ship: Option<Spaceship>) -> Option<Spaceship> {
        std::mem::replace(&mut self.ship, ship)
    }

    pub fn add_gem(&mut self, gem: Gem) {
        trace!("Picked up gem {:?}", gem);
        self.gems.push(gem);
    }

    /// If possible, upgrade the ship with `upgrade` and remove the first
    /// corresponding gem. Returns whether anything changed.
    pub fn try_upgrade_ship(&mut self, upgrade: Upgrade) -> bool {
        let Some(ship) = self.ship.as_mut() else {
            return false;
        };
        if ship.has_upgrade(upgrade) {
            return false;
        }
        let Some(pos) = self.gems.iter().position(|gem| gem.matches(upgrade)) else {
            return false;
        };

        let gem = self.gems.remove(pos);
        ship.install(upgrade);
        debug!("{} upgraded with {} using gem {:?}", ship.name, upgrade.to_small_string(), gem);
        true
    }

    /// Spends gems on every upgrade the ship is missing, in `Upgrade::ALL`
    /// order. Returns the number of upgrades installed.
    pub fn update(&mut self) -> usize {
        let missing = match &self.ship {
            Some(ship) => ship.missing_upgrades(),
            None => return 0,
        };

        let mut installed = 0;
        for upgrade in missing {
            if self.try_upgrade_ship(upgrade) {
                installed += 1;
            }
        }
        installed
    }

    pub fn string_contents(&self) -> String {
        let mut res = String::from("SHIP:0   ");
        if let Some(ship) = &self.ship {
            res = format!("SHIP:1 ( {})    ", ship.contents());
        }

        let upgrade_numbers = Upgrade::give_upgrades_from(&self.gems);
        for upgrade in Upgrade::ALL {
            res.push_str(&format!("{}: {}  ", upgrade.to_small_string(), upgrade_numbers[upgrade.idx()]));
        }
        res
    }

    /// Independent snapshot of this bag; changes to either side never reach
    /// the other.
    pub fn copy(&self) -> Bag {
        self.clone()
    }
}

impl fmt::Display for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_contents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falcon() -> Spaceship {
        Spaceship::new("Falcon")
    }

    #[test]
    fn test_add_gem_appends() {
        let mut bag = Bag::new(None, vec![Gem::plain(1)]);
        let before = bag.gems().to_vec();

        bag.add_gem(Gem::for_upgrade(Upgrade::Laser));

        assert_eq!(bag.gem_count(), before.len() + 1);
        assert_eq!(&bag.gems()[..before.len()], &before[..]);
        assert_eq!(bag.gems().last(), Some(&Gem::for_upgrade(Upgrade::Laser)));
    }

    #[test]
    fn test_add_duplicate_gems() {
        let mut bag = Bag::default();
        bag.add_gem(Gem::plain(2));
        bag.add_gem(Gem::plain(2));
        assert_eq!(bag.gems(), &[Gem::plain(2), Gem::plain(2)]);
    }

    #[test]
    fn test_set_ship_then_get() {
        let mut bag = Bag::default();
        assert!(bag.set_ship(Some(falcon())).is_none());
        assert_eq!(bag.ship(), Some(&falcon()));

        let previous = bag.set_ship(None);
        assert_eq!(previous, Some(falcon()));
        assert!(bag.ship().is_none());
        assert!(!bag.has_ship());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Bag::new(Some(falcon()), vec![Gem::for_upgrade(Upgrade::Shield)]);
        let mut copy = original.copy();
        assert_eq!(copy, original);

        copy.add_gem(Gem::plain(5));
        copy.update();

        assert_eq!(original.gem_count(), 1);
        assert!(!original.ship().unwrap().has_upgrade(Upgrade::Shield));
        assert!(copy.ship().unwrap().has_upgrade(Upgrade::Shield));
    }

    #[test]
    fn test_try_upgrade_without_ship_is_noop() {
        let mut bag = Bag::default();
        for upgrade in Upgrade::ALL {
            assert!(!bag.try_upgrade_ship(upgrade));
        }
        assert!(bag.ship().is_none());
        assert_eq!(bag.gem_count(), 0);
    }

    #[test]
    fn test_try_upgrade_without_gem_is_noop() {
        let mut bag = Bag::new(Some(falcon()), vec![Gem::for_upgrade(Upgrade::Laser)]);
        assert!(!bag.try_upgrade_ship(Upgrade::Shield));
        assert_eq!(bag.gem_count(), 1);
        assert!(!bag.ship().unwrap().has_upgrade(Upgrade::Shield));
    }

    #[test]
    fn test_try_upgrade_removes_one_matching_gem() {
        let mut bag = Bag::new(
            Some(falcon()),
            vec![
                Gem::plain(9),
                Gem::new(3, Some(Upgrade::Engine)),
                Gem::plain(4),
                Gem::new(8, Some(Upgrade::Engine)),
            ],
        );

        assert!(bag.try_upgrade_ship(Upgrade::Engine));
        assert!(bag.ship().unwrap().has_upgrade(Upgrade::Engine));
        assert_eq!(
            bag.gems(),
            &[Gem::plain(9), Gem::plain(4), Gem::new(8, Some(Upgrade::Engine))]
        );

        // already installed, the second gem stays
        assert!(!bag.try_upgrade_ship(Upgrade::Engine));
        assert_eq!(bag.gem_count(), 3);
    }

    #[test]
    fn test_update_installs_missing_upgrade_once() {
        let mut bag = Bag::new(Some(falcon()), vec![Gem::for_upgrade(Upgrade::Radar)]);

        assert_eq!(bag.update(), 1);
        assert!(bag.ship().unwrap().has_upgrade(Upgrade::Radar));
        assert_eq!(bag.gem_count(), 0);

        let snapshot = bag.copy();
        assert_eq!(bag.update(), 0);
        assert_eq!(bag, snapshot);
    }

    #[test]
    fn test_update_handles_every_missing_kind() {
        let mut bag = Bag::new(
            Some(Spaceship::with_upgrades("Falcon", &[Upgrade::Laser])),
            vec![
                Gem::for_upgrade(Upgrade::Radar),
                Gem::for_upgrade(Upgrade::Laser),
                Gem::for_upgrade(Upgrade::Shield),
                Gem::plain(2),
            ],
        );

        assert_eq!(bag.update(), 2);
        let ship = bag.ship().unwrap();
        assert!(ship.has_upgrade(Upgrade::Shield));
        assert!(ship.has_upgrade(Upgrade::Radar));
        assert!(!ship.has_upgrade(Upgrade::Engine));
        assert_eq!(bag.gems(), &[Gem::for_upgrade(Upgrade::Laser), Gem::plain(2)]);
    }

    #[test]
    fn test_update_with_fully_upgraded_ship_keeps_gems() {
        let ship = Spaceship::with_upgrades("Falcon", &Upgrade::ALL);
        let gems: Vec<Gem> = Upgrade::ALL.iter().map(|u| Gem::for_upgrade(*u)).collect();
        let mut bag = Bag::new(Some(ship), gems);

        assert_eq!(bag.update(), 0);
        assert_eq!(bag.gem_count(), Upgrade::COUNT);
    }

    #[test]
    fn test_update_without_ship_keeps_gems() {
        let mut bag = Bag::new(None, vec![Gem::for_upgrade(Upgrade::Shield)]);
        assert_eq!(bag.update(), 0);
        assert_eq!(bag.gem_count(), 1);
    }

    #[test]
    fn test_string_contents_without_ship() {
        let bag = Bag::new(None, vec![Gem::for_upgrade(Upgrade::Laser), Gem::plain(1)]);
        assert_eq!(bag.string_contents(), "SHIP:0   SH: 0  LA: 1  EN: 0  RA: 0  ");
    }

    #[test]
    fn test_string_contents_with_ship() {
        let ship = Spaceship::with_upgrades("Falcon", &[Upgrade::Shield]);
        let bag = Bag::new(
            Some(ship.clone()),
            vec![Gem::for_upgrade(Upgrade::Radar), Gem::for_upgrade(Upgrade::Radar)],
        );

        let text = bag.string_contents();
        assert!(text.starts_with(&format!("SHIP:1 ( {})    ", ship.contents())));
        assert_eq!(text, "SHIP:1 ( Falcon SH )    SH: 0  LA: 0  EN: 0  RA: 2  ");
        assert_eq!(bag.to_string(), text);
    }
}
