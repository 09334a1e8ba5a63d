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

use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::bag::Bag;
use crate::drops::GemDropTable;
use crate::error::GameError;
use crate::items::gem::Gem;
use crate::spaceship::Spaceship;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config.json";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub log_level: String,
    pub log_file: Option<String>,
    pub pickups: usize, // gems rolled by a demo run
    pub upgrade_chance: f64,
    pub min_gem_value: u32,
    pub max_gem_value: u32,
    pub ship_name: Option<String>, // null starts without a ship
    pub starting_gems: Vec<Gem>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            log_file: None,
            pickups: 12,
            upgrade_chance: 0.35,
            min_gem_value: 1,
            max_gem_value: 10,
            ship_name: Some(String::from("Falcon")),
            starting_gems: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = std::fs::read_to_string(path)?;
        Self::from_json_str(&file)
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, GameError> {
        self.log_level
            .parse()
            .map_err(|_| GameError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn starting_bag(&self) -> Bag {
        let ship = self.ship_name.as_ref().map(|name| Spaceship::new(name.as_str()));
        Bag::new(ship, self.starting_gems.clone())
    }

    pub fn drop_table(&self) -> GemDropTable {
        GemDropTable::new(self.upgrade_chance, self.min_gem_value, self.max_gem_value)
    }
}

pub static CONFIG: OnceCell<GameConfig> = OnceCell::new();

pub fn set_global_config(config: GameConfig) -> Result<(), GameError> {
    CONFIG.set(config).map_err(|_| GameError::ConfigAlreadySet)
}

/// The global config, or the defaults if none was set.
pub fn get_config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::default)
}
