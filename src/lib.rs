pub mod bag;
pub mod config;
pub mod drops;
pub mod error;
pub mod items;
pub mod logging;
pub mod spaceship;

pub use bag::Bag;
pub use error::GameError;
pub use items::{gem::Gem, upgrade::Upgrade};
pub use spaceship::Spaceship;
