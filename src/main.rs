use gem_bag::config::{self, GameConfig, DEFAULT_CONFIG_PATH};
use gem_bag::{logging, GameError};
use log::info;

fn main() -> Result<(), GameError> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    config::set_global_config(GameConfig::load(&path)?)?;
    let config = config::get_config();
    logging::setup_logger(config)?;

    let mut bag = config.starting_bag();
    let drops = config.drop_table();
    let mut rng = rand::thread_rng();
    info!("Starting bag: {}", bag);

    for pickup in 1..=config.pickups {
        bag.add_gem(drops.roll(&mut rng));
        let installed = bag.update();
        if installed > 0 {
            info!("Pickup {}: installed {} upgrade(s)", pickup, installed);
        }
        info!("Pickup {}: {}", pickup, bag);
    }

    if bag.ship().is_some_and(|ship| ship.is_fully_upgraded()) {
        info!("Ship fully upgraded");
    }
    println!("{}", bag.string_contents());
    Ok(())
}
