mod domains;
mod health;
mod locate;
mod locations;
mod predict;

pub use domains::get_domains;
pub use health::health_check;
pub use locate::handle_locate;
pub use locations::list_locations;
pub use predict::handle_predict;
