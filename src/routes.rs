mod get_health;
mod get_index;

pub use get_health::get_health_route;
pub use get_index::get_index_route;
