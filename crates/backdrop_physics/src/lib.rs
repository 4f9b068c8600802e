pub mod connections;
pub mod motion;
pub mod spawn;

pub use connections::{find_connections, Connection, LineTier};
