pub mod server_time;

pub use self::server_time::{parse_server_time, server_time};
