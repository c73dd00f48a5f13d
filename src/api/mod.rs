pub mod server;

pub use self::server::{router, start_server, AppState, DistributionResponse};
