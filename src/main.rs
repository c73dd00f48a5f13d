use alarm_state_distribution::{api::server, config::Config, logging};
use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logger() {
        eprintln!("{}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::start_server(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
