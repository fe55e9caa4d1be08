use std::process::ExitCode;

use checkin_server::{
    banner, browser,
    server::{config::ServerConfig, error::StartupError, HttpServer},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let mut server = HttpServer::new(ServerConfig::default());

    let bound = match server.bind().await {
        Ok(bound) => bound,
        Err(StartupError::PortInUse(port)) => {
            println!("{}", banner::port_in_use(port));
            return ExitCode::from(1);
        }
        Err(err) => {
            println!("{}", banner::startup_failure(&err));
            return ExitCode::from(1);
        }
    };

    let url = server.config().url();
    println!("{}", banner::startup(&url));
    browser::open(&url);

    if let Err(err) = bound.serve().await {
        println!("{}", banner::startup_failure(&err));
        return ExitCode::from(1);
    }

    println!("{}", banner::shutdown());
    ExitCode::SUCCESS
}
