//! Login Flow - Entry Point
//!
//! An interactive two-screen authentication flow: pure credential
//! validation behind a console front end.

use env_logger;
use log::{error, info};

use login_flow::Shell;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login flow shell...");

    let mut shell = Shell::new();
    if let Err(e) = shell.run().await {
        error!("Session ended with error: {}", e);
        std::process::exit(1);
    }
}
