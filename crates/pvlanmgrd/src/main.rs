//! pvlanmgrd - Private VLAN Manager Daemon
//!
//! Entry point for the pvlanmgrd daemon.

use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dvs_mgr_common::StaticConfigSource;
use dvs_pvlanmgrd::PvlanMgr;

/// Initializes tracing/logging subsystem
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    info!("--- Starting pvlanmgrd ---");

    let source = Arc::new(StaticConfigSource::new());
    let _mgr = PvlanMgr::new(source);

    // TODO: Replace StaticConfigSource with the management-plane client
    // once the switch inventory service is wired up

    info!("pvlanmgrd initialization complete (placeholder mode)");
    info!("Full implementation pending management-plane inventory integration");

    ExitCode::SUCCESS
}
