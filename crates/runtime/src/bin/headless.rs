//! Headless driver: runs a fresh session on the overworld for a while and
//! prints the in-game event log. Useful for smoke-testing the simulation
//! without any client attached.

use std::sync::Arc;

use tokio::sync::Mutex;
use wastes_runtime::{Clock, Scheduler, Session, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let clock = Arc::new(SystemClock::new());
    let mut session = Session::new(wastes_content::default_catalog(), 0xC0FFEE);
    session.finish_intro(clock.now());
    let session = Arc::new(Mutex::new(session));

    let scheduler = Scheduler::new();
    let driver = {
        let session = session.clone();
        let clock = clock.clone();
        tokio::spawn(async move { scheduler.run_overworld(session, clock).await })
    };

    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    {
        let mut session = session.lock().await;
        session.state_mut().mode = wastes_core::Mode::Splash;
    }
    let outcome = driver.await.expect("driver task");
    tracing::info!(?outcome, "overworld driver stopped");

    let session = session.lock().await;
    for line in session.state().log.iter() {
        println!("{line}");
    }
}
