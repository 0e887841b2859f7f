//! Control board panel entry point.

use std::{fs::File, sync::Mutex, time::Duration};

use clap::Parser;
use crossterm::event::EventStream;
use ctrlboard_app::{EventRouter, Runtime, event_channel};
use ctrlboard_panel::{Args, MenuBuilder, PanelController, PanelError, TerminalSession, input};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// How often expired messages are cleared.
const MESSAGE_TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let devices = args.seed();
    let config = args.panel_config();
    tracing::info!(?config, "Control board panel starting");

    let (session, terminal) = TerminalSession::enter()?;
    let controller = PanelController::new(terminal, MenuBuilder::new(devices.clone()));
    let (publisher, subscription) = event_channel(config.event_buffer);
    let router = EventRouter::new(devices, controller, config);
    let runtime = Runtime::new(router, subscription).with_tick(MESSAGE_TICK);

    let (router, input) =
        tokio::join!(runtime.run(), input::pump(EventStream::new(), publisher));
    drop(router);
    drop(session);

    input?;
    tracing::info!("Control board panel stopped");
    Ok(())
}

fn init_logging(args: &Args) -> Result<(), PanelError> {
    let file = File::create(&args.log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .map_err(|e| PanelError::LogFilter(e.to_string()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}
