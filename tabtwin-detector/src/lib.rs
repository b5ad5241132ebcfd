//! Marks tabs whose file is open in more than one editor group.
//!
//! [`DuplicateDetector`] is the synchronous core, for hosts that deliver focus
//! changes on a single thread.  [`DetectorHandle`] runs the same detector as a
//! lifeline service, so focus changes from any task are applied one at a time.

use crate::prelude::*;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use tabtwin_api::config::Config;

mod bus;
mod detector;
mod handle;
mod message;
mod prelude;
mod resource;
mod service;
mod state;

pub use bus::DecorationBus;
pub use detector::{classify, DuplicateDetector};
pub use handle::{DecorationReader, DetectorHandle};
pub use message::decoration::{ActiveTabChanged, DecorationsChanged, DetectorShutdown};
pub use resource::snapshot::{SharedSnapshot, SnapshotProvider, SnapshotResource};
pub use service::detector::DetectorService;
pub use state::decoration::{ChangeSet, DecorationState};

/// Initializes the global logger at the configured level, and routes panics through it
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let level = config.level_filter()?;

    TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_format_str("%H:%M:%S%.3f TWN")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    log_panics::init();

    info!("tabtwin logging initialized at {}", level);

    Ok(())
}
