//! Runtime configuration.

use std::time::Duration;

use crate::{ButtonId, ShutdownScope};

/// Tunables for the router and runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Button that selects the entry under the cursor.
    pub select_button: ButtonId,
    /// How long ordinary messages stay on screen.
    pub message_duration: Duration,
    /// How long extended messages (shutdown) stay on screen.
    pub extended_message_duration: Duration,
    /// Upper bound for any single remote call.
    pub command_timeout: Duration,
    /// Capacity of the hardware event channel.
    pub event_buffer: usize,
    /// Scope passed to the remote shutdown command.
    pub shutdown_scope: ShutdownScope,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            select_button: ButtonId::rotary(),
            message_duration: Duration::from_millis(1500),
            extended_message_duration: Duration::from_millis(5000),
            command_timeout: Duration::from_secs(3),
            event_buffer: 32,
            shutdown_scope: ShutdownScope::System,
        }
    }
}
