//! Single-consumer event loop.
//!
//! Hardware producers publish into an [`crate::EventPublisher`]; the
//! [`Runtime`] is the one subscriber. It awaits each event's handling to
//! completion before receiving the next, so transitions are applied strictly
//! in arrival order even though device commands suspend.

use std::time::Duration;

use crate::{DeviceControl, EventRouter, EventSubscription, HardwareEvent, MenuController};

/// Drives an [`EventRouter`] from an [`EventSubscription`].
#[derive(Debug)]
pub struct Runtime<D, M> {
    router: EventRouter<D, M>,
    events: EventSubscription,
    tick: Option<Duration>,
}

enum Wake {
    Event(Option<HardwareEvent>),
    Tick,
}

impl<D: DeviceControl, M: MenuController> Runtime<D, M> {
    /// Create a runtime consuming `events`.
    pub fn new(router: EventRouter<D, M>, events: EventSubscription) -> Self {
        Self { router, events, tick: None }
    }

    /// Call [`MenuController::tick`] every `period` while idle.
    #[must_use]
    pub fn with_tick(mut self, period: Duration) -> Self {
        self.tick = Some(period);
        self
    }

    /// The router.
    pub fn router(&self) -> &EventRouter<D, M> {
        &self.router
    }

    /// Run until every publisher is dropped, then hand the router back.
    ///
    /// The initial menu is rendered once before the first event.
    pub async fn run(mut self) -> EventRouter<D, M> {
        self.router.controller_mut().request_render();

        let mut ticker = self.tick.map(tokio::time::interval);
        let mut handled: u64 = 0;

        loop {
            let wake = match ticker.as_mut() {
                Some(ticker) => tokio::select! {
                    event = self.events.recv() => Wake::Event(event),
                    _ = ticker.tick() => Wake::Tick,
                },
                None => Wake::Event(self.events.recv().await),
            };

            match wake {
                Wake::Event(Some(event)) => {
                    self.router.handle(event).await;
                    handled += 1;
                },
                Wake::Event(None) => break,
                Wake::Tick => self.router.controller_mut().tick(),
            }
        }

        tracing::info!(handled, "Event stream closed");
        self.router
    }
}
