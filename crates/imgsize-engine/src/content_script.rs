//! Content Script runtime
//!
//! Everything that lives on the page thread: the document, the overlay and
//! the lookups in flight. Lookups run as local tasks; their results come
//! back over a channel and are rendered by the loop that owns the page, so
//! nothing page-side is shared between tasks.

use std::time::Instant;

use imgsize_dom::{DocumentImageSource, OverlayHost, PageEvent};
use imgsize_net::{Fetcher, HttpFetcher, NetError};
use smol::channel::{self, Receiver, Sender};
use smol::{LocalExecutor, Timer, future};

use crate::config::{Config, StalePolicy};
use crate::lookup::{CompletedLookup, LookupOrchestrator};
use crate::message::ContentMessage;
use crate::overlay::OverlayController;

/// Input delivered to a running content script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Message(ContentMessage),
    Event(PageEvent),
}

enum Wake {
    Inbound(Inbound),
    Completed(CompletedLookup),
    Timer,
    Closed,
}

/// Page-side half of the extension
pub struct ContentScript<D, F> {
    document: D,
    overlay: OverlayController,
    lookups: LookupOrchestrator<F>,
    stale_policy: StalePolicy,
    executor: LocalExecutor<'static>,
    completed_tx: Sender<CompletedLookup>,
    completed_rx: Receiver<CompletedLookup>,
    in_flight: usize,
}

impl<D> ContentScript<D, HttpFetcher>
where
    D: DocumentImageSource + OverlayHost,
{
    /// Content script probing over HTTP
    pub fn from_config(document: D, config: Config) -> Result<Self, NetError> {
        let fetcher = HttpFetcher::with_config(config.client)?;
        Ok(Self::with_policy(document, fetcher, config.stale_policy))
    }
}

impl<D, F> ContentScript<D, F>
where
    D: DocumentImageSource + OverlayHost,
    F: Fetcher + 'static,
{
    pub fn new(document: D, fetcher: F) -> Self {
        Self::with_policy(document, fetcher, StalePolicy::default())
    }

    pub fn with_policy(document: D, fetcher: F, stale_policy: StalePolicy) -> Self {
        let (completed_tx, completed_rx) = channel::unbounded();
        Self {
            document,
            overlay: OverlayController::new(),
            lookups: LookupOrchestrator::new(fetcher),
            stale_policy,
            executor: LocalExecutor::new(),
            completed_tx,
            completed_rx,
            in_flight: 0,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    /// Lookups started but not yet rendered or dropped
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Dispatch a message from the background side
    pub fn handle_message(&mut self, message: ContentMessage) {
        match message {
            ContentMessage::ShowImageSize { image_src } => self.handle_lookup_request(&image_src),
            ContentMessage::Unsupported => tracing::debug!("Ignoring unsupported message"),
        }
    }

    /// Start a lookup for `image_url`
    ///
    /// Any visible overlay goes away immediately. The new one appears once
    /// the probes settle; a missing image shows nothing.
    pub fn handle_lookup_request(&mut self, image_url: &str) {
        self.overlay.dismiss(&mut self.document);

        let pending = match self.lookups.begin(&self.document, image_url) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::info!("{}", e);
                return;
            }
        };

        tracing::debug!("Lookup {} started for {}", pending.generation.get(), image_url);

        let probe = self.lookups.probe_handle();
        let tx = self.completed_tx.clone();
        self.executor
            .spawn(async move {
                let done = pending.resolve(&*probe).await;
                // The receiver lives as long as the script.
                let _ = tx.send(done).await;
            })
            .detach();
        self.in_flight += 1;
    }

    /// Route a page event to the overlay
    pub fn handle_event(&mut self, event: PageEvent, now: Instant) {
        self.overlay.handle_event(&mut self.document, event, now);
    }

    /// Fire the overlay countdown if due
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        self.overlay.poll_timer(&mut self.document, now)
    }

    /// Run lookups until every one in flight has been rendered or dropped
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let received = self.executor.run(self.completed_rx.recv()).await;
            match received {
                Ok(done) => self.complete(done, Instant::now()),
                Err(_) => break,
            }
        }
    }

    /// Serve `inbox` until it closes
    pub async fn run(mut self, inbox: Receiver<Inbound>) {
        tracing::info!("Content script running");
        loop {
            let deadline = self.overlay.next_deadline();
            let wake = self
                .executor
                .run(next_wake(&inbox, &self.completed_rx, deadline))
                .await;

            let now = Instant::now();
            match wake {
                Wake::Inbound(Inbound::Message(message)) => self.handle_message(message),
                Wake::Inbound(Inbound::Event(event)) => self.handle_event(event, now),
                Wake::Completed(done) => self.complete(done, now),
                Wake::Timer => {
                    self.poll_timers(now);
                }
                Wake::Closed => break,
            }
        }
        tracing::info!("Content script stopped");
    }

    fn complete(&mut self, done: CompletedLookup, now: Instant) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.stale_policy == StalePolicy::LatestRequestOnly
            && !self.lookups.is_latest(done.generation)
        {
            tracing::debug!("Dropping stale lookup {}", done.generation.get());
            return;
        }

        let anchor = self
            .document
            .find_image(&done.info.current_source)
            .map(|img| img.bounding_rect)
            .unwrap_or(done.anchor);
        let viewport = self.document.viewport();

        self.overlay
            .render(&mut self.document, done.info, &anchor, &viewport, now);
    }
}

async fn next_wake(
    inbox: &Receiver<Inbound>,
    completed: &Receiver<CompletedLookup>,
    deadline: Option<Instant>,
) -> Wake {
    let inbound = async {
        match inbox.recv().await {
            Ok(inbound) => Wake::Inbound(inbound),
            Err(_) => Wake::Closed,
        }
    };
    let settled = async {
        match completed.recv().await {
            Ok(done) => Wake::Completed(done),
            Err(_) => Wake::Closed,
        }
    };
    let timer = async {
        match deadline {
            Some(at) => {
                Timer::at(at).await;
                Wake::Timer
            }
            None => future::pending().await,
        }
    };

    future::or(inbound, future::or(settled, timer)).await
}
