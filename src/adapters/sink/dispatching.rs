//! Dispatching sink - hands payloads to a background delivery task.
//!
//! `submit` pushes onto an unbounded channel and returns immediately. A
//! worker spawned on the given runtime drains the channel and calls each
//! transport in turn. Delivery failures are logged and dropped; nothing is
//! retried and the caller never hears about them.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::submission::SheetPayload;
use crate::ports::{PayloadTransport, SubmissionSink};

/// Fire-and-forget sink backed by one or more async transports.
pub struct DispatchingSink {
    sender: UnboundedSender<SheetPayload>,
}

impl DispatchingSink {
    /// Spawns the delivery worker on `runtime`.
    ///
    /// The worker exits once every clone of the sink has been dropped and
    /// the queue is drained; await the returned handle to flush.
    pub fn spawn(
        runtime: &Handle,
        transports: Vec<Arc<dyn PayloadTransport>>,
    ) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = runtime.spawn(run_worker(receiver, transports));
        (Self { sender }, worker)
    }

    /// True once the worker is gone and submissions are being dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl SubmissionSink for DispatchingSink {
    fn submit(&self, payload: SheetPayload) {
        if self.sender.send(payload).is_err() {
            warn!("Delivery worker has stopped; submission dropped");
        }
    }
}

async fn run_worker(
    mut receiver: UnboundedReceiver<SheetPayload>,
    transports: Vec<Arc<dyn PayloadTransport>>,
) {
    while let Some(payload) = receiver.recv().await {
        for transport in &transports {
            match transport.deliver(&payload).await {
                Ok(()) => debug!(
                    transport = transport.name(),
                    quiz_type = %payload.quiz_type,
                    "Submission delivered"
                ),
                Err(e) => warn!(
                    transport = transport.name(),
                    quiz_type = %payload.quiz_type,
                    error = %e,
                    "Submission delivery failed"
                ),
            }
        }
    }
    debug!("Delivery worker stopped");
}
