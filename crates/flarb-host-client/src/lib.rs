// SPDX-License-Identifier: Apache-2.0
//! Channel-backed host bridge adapter.
//!
//! [`ChannelHost`] implements [`HostPort`] by sending one request per host
//! call over an mpsc channel and awaiting a oneshot reply: exactly one
//! awaited "promise" per call, no retry, no backoff, no timeout. Whoever
//! services the channel plays the host; [`sim::SimHost`] does so locally for
//! development and tests.

use flarb_app_core::host::{HostContext, HostError, HostPort};
use tokio::sync::{mpsc, oneshot};

pub mod sim;

/// One request per host call; the reply comes back on the oneshot.
#[derive(Debug)]
pub enum HostRequest {
    /// Fetch the session context (`None` when the host supplies none).
    Context(oneshot::Sender<Option<HostContext>>),
    /// Signal that the tool is ready to display.
    Ready(oneshot::Sender<()>),
    /// Share a result message; `Err` carries the host's reason.
    Share {
        /// Message text to share.
        text: String,
        /// Reply channel.
        reply: oneshot::Sender<Result<(), String>>,
    },
}

/// [`HostPort`] adapter over an mpsc request channel to a running host.
pub struct ChannelHost {
    tx: Option<mpsc::Sender<HostRequest>>,
}

impl ChannelHost {
    /// Wrap a request channel to a running host.
    pub fn new(tx: mpsc::Sender<HostRequest>) -> Self {
        Self { tx: Some(tx) }
    }

    fn sender(&self) -> Result<&mpsc::Sender<HostRequest>, HostError> {
        self.tx.as_ref().ok_or(HostError::Unavailable)
    }
}

impl HostPort for ChannelHost {
    async fn context(&mut self) -> Result<Option<HostContext>, HostError> {
        let (reply, rx) = oneshot::channel();
        self.sender()?
            .send(HostRequest::Context(reply))
            .await
            .map_err(|_| HostError::Unavailable)?;
        rx.await.map_err(|_| HostError::Unavailable)
    }

    async fn signal_ready(&mut self) -> Result<(), HostError> {
        let (reply, rx) = oneshot::channel();
        self.sender()?
            .send(HostRequest::Ready(reply))
            .await
            .map_err(|_| HostError::Unavailable)?;
        rx.await.map_err(|_| HostError::Unavailable)
    }

    async fn share(&mut self, text: &str) -> Result<(), HostError> {
        let (reply, rx) = oneshot::channel();
        self.sender()?
            .send(HostRequest::Share {
                text: text.to_string(),
                reply,
            })
            .await
            .map_err(|_| HostError::Unavailable)?;
        rx.await
            .map_err(|_| HostError::Unavailable)?
            .map_err(HostError::Rejected)
    }

    fn dispose(&mut self) {
        // Dropping the sender is the whole teardown; the host sees EOF.
        self.tx = None;
    }
}
