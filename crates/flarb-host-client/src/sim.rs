// SPDX-License-Identifier: Apache-2.0
//! Local simulated host servicing the request channel.
//!
//! Stands in for the real frame runtime during development and in tests:
//! answers context fetches with a canned [`HostContext`], acknowledges
//! readiness, and logs shares. Knobs exist to withhold the context or reject
//! shares so tools can exercise their failure paths.

use crate::HostRequest;
use flarb_app_core::host::{ClientInfo, HostContext, SafeAreaInsets};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Simulated host configuration; consumed by [`SimHost::spawn`].
pub struct SimHost {
    context: Option<HostContext>,
    share_error: Option<String>,
}

impl SimHost {
    /// Host that behaves normally: canned context, readiness ack, shares ok.
    pub fn new() -> Self {
        Self {
            context: Some(HostContext {
                client: ClientInfo {
                    safe_area_insets: Some(SafeAreaInsets {
                        top: 12.0,
                        bottom: 24.0,
                        left: 0.0,
                        right: 0.0,
                    }),
                    name: Some("sim".to_string()),
                },
            }),
            share_error: None,
        }
    }

    /// Host that reports no context (the tool must stay silent).
    pub fn without_context() -> Self {
        Self {
            context: None,
            ..Self::new()
        }
    }

    /// Host that rejects every share with `reason`.
    pub fn rejecting_shares(reason: &str) -> Self {
        Self {
            share_error: Some(reason.to_string()),
            ..Self::new()
        }
    }

    /// Spawn the host loop; the returned sender feeds a
    /// [`ChannelHost`](crate::ChannelHost). The loop exits when every sender
    /// is dropped.
    pub fn spawn(self) -> mpsc::Sender<HostRequest> {
        let (tx, mut rx) = mpsc::channel(16);
        tokio::spawn(async move {
            while let Some(req) = rx.recv().await {
                match req {
                    HostRequest::Context(reply) => {
                        let _ = reply.send(self.context.clone());
                    }
                    HostRequest::Ready(reply) => {
                        info!("sim host: client ready");
                        let _ = reply.send(());
                    }
                    HostRequest::Share { text, reply } => match &self.share_error {
                        Some(reason) => {
                            warn!(%reason, "sim host: share rejected");
                            let _ = reply.send(Err(reason.clone()));
                        }
                        None => {
                            info!(%text, "sim host: share");
                            let _ = reply.send(Ok(()));
                        }
                    },
                }
            }
        });
        tx
    }
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new()
    }
}
