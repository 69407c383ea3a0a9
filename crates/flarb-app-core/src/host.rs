// SPDX-License-Identifier: Apache-2.0
//! Host bridge types and the injected port trait.
//!
//! The frame host is an opaque external runtime: it supplies a read-only
//! context once per session, expects a readiness signal, and exposes a share
//! action that may fail. Tools depend on [`HostPort`] so a scripted stub can
//! stand in for the real bridge in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Padding reported by the host so the card avoids system UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SafeAreaInsets {
    /// Top padding in logical pixels.
    pub top: f32,
    /// Bottom padding in logical pixels.
    pub bottom: f32,
    /// Left padding in logical pixels.
    pub left: f32,
    /// Right padding in logical pixels.
    pub right: f32,
}

/// Client metadata supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientInfo {
    /// Safe-area padding; absent values read as zero.
    pub safe_area_insets: Option<SafeAreaInsets>,
    /// Host client name, when the host reports one.
    pub name: Option<String>,
}

/// Read-only context supplied by the host bridge once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HostContext {
    /// Client metadata (insets, name).
    pub client: ClientInfo,
}

/// Errors surfaced by a host bridge.
#[derive(Debug, Error)]
pub enum HostError {
    /// The bridge is gone (host closed the session).
    #[error("host unavailable")]
    Unavailable,
    /// The host refused the action.
    #[error("host rejected action: {0}")]
    Rejected(String),
}

/// Injected host bridge interface.
///
/// Each async operation awaits exactly one host reply; implementations add
/// no retry, backoff, or timeout. `dispose` is the best-effort teardown run
/// when the tool unmounts.
pub trait HostPort {
    /// Fetch the host context; `Ok(None)` when the host supplies none.
    async fn context(&mut self) -> Result<Option<HostContext>, HostError>;
    /// Tell the host the tool is ready to display.
    async fn signal_ready(&mut self) -> Result<(), HostError>;
    /// Ask the host to share `text` on the player's behalf.
    async fn share(&mut self, text: &str) -> Result<(), HostError>;
    /// Best-effort listener/channel teardown.
    fn dispose(&mut self);
}
