// SPDX-License-Identifier: Apache-2.0
//! Stateless card view for the Flarb counter.
//!
//! Pure data in, text lines out: the card is derived from [`GameState`] and
//! the safe-area insets, with no knowledge of the host bridge or terminal.

use flarb_app_core::game::GameState;
use flarb_app_core::host::{HostContext, SafeAreaInsets};

/// Which control set the card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// Pre-win: the single Flarb button.
    Play,
    /// Post-win: banner plus share/replay buttons.
    Won,
}

/// Renderable card description derived from game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Card title.
    pub title: String,
    /// Goal line under the title.
    pub goal: String,
    /// Count badge.
    pub count: String,
    /// Control set to offer.
    pub controls: Controls,
}

/// Build the card for the current game state.
pub fn card_view(game: &GameState) -> CardView {
    CardView {
        title: "Flarb Counter".to_string(),
        goal: format!("Tap to Flarb! Goal: {}", game.target()),
        count: format!("Count: {}", game.count()),
        controls: if game.won() {
            Controls::Won
        } else {
            Controls::Play
        },
    }
}

/// Resolve safe-area padding from an optional host context; absent values
/// read as zero.
pub fn padding(context: Option<&HostContext>) -> SafeAreaInsets {
    context
        .and_then(|c| c.client.safe_area_insets)
        .unwrap_or_default()
}

/// Lines shown until the host bridge has been polled.
pub fn loading() -> Vec<String> {
    vec!["Loading...".to_string()]
}

/// Upper bounds on host-supplied padding. Insets arrive as floats from an
/// untrusted context; clamping keeps a bogus value (e.g. `top: 1e12`) from
/// ballooning the rendered output.
const MAX_PAD_LINES: f32 = 8.0;
const MAX_PAD_COLS: f32 = 16.0;

fn pad_lines(v: f32) -> usize {
    v.clamp(0.0, MAX_PAD_LINES) as usize
}

fn pad_cols(v: f32) -> usize {
    v.clamp(0.0, MAX_PAD_COLS) as usize
}

/// Render the card to text lines with the given padding applied.
pub fn render(view: &CardView, pad: &SafeAreaInsets) -> Vec<String> {
    let left = " ".repeat(pad_cols(pad.left));
    let mut lines = Vec::new();
    for _ in 0..pad_lines(pad.top) {
        lines.push(String::new());
    }
    lines.push(format!("{left}== {} ==", view.title));
    lines.push(format!("{left}{}", view.goal));
    lines.push(format!("{left}[{}]", view.count));
    match view.controls {
        Controls::Play => lines.push(format!("{left}(tap) Flarb!")),
        Controls::Won => {
            lines.push(format!("{left}You did it!"));
            lines.push(format!("{left}(share) Share Results"));
            lines.push(format!("{left}(tap) Play Again"));
        }
    }
    for _ in 0..pad_lines(pad.bottom) {
        lines.push(String::new());
    }
    lines
}
