// SPDX-License-Identifier: Apache-2.0
//! Flarb counter frame: terminal front-end over a simulated host bridge.

mod controller;
mod ui;

use anyhow::Result;
use controller::FrameController;
use flarb_app_core::stats::StatsLedger;
use flarb_host_client::{sim::SimHost, ChannelHost};
use flarb_stats_fs::FsStatsStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

fn draw<H: flarb_app_core::host::HostPort>(frame: &FrameController<H>) {
    let view = ui::card_view(frame.game());
    let pad = ui::padding(frame.context());
    for line in ui::render(&view, &pad) {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Stats ledger (best-effort); play continues without persisted stats.
    let ledger = FsStatsStore::new().map(StatsLedger::new).ok();
    if ledger.is_none() {
        warn!("stats store unavailable; stats won't persist this session");
    }
    let stats = ledger.as_ref().map(|l| l.load()).unwrap_or_default();

    let host = ChannelHost::new(SimHost::new().spawn());
    let mut frame = FrameController::new(host);
    frame.set_stats(stats);

    for line in ui::loading() {
        println!("{line}");
    }
    if let Err(err) = frame.load_host().await {
        warn!(%err, "host load failed");
    }

    draw(&frame);
    println!("commands: tap | share | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "tap" => frame.tap(),
            // Share is only on the win card.
            "share" if frame.game().won() => frame.share().await,
            "share" => {
                println!("nothing to share yet; hit the goal first");
                continue;
            }
            "quit" | "q" => break,
            "" => continue,
            other => {
                println!("unknown command: {other}");
                continue;
            }
        }
        draw(&frame);
    }

    if let Some(ledger) = &ledger {
        if let Err(err) = ledger.save(frame.stats()) {
            warn!(%err, "failed to save stats");
        }
    }
    info!(taps = frame.stats().taps, wins = frame.stats().wins, "bye");
    frame.dispose();
    Ok(())
}
