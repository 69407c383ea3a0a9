// SPDX-License-Identifier: Apache-2.0
//! Shared application services for Flarb tools (game state, host port,
//! stats). Keeps UI/runtime adapters thin and framework-agnostic.

pub mod game;
pub mod host;
pub mod stats;
