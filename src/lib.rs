// SPDX-License-Identifier: MPL-2.0
//! `payo` is a desktop mockup of a mobile banking balances screen built with
//! the Iced GUI framework.
//!
//! Its core pieces are a teardown-safe remote asset loader ([`asset`]) and an
//! interactive bottom navigation bar ([`ui::tab_bar`]) whose highlights
//! follow pointer and keyboard interaction.

#![doc(html_root_url = "https://docs.rs/payo/0.1.0")]

pub mod app;
pub mod asset;
pub mod config;
pub mod error;
pub mod fonts;
pub mod i18n;
pub mod logging;
pub mod ui;
