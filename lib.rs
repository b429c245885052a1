/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Persistence and command-routing core for the Graphdeck editor.
//!
//! This crate owns the project document lifecycle (new/open/save/save-as,
//! graph export/import, recording selection) and the routing of global menu
//! commands to the single currently-active consumer. Rendering, native
//! dialogs, disk writes, and toasts live in the host shell behind the
//! boundary traits in [`runtime`].

pub mod app;
pub mod commands;
pub mod model;
pub mod runtime;
pub mod services;
pub mod settings;
