/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Default menu-command consumer.
//!
//! One exhaustive mapping from [`MenuCommand`] to effect. The match has no
//! wildcard arm: adding a command variant without deciding its effect here
//! is a compile error, not a silent no-op at runtime.

use crate::app::EditorApp;
use crate::runtime::HostPorts;
use crate::services::persistence;
use super::MenuCommand;

/// Hooks for commands whose effect lives outside the persistence core.
/// A missing hook makes the command a no-op for this consumer.
#[derive(Default)]
pub struct MenuHooks<'a> {
    /// Invoked for [`MenuCommand::Run`]; graph execution is owned by the
    /// shell.
    pub run_graph: Option<&'a mut dyn FnMut(&mut EditorApp)>,
}

/// Apply one menu command to the editor state through the host ports.
pub fn apply_menu_command(
    app: &mut EditorApp,
    host: &HostPorts<'_>,
    hooks: &mut MenuHooks<'_>,
    command: MenuCommand,
) {
    match command {
        MenuCommand::Settings => {
            app.settings_panel_open = true;
        }
        MenuCommand::Quit => host.window.request_close(),
        MenuCommand::NewProject => persistence::new_project(app, host),
        MenuCommand::OpenProject => {
            persistence::open_project(app, host);
        }
        MenuCommand::SaveProject => {
            persistence::save_project(app, host);
        }
        MenuCommand::SaveProjectAs => {
            persistence::save_project_as(app, host);
        }
        MenuCommand::ExportGraph => {
            persistence::export_graph(app, host);
        }
        MenuCommand::ImportGraph => {
            persistence::import_graph(app, host);
        }
        MenuCommand::Run => {
            if let Some(run_graph) = hooks.run_graph.as_mut() {
                run_graph(app);
            }
        }
        MenuCommand::LoadRecording => {
            persistence::load_recording(app, host);
        }
    }
}
