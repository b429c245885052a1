/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Global menu commands.
//!
//! `MenuCommand` is the closed set of commands the platform menu can emit.
//! Each variant has a stable wire id the menu definition uses; all handler
//! context comes from application state at dispatch time, so the command
//! itself carries nothing beyond its identity.

pub mod menu;
pub mod router;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MenuCommand {
    Settings,
    Quit,
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
    ExportGraph,
    ImportGraph,
    Run,
    LoadRecording,
}

impl MenuCommand {
    /// Every command, in menu order. Keep in sync by construction: the
    /// `menu_id`/`from_menu_id` matches below are wildcard-free (save the
    /// unknown-id arm), so a new variant fails to compile until it is
    /// mapped, and the tests walk this table.
    pub const ALL: [MenuCommand; 10] = [
        MenuCommand::Settings,
        MenuCommand::Quit,
        MenuCommand::NewProject,
        MenuCommand::OpenProject,
        MenuCommand::SaveProject,
        MenuCommand::SaveProjectAs,
        MenuCommand::ExportGraph,
        MenuCommand::ImportGraph,
        MenuCommand::Run,
        MenuCommand::LoadRecording,
    ];

    /// Stable identifier used by the platform menu definition.
    pub fn menu_id(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Quit => "quit",
            Self::NewProject => "new_project",
            Self::OpenProject => "open_project",
            Self::SaveProject => "save_project",
            Self::SaveProjectAs => "save_project_as",
            Self::ExportGraph => "export_graph",
            Self::ImportGraph => "import_graph",
            Self::Run => "run",
            Self::LoadRecording => "load_recording",
        }
    }

    /// Parse a wire id from the menu source. Unknown ids yield `None` and
    /// are dropped by the caller.
    pub fn from_menu_id(id: &str) -> Option<Self> {
        match id {
            "settings" => Some(Self::Settings),
            "quit" => Some(Self::Quit),
            "new_project" => Some(Self::NewProject),
            "open_project" => Some(Self::OpenProject),
            "save_project" => Some(Self::SaveProject),
            "save_project_as" => Some(Self::SaveProjectAs),
            "export_graph" => Some(Self::ExportGraph),
            "import_graph" => Some(Self::ImportGraph),
            "run" => Some(Self::Run),
            "load_recording" => Some(Self::LoadRecording),
            _ => None,
        }
    }

    /// Menu item label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings...",
            Self::Quit => "Quit",
            Self::NewProject => "New Project",
            Self::OpenProject => "Open Project...",
            Self::SaveProject => "Save Project",
            Self::SaveProjectAs => "Save Project As...",
            Self::ExportGraph => "Export Graph...",
            Self::ImportGraph => "Import Graph...",
            Self::Run => "Run Graph",
            Self::LoadRecording => "Load Recording...",
        }
    }
}
