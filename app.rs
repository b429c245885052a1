/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Editor application state.
//!
//! `EditorApp` is a pure state container: the current project document, the
//! graph open for editing, where the project lives on disk (if anywhere),
//! and session-scoped odds and ends. It performs no I/O; the persistence
//! coordinator in `services::persistence` mutates it through explicit
//! operations.

use uuid::Uuid;

use crate::model::{Graph, LoadedProject, LoadedRecording, Project};
use crate::settings::EditorSettings;

pub const APP_NAME: &str = "Graphdeck";

pub struct EditorApp {
    pub project: Project,
    /// Graph currently open in the editor. Edits here are NOT reflected
    /// into `project.graphs` until a save reconciles them; eager
    /// per-keystroke serialization is deliberately avoided.
    pub graph: Graph,
    pub loaded_project: LoadedProject,
    pub recording: Option<LoadedRecording>,
    pub settings: EditorSettings,
    /// Whether the settings panel is showing. Toggled by the `Settings`
    /// menu command; rendering belongs to the shell.
    pub settings_panel_open: bool,
}

impl EditorApp {
    /// Fresh session: untitled project, untitled graph, nothing on disk.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            project: Project::untitled(),
            graph: Graph::untitled(),
            loaded_project: LoadedProject::Unsaved,
            recording: None,
            settings,
            settings_panel_open: false,
        }
    }

    /// All graphs saved in the project, name-ordered (ties broken by id)
    /// for stable listing.
    pub fn saved_graphs(&self) -> Vec<&Graph> {
        let mut graphs: Vec<&Graph> = self.project.graphs.values().collect();
        graphs.sort_by(|a, b| {
            a.metadata
                .name
                .cmp(&b.metadata.name)
                .then_with(|| a.metadata.id.cmp(&b.metadata.id))
        });
        graphs
    }

    /// Switch the editing slot to a saved graph. Returns false when the id
    /// is unknown, leaving the open graph untouched.
    pub fn open_graph(&mut self, graph_id: Uuid) -> bool {
        let Some(graph) = self.project.graphs.get(&graph_id) else {
            return false;
        };
        self.graph = graph.clone();
        true
    }

    /// Wholesale replacement of the document, as performed by new/open.
    ///
    /// The editing slot is reset to the project's first saved graph (name
    /// order), or a fresh untitled graph for an empty project. Any loaded
    /// recording belongs to the previous document and is dropped.
    pub fn replace_project(&mut self, project: Project, loaded_project: LoadedProject) {
        self.project = project;
        self.loaded_project = loaded_project;
        self.recording = None;
        self.graph = self
            .saved_graphs()
            .first()
            .map(|graph| (*graph).clone())
            .unwrap_or_else(Graph::untitled);
    }

    /// Window title the shell should show for the current document.
    pub fn window_title(&self) -> String {
        match &self.loaded_project {
            LoadedProject::Unsaved => format!("{APP_NAME} - {}", self.project.metadata.title),
            LoadedProject::Loaded { path } => format!(
                "{APP_NAME} - {} ({})",
                self.project.metadata.title,
                path.display()
            ),
        }
    }
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new()
    }
}
