/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Project persistence coordinator.
//!
//! Free functions over the editor state store and the host ports. Every
//! operation is fail-soft: failures are reported through the notification
//! port and logged, the in-memory state is left exactly as it was before
//! the attempt, and a retry is safe. A user dismissing a dialog is a
//! normal silent path, not a failure.

pub mod types;

use std::path::PathBuf;

use log::{info, warn};

use crate::app::EditorApp;
use crate::model::{Graph, LoadedProject, LoadedRecording, Project};
use crate::runtime::HostPorts;
use types::{GraphFile, ProjectFile};

/// Which path a save-shaped operation took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
    Failed,
}

/// Which path a load-shaped operation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Cancelled,
    Failed,
}

/// Merge the open graph into the project's graph map, keyed by its own id.
///
/// This is the single reconcile step of a logical save. `save_project`
/// delegates to `save_project_as` before reconciling, so it runs exactly
/// once per save regardless of which entry point was used.
pub fn reconcile_open_graph(project: &Project, graph: &Graph) -> Project {
    let mut reconciled = project.clone();
    reconciled.graphs.insert(graph.metadata.id, graph.clone());
    reconciled
}

/// Save to the known location, or fall through to the location prompt for
/// a project that has never been saved.
pub fn save_project(app: &mut EditorApp, host: &HostPorts<'_>) -> SaveOutcome {
    let path = match &app.loaded_project {
        LoadedProject::Unsaved => return save_project_as(app, host),
        LoadedProject::Loaded { path } => path.clone(),
    };

    let reconciled = reconcile_open_graph(&app.project, &app.graph);
    let file = ProjectFile::from_project(&reconciled);
    match host.io.save_project_data_no_prompt(&file, &path) {
        Ok(()) => {
            commit_saved_project(app, host, reconciled, path.clone());
            SaveOutcome::Saved(path)
        }
        Err(e) => {
            warn!("Project save to {} failed: {e}", path.display());
            host.notify
                .notify_error(&format!("Failed to save project: {e}"));
            SaveOutcome::Failed
        }
    }
}

/// Save through the location-prompting dialog.
pub fn save_project_as(app: &mut EditorApp, host: &HostPorts<'_>) -> SaveOutcome {
    let reconciled = reconcile_open_graph(&app.project, &app.graph);
    let file = ProjectFile::from_project(&reconciled);
    match host.io.save_project_data(&file) {
        Ok(Some(path)) => {
            commit_saved_project(app, host, reconciled, path.clone());
            SaveOutcome::Saved(path)
        }
        // User dismissed the dialog; nothing changed, nothing to report.
        Ok(None) => SaveOutcome::Cancelled,
        Err(e) => {
            warn!("Prompted project save failed: {e}");
            host.notify
                .notify_error(&format!("Failed to save project: {e}"));
            SaveOutcome::Failed
        }
    }
}

fn commit_saved_project(
    app: &mut EditorApp,
    host: &HostPorts<'_>,
    reconciled: Project,
    path: PathBuf,
) {
    app.project = reconciled;
    app.settings.note_recent_project(&path);
    app.loaded_project = LoadedProject::Loaded { path };
    host.notify.notify_success("Project saved");
    refresh_window_title(app, host);
}

/// Export the graph currently open in the editor, read at call time.
pub fn export_graph(app: &EditorApp, host: &HostPorts<'_>) -> SaveOutcome {
    let file = GraphFile::from_graph(&app.graph);
    match host.io.save_graph_data(&file) {
        Ok(Some(path)) => {
            host.notify.notify_success("Graph exported");
            SaveOutcome::Saved(path)
        }
        Ok(None) => SaveOutcome::Cancelled,
        Err(e) => {
            warn!("Graph export failed: {e}");
            host.notify
                .notify_error(&format!("Failed to export graph: {e}"));
            SaveOutcome::Failed
        }
    }
}

/// Replace the open graph wholesale with one chosen by the user. No merge
/// is attempted; the previous open graph is discarded (saved copies in
/// `project.graphs` are untouched).
pub fn import_graph(app: &mut EditorApp, host: &HostPorts<'_>) -> LoadOutcome {
    match host.io.load_graph_data() {
        Ok(Some(file)) => {
            app.graph = file.into_graph();
            LoadOutcome::Loaded
        }
        Ok(None) => LoadOutcome::Cancelled,
        Err(e) => {
            warn!("Graph import failed: {e}");
            host.notify
                .notify_error(&format!("Failed to import graph: {e}"));
            LoadOutcome::Failed
        }
    }
}

/// Wholesale replacement with a fresh untitled document.
pub fn new_project(app: &mut EditorApp, host: &HostPorts<'_>) {
    app.replace_project(Project::untitled(), LoadedProject::Unsaved);
    refresh_window_title(app, host);
}

/// Open a project file chosen by the user, replacing the current document
/// wholesale on success.
pub fn open_project(app: &mut EditorApp, host: &HostPorts<'_>) -> LoadOutcome {
    let (file, path) = match host.io.load_project_data() {
        Ok(Some(chosen)) => chosen,
        Ok(None) => return LoadOutcome::Cancelled,
        Err(e) => {
            warn!("Project open failed: {e}");
            host.notify
                .notify_error(&format!("Failed to open project: {e}"));
            return LoadOutcome::Failed;
        }
    };

    match file.into_project() {
        Ok(project) => {
            info!("Opened project from {}", path.display());
            app.settings.note_recent_project(&path);
            app.replace_project(project, LoadedProject::Loaded { path });
            refresh_window_title(app, host);
            LoadOutcome::Loaded
        }
        Err(e) => {
            warn!("Project file {} is unreadable: {e}", path.display());
            host.notify
                .notify_error(&format!("Failed to open project: {e}"));
            LoadOutcome::Failed
        }
    }
}

/// Remember a recording chosen by the user for the runner to consume.
pub fn load_recording(app: &mut EditorApp, host: &HostPorts<'_>) -> LoadOutcome {
    match host.io.pick_recording() {
        Ok(Some(path)) => {
            app.recording = Some(LoadedRecording { path });
            LoadOutcome::Loaded
        }
        Ok(None) => LoadOutcome::Cancelled,
        Err(e) => {
            warn!("Recording selection failed: {e}");
            host.notify
                .notify_error(&format!("Failed to load recording: {e}"));
            LoadOutcome::Failed
        }
    }
}

/// Best-effort window-title refresh. Shells without window chrome (tests,
/// headless hosts) land in the error arm; that is a log line, never a
/// user-facing failure.
pub fn refresh_window_title(app: &EditorApp, host: &HostPorts<'_>) {
    if let Err(e) = host.window.set_title(&app.window_title()) {
        warn!("Failed to set window title: {e}");
    }
}
