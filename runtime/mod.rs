/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Boundary traits the platform shell implements for the persistence core.
//!
//! Dialog-backed operations return `Ok(None)` when the user dismisses the
//! dialog; cancellation is a normal silent path, never an error. `Err` is
//! reserved for real I/O or encoding failures.

use std::path::{Path, PathBuf};

use crate::services::persistence::types::{GraphFile, ProjectFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIoError {
    Io(String),
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for HostIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostIoError::Io(e) => write!(f, "IO error: {e}"),
            HostIoError::Encode(e) => write!(f, "Encode error: {e}"),
            HostIoError::Decode(e) => write!(f, "Decode error: {e}"),
        }
    }
}

impl std::error::Error for HostIoError {}

/// Failure of a best-effort host feature (e.g. window chrome when not
/// running under the expected shell). Callers downgrade this to a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPortError {
    Unavailable(String),
}

impl std::fmt::Display for HostPortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostPortError::Unavailable(e) => write!(f, "host feature unavailable: {e}"),
        }
    }
}

impl std::error::Error for HostPortError {}

/// Project, graph, and recording I/O through the host's native dialogs and
/// storage.
pub trait HostProjectIoPort {
    /// Write the project file to a known location without prompting.
    fn save_project_data_no_prompt(
        &self,
        file: &ProjectFile,
        path: &Path,
    ) -> Result<(), HostIoError>;

    /// Location-prompting save. `Ok(None)` means the user cancelled.
    fn save_project_data(&self, file: &ProjectFile) -> Result<Option<PathBuf>, HostIoError>;

    /// Open-project dialog plus file read. `Ok(None)` means the user
    /// cancelled.
    fn load_project_data(&self) -> Result<Option<(ProjectFile, PathBuf)>, HostIoError>;

    /// Location-prompting export of a single graph.
    fn save_graph_data(&self, graph: &GraphFile) -> Result<Option<PathBuf>, HostIoError>;

    /// Import dialog plus file read for a single graph.
    fn load_graph_data(&self) -> Result<Option<GraphFile>, HostIoError>;

    /// Recording-selection dialog. The core only tracks the chosen path.
    fn pick_recording(&self) -> Result<Option<PathBuf>, HostIoError>;
}

/// User-facing feedback surface.
pub trait HostNotifyPort {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Window chrome. `set_title` is best-effort; `request_close` asks the
/// shell to begin teardown.
pub trait HostWindowPort {
    fn set_title(&self, title: &str) -> Result<(), HostPortError>;
    fn request_close(&self);
}

/// Bundle of host ports handed to coordinator operations and command
/// dispatch, so handlers receive current collaborators at call time rather
/// than capturing them earlier.
pub struct HostPorts<'a> {
    pub io: &'a dyn HostProjectIoPort,
    pub notify: &'a dyn HostNotifyPort,
    pub window: &'a dyn HostWindowPort,
}
