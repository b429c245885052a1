//! Shared scenario harness: stub host ports that record every interaction
//! and serve scripted dialog results.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use graphdeck::app::EditorApp;
use graphdeck::model::{Graph, LoadedProject, Node, Project};
use graphdeck::runtime::{
    HostIoError, HostNotifyPort, HostPortError, HostPorts, HostProjectIoPort, HostWindowPort,
};
use graphdeck::services::persistence::types::{GraphFile, ProjectFile};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Stub host. Dialog results are scripted through the `*_result` fields
/// (`None` = user cancels); every write and notification is recorded.
pub struct StubHost {
    pub save_dialog_result: RefCell<Option<PathBuf>>,
    pub open_result: RefCell<Option<(ProjectFile, PathBuf)>>,
    pub graph_save_result: RefCell<Option<PathBuf>>,
    pub graph_load_result: RefCell<Option<GraphFile>>,
    pub recording_result: RefCell<Option<PathBuf>>,
    /// When set, no-prompt writes fail with this message.
    pub no_prompt_failure: RefCell<Option<String>>,
    pub window_available: Cell<bool>,

    pub saved_no_prompt: RefCell<Vec<(ProjectFile, PathBuf)>>,
    pub prompt_saved: RefCell<Vec<ProjectFile>>,
    pub exported_graphs: RefCell<Vec<GraphFile>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub titles: RefCell<Vec<String>>,
    pub close_requests: Cell<u32>,
}

impl StubHost {
    pub fn new() -> Self {
        Self {
            save_dialog_result: RefCell::new(None),
            open_result: RefCell::new(None),
            graph_save_result: RefCell::new(None),
            graph_load_result: RefCell::new(None),
            recording_result: RefCell::new(None),
            no_prompt_failure: RefCell::new(None),
            window_available: Cell::new(true),
            saved_no_prompt: RefCell::new(Vec::new()),
            prompt_saved: RefCell::new(Vec::new()),
            exported_graphs: RefCell::new(Vec::new()),
            notifications: RefCell::new(Vec::new()),
            titles: RefCell::new(Vec::new()),
            close_requests: Cell::new(0),
        }
    }

    pub fn ports(&self) -> HostPorts<'_> {
        HostPorts {
            io: self,
            notify: self,
            window: self,
        }
    }

    pub fn success_count(&self) -> usize {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Success(_)))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Error(_)))
            .count()
    }
}

impl HostProjectIoPort for StubHost {
    fn save_project_data_no_prompt(
        &self,
        file: &ProjectFile,
        path: &Path,
    ) -> Result<(), HostIoError> {
        if let Some(message) = self.no_prompt_failure.borrow().clone() {
            return Err(HostIoError::Io(message));
        }
        self.saved_no_prompt
            .borrow_mut()
            .push((file.clone(), path.to_path_buf()));
        Ok(())
    }

    fn save_project_data(&self, file: &ProjectFile) -> Result<Option<PathBuf>, HostIoError> {
        let Some(path) = self.save_dialog_result.borrow().clone() else {
            return Ok(None);
        };
        self.prompt_saved.borrow_mut().push(file.clone());
        Ok(Some(path))
    }

    fn load_project_data(&self) -> Result<Option<(ProjectFile, PathBuf)>, HostIoError> {
        Ok(self.open_result.borrow().clone())
    }

    fn save_graph_data(&self, graph: &GraphFile) -> Result<Option<PathBuf>, HostIoError> {
        let Some(path) = self.graph_save_result.borrow().clone() else {
            return Ok(None);
        };
        self.exported_graphs.borrow_mut().push(graph.clone());
        Ok(Some(path))
    }

    fn load_graph_data(&self) -> Result<Option<GraphFile>, HostIoError> {
        Ok(self.graph_load_result.borrow().clone())
    }

    fn pick_recording(&self) -> Result<Option<PathBuf>, HostIoError> {
        Ok(self.recording_result.borrow().clone())
    }
}

impl HostNotifyPort for StubHost {
    fn notify_success(&self, message: &str) {
        self.notifications
            .borrow_mut()
            .push(Notification::Success(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.notifications
            .borrow_mut()
            .push(Notification::Error(message.to_string()));
    }
}

impl HostWindowPort for StubHost {
    fn set_title(&self, title: &str) -> Result<(), HostPortError> {
        if !self.window_available.get() {
            return Err(HostPortError::Unavailable("no window shell".to_string()));
        }
        self.titles.borrow_mut().push(title.to_string());
        Ok(())
    }

    fn request_close(&self) {
        self.close_requests.set(self.close_requests.get() + 1);
    }
}

pub fn graph_named(name: &str) -> Graph {
    let mut graph = Graph::untitled();
    graph.metadata.name = name.to_string();
    graph.nodes.push(Node {
        id: Uuid::new_v4(),
        title: format!("{name}-node"),
        position_x: 0.0,
        position_y: 0.0,
    });
    graph
}

pub fn project_with_graphs(graphs: &[Graph]) -> Project {
    let mut project = Project::untitled();
    for graph in graphs {
        project.graphs.insert(graph.metadata.id, graph.clone());
    }
    project
}

/// App whose project is already backed by `path`.
pub fn loaded_app(project: Project, open_graph: Graph, path: &Path) -> EditorApp {
    let mut app = EditorApp::new();
    app.project = project;
    app.graph = open_graph;
    app.loaded_project = LoadedProject::Loaded {
        path: path.to_path_buf(),
    };
    app
}
