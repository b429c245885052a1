/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Document model for Graphdeck projects.
//!
//! A project is a named collection of graphs plus metadata. The graph body
//! (nodes, edges) is modelled only to the depth save/load round-tripping
//! needs; execution semantics live elsewhere.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Project metadata. `id` is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectMetadata {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

/// Top-level project document: metadata plus all saved graphs, keyed by
/// graph id. Key order is irrelevant; the persisted form is ordered.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub metadata: ProjectMetadata,
    pub graphs: HashMap<Uuid, Graph>,
}

impl Project {
    /// Fresh project with a new identity and no graphs.
    pub fn untitled() -> Self {
        Self {
            metadata: ProjectMetadata {
                id: Uuid::new_v4(),
                title: "Untitled Project".to_string(),
                description: None,
            },
            graphs: HashMap::new(),
        }
    }
}

/// Graph metadata. `id` is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphMetadata {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: Uuid,
    pub title: String,
    pub position_x: f32,
    pub position_y: f32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub from_node_id: Uuid,
    pub to_node_id: Uuid,
}

/// A single editable graph document.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Graph {
    pub metadata: GraphMetadata,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Fresh empty graph with a new identity.
    pub fn untitled() -> Self {
        Self {
            metadata: GraphMetadata {
                id: Uuid::new_v4(),
                name: "Untitled Graph".to_string(),
                description: None,
            },
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Whether and where the current project is backed by a disk location.
///
/// A brand-new project starts `Unsaved`; the first completed save (prompted
/// or not) moves it to `Loaded` and it stays there until a new/open
/// operation replaces it wholesale. A loaded project without a path is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadedProject {
    #[default]
    Unsaved,
    Loaded {
        path: PathBuf,
    },
}

impl LoadedProject {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Unsaved => None,
            Self::Loaded { path } => Some(path),
        }
    }
}

/// Recording chosen by the user for the runner to consume. The recording
/// contents stay with the host; only the selection is tracked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecording {
    pub path: PathBuf,
}
