/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Serializable types for project persistence.
//!
//! The on-disk schema mirrors the runtime model instead of serializing it
//! directly, so the file format can stay stable while the runtime types
//! move. Project files are versioned JSON; graph files (export/import) are
//! unversioned fragments of the same schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Edge, Graph, GraphMetadata, Node, Project, ProjectMetadata};

pub const PROJECT_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectFileError {
    UnsupportedVersion(u32),
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for ProjectFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectFileError::UnsupportedVersion(version) => {
                write!(
                    f,
                    "unsupported project file version {version} (this build reads up to \
                     {PROJECT_FILE_VERSION})"
                )
            }
            ProjectFileError::Encode(e) => write!(f, "encode error: {e}"),
            ProjectFileError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for ProjectFileError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedProjectMetadata {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedGraphMetadata {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedNode {
    pub id: Uuid,
    pub title: String,
    pub position_x: f32,
    pub position_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedEdge {
    pub from_node_id: Uuid,
    pub to_node_id: Uuid,
}

/// Serialized form of a single graph, used standalone for graph
/// export/import and embedded in [`ProjectFile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub metadata: PersistedGraphMetadata,
    pub nodes: Vec<PersistedNode>,
    pub edges: Vec<PersistedEdge>,
}

impl GraphFile {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            metadata: PersistedGraphMetadata {
                id: graph.metadata.id,
                name: graph.metadata.name.clone(),
                description: graph.metadata.description.clone(),
            },
            nodes: graph
                .nodes
                .iter()
                .map(|node| PersistedNode {
                    id: node.id,
                    title: node.title.clone(),
                    position_x: node.position_x,
                    position_y: node.position_y,
                })
                .collect(),
            edges: graph
                .edges
                .iter()
                .map(|edge| PersistedEdge {
                    from_node_id: edge.from_node_id,
                    to_node_id: edge.to_node_id,
                })
                .collect(),
        }
    }

    pub fn into_graph(self) -> Graph {
        Graph {
            metadata: GraphMetadata {
                id: self.metadata.id,
                name: self.metadata.name,
                description: self.metadata.description,
            },
            nodes: self
                .nodes
                .into_iter()
                .map(|node| Node {
                    id: node.id,
                    title: node.title,
                    position_x: node.position_x,
                    position_y: node.position_y,
                })
                .collect(),
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    from_node_id: edge.from_node_id,
                    to_node_id: edge.to_node_id,
                })
                .collect(),
        }
    }
}

/// Serialized form of a whole project. Graphs are keyed by id in a
/// `BTreeMap` so the persisted output is stably ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: u32,
    pub metadata: PersistedProjectMetadata,
    pub graphs: BTreeMap<Uuid, GraphFile>,
}

impl ProjectFile {
    pub fn from_project(project: &Project) -> Self {
        Self {
            version: PROJECT_FILE_VERSION,
            metadata: PersistedProjectMetadata {
                id: project.metadata.id,
                title: project.metadata.title.clone(),
                description: project.metadata.description.clone(),
            },
            graphs: project
                .graphs
                .values()
                .map(|graph| (graph.metadata.id, GraphFile::from_graph(graph)))
                .collect(),
        }
    }

    /// Convert back to the runtime model, re-keying each graph by its own
    /// metadata id. Rejects files written by a newer schema.
    pub fn into_project(self) -> Result<Project, ProjectFileError> {
        if self.version > PROJECT_FILE_VERSION {
            return Err(ProjectFileError::UnsupportedVersion(self.version));
        }
        Ok(Project {
            metadata: ProjectMetadata {
                id: self.metadata.id,
                title: self.metadata.title,
                description: self.metadata.description,
            },
            graphs: self
                .graphs
                .into_values()
                .map(|graph| {
                    let graph = graph.into_graph();
                    (graph.metadata.id, graph)
                })
                .collect(),
        })
    }

    pub fn to_json(&self) -> Result<String, ProjectFileError> {
        serde_json::to_string_pretty(self).map_err(|e| ProjectFileError::Encode(format!("{e}")))
    }

    pub fn from_json(raw: &str) -> Result<Self, ProjectFileError> {
        serde_json::from_str(raw).map_err(|e| ProjectFileError::Decode(format!("{e}")))
    }
}
