//! Transitive dependency walking
//!
//! [`IntegrationFile::dependencies`] resolves one level at a time; this
//! walker follows the chain across projects, recording the shape of the
//! graph as it goes. A visited set keyed by (platform, project) stops
//! cyclic and repeated references from re-expanding, and a depth limit
//! bounds hostile chains that never revisit a project.

use crate::model::{IntegrationFile, Platform};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// Bounds for one transitive resolution call
#[derive(Debug, Clone)]
pub struct ResolutionLimits {
    /// How many dependency hops away from the root to expand
    pub max_depth: usize,
}

impl Default for ResolutionLimits {
    fn default() -> Self {
        Self { max_depth: 8 }
    }
}

/// One project in the resolved dependency graph
#[derive(Debug, Clone)]
pub struct DependencyNode {
    pub platform: Platform,
    pub project_id: String,
    pub file_id: String,
}

/// Result of walking a file's dependency closure
pub struct TransitiveResolution {
    graph: DiGraph<DependencyNode, ()>,
    order: Vec<Arc<IntegrationFile>>,
}

impl TransitiveResolution {
    /// Project-level dependency graph, root included; edges point from a
    /// file's project to the projects it requires
    pub fn graph(&self) -> &DiGraph<DependencyNode, ()> {
        &self.graph
    }

    /// Resolved files in breadth-first discovery order, root excluded
    pub fn order(&self) -> &[Arc<IntegrationFile>] {
        &self.order
    }

    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

/// Walk the full required-dependency closure of one file
///
/// Each project is expanded at most once per call; a dependency pointing
/// back at an already-seen project still gets its edge recorded, so
/// cycles are visible in the graph without being followed.
pub async fn resolve_transitive(
    root: &Arc<IntegrationFile>,
    limits: &ResolutionLimits,
) -> TransitiveResolution {
    let mut graph = DiGraph::new();
    let mut node_map: HashMap<(Platform, String), NodeIndex> = HashMap::new();
    let mut visited: HashSet<(Platform, String)> = HashSet::new();

    let root_key = (root.parent().platform(), root.parent().id().to_string());
    let root_node = graph.add_node(DependencyNode {
        platform: root_key.0,
        project_id: root_key.1.clone(),
        file_id: root.id().to_string(),
    });
    node_map.insert(root_key.clone(), root_node);
    visited.insert(root_key);

    let mut order = Vec::new();
    let mut queue: VecDeque<(Arc<IntegrationFile>, NodeIndex, usize)> = VecDeque::new();
    queue.push_back((root.clone(), root_node, 0));

    while let Some((file, node, depth)) = queue.pop_front() {
        if depth >= limits.max_depth {
            debug!(
                depth,
                project_id = file.parent().id(),
                "depth limit reached, leaving chain unexpanded"
            );
            continue;
        }

        for dep in file.dependencies().await {
            let key = (dep.parent().platform(), dep.parent().id().to_string());
            let dep_node = *node_map.entry(key.clone()).or_insert_with(|| {
                graph.add_node(DependencyNode {
                    platform: key.0,
                    project_id: key.1.clone(),
                    file_id: dep.id().to_string(),
                })
            });
            graph.add_edge(node, dep_node, ());

            if visited.insert(key) {
                order.push(dep.clone());
                queue.push_back((dep.clone(), dep_node, depth + 1));
            }
        }
    }

    TransitiveResolution { graph, order }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
