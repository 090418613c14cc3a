//! Dependency resolution for hooks
//!
//! This module handles:
//! - Walking the registry depth-first from the requested hooks
//! - Recording every hook, helper, local helper and package reached
//! - Circular dependency detection via the current resolution path
//!
//! The result is a [`DependencyGraph`] keyed by name. A name reached more than
//! once keeps its first position but takes the node of the last visit, so a
//! helper shared by `useA` and `useB` (visited in that order) ends up with
//! `useB` as its parent.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Result, deps};
use crate::registry::Registry;

/// What a dependency node installs as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Unit,
    Helper,
    LocalHelper,
    Package,
}

impl DependencyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DependencyKind::Unit => "unit",
            DependencyKind::Helper => "helper",
            DependencyKind::LocalHelper => "localHelper",
            DependencyKind::Package => "package",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyKind {
    type Err = crate::error::HookError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "unit" => Ok(DependencyKind::Unit),
            "helper" => Ok(DependencyKind::Helper),
            "localHelper" => Ok(DependencyKind::LocalHelper),
            "package" => Ok(DependencyKind::Package),
            other => Err(deps::invalid_kind(other)),
        }
    }
}

/// A single resolved dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    pub kind: DependencyKind,
    pub name: String,
    /// Hook whose installation introduced this node
    pub parent_unit: String,
}

impl DependencyNode {
    pub fn new(kind: DependencyKind, name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            parent_unit: parent.into(),
        }
    }
}

/// Deduplicated resolution result, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: Vec<DependencyNode>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Insert `node`, replacing any node with the same name in place
    ///
    /// Returns the replaced node, if any.
    pub fn insert(&mut self, node: DependencyNode) -> Option<DependencyNode> {
        if let Some(&slot) = self.index.get(&node.name) {
            return Some(std::mem::replace(&mut self.nodes[slot], node));
        }
        self.index.insert(node.name.clone(), self.nodes.len());
        self.nodes.push(node);
        None
    }

    #[allow(dead_code)] // Used in tests
    pub fn get(&self, name: &str) -> Option<&DependencyNode> {
        self.index.get(name).map(|&slot| &self.nodes[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Resolve `roots` and everything they depend on
///
/// Roots are walked one at a time in the given order.
///
/// # Errors
///
/// - `UnknownUnit` if a root, or any hook reached through `hooks`, is not in the registry
/// - `CycleDetected` if a hook is reached again while it is still being resolved
pub fn resolve(registry: &Registry, roots: &[String]) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::default();
    let mut walk = Walk {
        registry,
        resolution_stack: Vec::new(),
    };

    for root in roots {
        walk.visit(root, root, &mut graph)?;
    }

    debug!(roots = roots.len(), nodes = graph.len(), "resolved dependencies");
    Ok(graph)
}

struct Walk<'a> {
    registry: &'a Registry,
    /// Hooks on the current path, outermost first
    resolution_stack: Vec<String>,
}

impl Walk<'_> {
    fn visit(&mut self, name: &str, parent: &str, graph: &mut DependencyGraph) -> Result<()> {
        self.check_cycle(name)?;

        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| deps::unknown_unit(name))?;

        trace!(hook = name, parent, "visiting");
        graph.insert(DependencyNode::new(DependencyKind::Unit, name, parent));

        let leaves = [
            (DependencyKind::Helper, &entry.helpers),
            (DependencyKind::LocalHelper, &entry.local_helpers),
            (DependencyKind::Package, &entry.packages),
        ];
        for (kind, names) in leaves {
            for leaf in names {
                graph.insert(DependencyNode::new(kind, leaf.as_str(), name));
            }
        }

        self.resolution_stack.push(name.to_string());
        for unit in &entry.units {
            self.visit(unit, name, graph)?;
        }
        self.resolution_stack.pop();

        Ok(())
    }

    fn check_cycle(&self, name: &str) -> Result<()> {
        if self.resolution_stack.iter().any(|n| n == name) {
            let mut chain = self.resolution_stack.clone();
            chain.push(name.to_string());
            return Err(deps::circular(&chain));
        }
        Ok(())
    }
}
