//! Wire-dependency DAG over an ordered circuit.
//!
//! Nodes are gates (by position in the [`OrderedCircuit`]); an edge `a → b`
//! means `b` is the next gate after `a` on some shared qubit wire. The DAG is
//! used for depth and moment (layer) analysis, never for execution order,
//! which is fixed by validation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;

use crate::qubit::QubitId;
use crate::validate::OrderedCircuit;

/// Node index type for the dependency DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// Dependency graph of an ordered circuit.
#[derive(Debug)]
pub struct DependencyDag {
    /// Node weight is the gate position in execution order.
    graph: DiGraph<usize, QubitId, u32>,
}

impl DependencyDag {
    /// Build the DAG from an ordered circuit.
    pub fn from_ordered(circuit: &OrderedCircuit) -> Self {
        let mut graph = DiGraph::with_capacity(circuit.len(), circuit.len() * 2);
        let mut wire_front: FxHashMap<QubitId, NodeIndex> = FxHashMap::default();

        for (position, op) in circuit.operations().enumerate() {
            let node = graph.add_node(position);
            for qubit in op.qubits() {
                if let Some(prev) = wire_front.insert(qubit, node) {
                    graph.add_edge(prev, node, qubit);
                }
            }
        }

        Self { graph }
    }

    /// Get the number of gate nodes.
    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Level of each node: 0 for gates with no predecessor, otherwise one
    /// more than the deepest predecessor. Indexed by gate position.
    fn levels(&self) -> Vec<usize> {
        let mut levels = vec![0usize; self.graph.node_count()];
        // Node indices follow insertion order, which is already topological.
        for node in self.graph.node_indices() {
            let level = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| levels[e.source().index()] + 1)
                .max()
                .unwrap_or(0);
            levels[node.index()] = level;
        }
        levels
    }

    /// Circuit depth: the longest chain of dependent gates.
    pub fn depth(&self) -> usize {
        self.levels().into_iter().max().map_or(0, |deepest| deepest + 1)
    }

    /// Group gate positions into moments: gates in the same layer act on
    /// disjoint qubits and depend only on earlier layers.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let levels = self.levels();
        let mut layers: Vec<Vec<usize>> = vec![vec![]; self.depth()];
        for node in self.graph.node_indices() {
            layers[levels[node.index()]].push(self.graph[node]);
        }
        layers
    }

    /// Gate positions that directly precede `position` on a shared wire.
    pub fn predecessors(&self, position: usize) -> Vec<usize> {
        let node = NodeIndex::new(position);
        if self.graph.node_weight(node).is_none() {
            return vec![];
        }
        let mut preds: Vec<_> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .map(|n| self.graph[n])
            .collect();
        preds.sort_unstable();
        preds.dedup();
        preds
    }
}
