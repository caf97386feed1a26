use{
    serde::{Serialize, Deserialize},
    std::collections::HashMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType{
    /// within a household clique
    Intra,
    /// background small-world contact
    Inter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge{
    /// canonical [min, max] node pair
    pub pair: [usize; 2],
    pub connection: ConnectionType,
}

/// Node set plus deduplicated undirected edge set. Structurally immutable:
/// a builder creates it wholesale and an NPI replaces it wholesale.
/// Epidemiological state lives with the engine, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactGraph{
    node_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, ConnectionType)>>,
}

impl ContactGraph{
    /// Collects edges into the graph. Deduplicates on the unordered pair
    /// (the last tag offered wins, like repeated insertions would) and
    /// drops self loops. Edge and neighbor lists end up sorted, which
    /// keeps iteration order reproducible under a seeded rng.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where I: IntoIterator<Item = Edge>
    {
        let mut dedup: HashMap<[usize; 2], ConnectionType> = HashMap::new();
        for edge in edges{
            debug_assert!(edge.pair[0] <= edge.pair[1]);
            debug_assert!(edge.pair[1] < node_count);
            if edge.pair[0] == edge.pair[1]{
                continue;
            }
            dedup.insert(edge.pair, edge.connection);
        }

        let mut edge_list: Vec<Edge> = dedup
            .into_iter()
            .map(|(pair, connection)| Edge{pair, connection})
            .collect();
        edge_list.sort_unstable_by_key(|edge| edge.pair);

        let mut adjacency = vec![Vec::new(); node_count];
        for edge in edge_list.iter(){
            adjacency[edge.pair[0]].push((edge.pair[1], edge.connection));
            adjacency[edge.pair[1]].push((edge.pair[0], edge.connection));
        }
        for neighbors in adjacency.iter_mut(){
            neighbors.sort_unstable_by_key(|&(neighbor, _)| neighbor);
        }

        Self{
            node_count,
            edges: edge_list,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize
    {
        self.node_count
    }

    pub fn edge_count(&self) -> usize
    {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge]
    {
        &self.edges
    }

    pub fn neighbors(&self, node: usize) -> &[(usize, ConnectionType)]
    {
        &self.adjacency[node]
    }

    pub fn degree(&self, node: usize) -> usize
    {
        self.adjacency[node].len()
    }

    pub fn contains_edge(&self, a: usize, b: usize) -> bool
    {
        let pair = super::canonical_pair(a, b);
        self.edges
            .binary_search_by_key(&pair, |edge| edge.pair)
            .is_ok()
    }

    /// Snapshot of the bare pair list, e.g. for comparing topologies
    /// before and after an intervention.
    pub fn edge_pairs(&self) -> Vec<[usize; 2]>
    {
        self.edges.iter().map(|edge| edge.pair).collect()
    }
}

#[cfg(test)]
mod testing
{
    use super::*;

    #[test]
    fn duplicate_pairs_collapse()
    {
        let edges = [
            Edge{pair: [0, 1], connection: ConnectionType::Inter},
            Edge{pair: [0, 1], connection: ConnectionType::Intra},
            Edge{pair: [1, 2], connection: ConnectionType::Inter},
        ];
        let graph = ContactGraph::from_edges(3, edges);

        assert_eq!(graph.edge_count(), 2);
        // last tag wins
        assert_eq!(graph.edges()[0].connection, ConnectionType::Intra);
        assert!(graph.contains_edge(1, 0));
        assert!(!graph.contains_edge(0, 2));
    }

    #[test]
    fn self_loops_are_dropped()
    {
        let edges = [
            Edge{pair: [1, 1], connection: ConnectionType::Inter},
            Edge{pair: [0, 2], connection: ConnectionType::Inter},
        ];
        let graph = ContactGraph::from_edges(3, edges);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(1), 0);
    }

    #[test]
    fn adjacency_matches_edges()
    {
        let edges = [
            Edge{pair: [0, 1], connection: ConnectionType::Inter},
            Edge{pair: [0, 2], connection: ConnectionType::Intra},
        ];
        let graph = ContactGraph::from_edges(3, edges);

        assert_eq!(graph.neighbors(0), &[(1, ConnectionType::Inter), (2, ConnectionType::Intra)]);
        assert_eq!(graph.neighbors(1), &[(0, ConnectionType::Inter)]);
        assert_eq!(graph.neighbors(2), &[(0, ConnectionType::Intra)]);
    }
}
