use{
    rand::Rng,
    serde::{Serialize, Deserialize},
    std::num::NonZeroUsize,
    super::*,
    crate::error::*,
};

/// How the node set is specified. Chosen explicitly by the caller, the
/// builder never infers it from the shape of its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Population{
    FixedSize(NonZeroUsize),
    /// `sizes[i]` people live in household i; household i's head is node i
    HouseholdSizes(Vec<usize>),
}

impl Population{
    pub fn node_count(&self) -> usize
    {
        match self{
            Self::FixedSize(n) => n.get(),
            Self::HouseholdSizes(sizes) => sizes.iter().sum(),
        }
    }

    pub fn validate(&self) -> SimResult<()>
    {
        if let Self::HouseholdSizes(sizes) = self{
            if sizes.is_empty(){
                return Err(SimError::Configuration("household distribution is empty".into()));
            }
            if sizes.iter().any(|&size| size == 0){
                return Err(SimError::Configuration("household sizes must be positive".into()));
            }
        }
        Ok(())
    }
}

/// Watts-Strogatz ring+rewire base graph, optionally expanded so that
/// every household becomes a fully connected clique. Base edges are
/// tagged `Inter`, clique edges `Intra`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HouseholdClique{
    /// nearest neighbors per node on the base ring
    pub base_degree: usize,
    pub rewire_prob: f64,
}

impl HouseholdClique{
    fn validate(&self) -> SimResult<()>
    {
        if self.base_degree == 0{
            return Err(SimError::Configuration("mean degree must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.rewire_prob){
            return Err(SimError::Configuration(
                format!("rewiring probability {} outside [0, 1]", self.rewire_prob)
            ));
        }
        Ok(())
    }

    pub fn build<R>(&self, population: &Population, rng: &mut R) -> SimResult<ContactGraph>
    where R: Rng
    {
        self.validate()?;
        population.validate()?;

        match population{
            Population::FixedSize(n) => self.watts_strogatz(n.get(), rng),
            Population::HouseholdSizes(sizes) => self.clique_graph(sizes, rng),
        }
    }

    fn base_pairs<R>(&self, n: usize, rng: &mut R) -> Vec<[usize; 2]>
    where R: Rng
    {
        let mut pairs = Vec::with_capacity(n * self.base_degree);
        for node in 0..n{
            pairs.extend(lattice_neighbors(node, self.base_degree, n));
        }
        pairs.sort_unstable();
        pairs.dedup();
        rewire_pairs(&mut pairs, self.rewire_prob, n, rng);
        pairs
    }

    /// degenerate case: no households, the base graph is the whole network
    fn watts_strogatz<R>(&self, n: usize, rng: &mut R) -> SimResult<ContactGraph>
    where R: Rng
    {
        let edges = self
            .base_pairs(n, rng)
            .into_iter()
            .map(|pair| Edge{pair, connection: ConnectionType::Inter});
        Ok(ContactGraph::from_edges(n, edges))
    }

    fn clique_graph<R>(&self, sizes: &[usize], rng: &mut R) -> SimResult<ContactGraph>
    where R: Rng
    {
        let heads = sizes.len();
        let total: usize = sizes.iter().sum();

        let mut edges: Vec<Edge> = self
            .base_pairs(heads, rng)
            .into_iter()
            .map(|pair| Edge{pair, connection: ConnectionType::Inter})
            .collect();

        // members get contiguous ids appended after all head nodes, in
        // household order; a head keeps its ring id, so regenerating with
        // the same distribution reproduces the id layout exactly
        let mut next_id = heads;
        for (head, &size) in sizes.iter().enumerate(){
            if size < 2{
                continue;
            }
            let members: Vec<usize> = std::iter::once(head)
                .chain(next_id..next_id + size - 1)
                .collect();
            next_id += size - 1;

            for i in 0..members.len(){
                for j in i + 1..members.len(){
                    edges.push(Edge{
                        pair: canonical_pair(members[i], members[j]),
                        connection: ConnectionType::Intra,
                    });
                }
            }
        }
        debug_assert_eq!(next_id, total);

        Ok(ContactGraph::from_edges(total, edges))
    }
}

#[cfg(test)]
mod testing
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    fn count_by_type(graph: &ContactGraph, connection: ConnectionType) -> usize
    {
        graph.edges()
            .iter()
            .filter(|edge| edge.connection == connection)
            .count()
    }

    #[test]
    fn all_singleton_households_yield_no_intra_edges()
    {
        let builder = HouseholdClique{base_degree: 4, rewire_prob: 0.1};
        let mut rng = Pcg64::seed_from_u64(31415);
        let sizes = vec![1; 40];
        let graph = builder.build(&Population::HouseholdSizes(sizes), &mut rng).unwrap();

        assert_eq!(graph.node_count(), 40);
        assert_eq!(count_by_type(&graph, ConnectionType::Intra), 0);
        assert!(count_by_type(&graph, ConnectionType::Inter) > 0);
    }

    #[test]
    fn single_household_of_five_is_a_complete_clique()
    {
        let builder = HouseholdClique{base_degree: 4, rewire_prob: 0.3};
        let mut rng = Pcg64::seed_from_u64(9);
        let graph = builder.build(&Population::HouseholdSizes(vec![5]), &mut rng).unwrap();

        assert_eq!(graph.node_count(), 5);
        // K5
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(count_by_type(&graph, ConnectionType::Intra), 10);
        assert_eq!(count_by_type(&graph, ConnectionType::Inter), 0);
        for a in 0..5{
            for b in a + 1..5{
                assert!(graph.contains_edge(a, b));
            }
        }
    }

    #[test]
    fn node_count_is_the_household_sum()
    {
        let builder = HouseholdClique{base_degree: 2, rewire_prob: 0.0};
        let mut rng = Pcg64::seed_from_u64(123);
        let sizes = vec![1, 4, 2, 1, 3];
        let graph = builder.build(&Population::HouseholdSizes(sizes), &mut rng).unwrap();

        assert_eq!(graph.node_count(), 11);
        // household 1 (head node 1) is a clique over {1, 5, 6, 7}
        assert!(graph.contains_edge(1, 5));
        assert!(graph.contains_edge(5, 6));
        assert!(graph.contains_edge(6, 7));
        // heads 0..5, first allocated member is node 5
        assert!(!graph.contains_edge(0, 5));
    }

    #[test]
    fn fixed_size_population_is_plain_watts_strogatz()
    {
        let builder = HouseholdClique{base_degree: 6, rewire_prob: 0.2};
        let mut rng = Pcg64::seed_from_u64(55);
        let n = NonZeroUsize::new(100).unwrap();
        let graph = builder.build(&Population::FixedSize(n), &mut rng).unwrap();

        assert_eq!(graph.node_count(), 100);
        assert_eq!(count_by_type(&graph, ConnectionType::Intra), 0);
        for edge in graph.edges(){
            assert!(edge.pair[0] < edge.pair[1]);
        }
    }

    #[test]
    fn empty_distribution_is_rejected()
    {
        let builder = HouseholdClique{base_degree: 2, rewire_prob: 0.0};
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(matches!(
            builder.build(&Population::HouseholdSizes(Vec::new()), &mut rng),
            Err(SimError::Configuration(_))
        ));
    }
}
