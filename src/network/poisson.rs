use{
    rand::Rng,
    rand::distributions::Distribution,
    rand_distr::Poisson,
    serde::{Serialize, Deserialize},
    super::*,
    crate::error::*,
};

/// Small-world builder with per-node degrees drawn from Poisson(mean_degree).
/// Every node contributes its ring-lattice neighborhood, the union is
/// deduplicated, then each edge is rewired independently with
/// `rewire_prob`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoissonSmallWorld{
    pub mean_degree: usize,
    pub rewire_prob: f64,
}

impl PoissonSmallWorld{
    fn validate(&self, n: usize) -> SimResult<()>
    {
        if n == 0{
            return Err(SimError::Configuration("network size must be positive".into()));
        }
        if self.mean_degree == 0{
            return Err(SimError::Configuration("mean degree must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.rewire_prob){
            return Err(SimError::Configuration(
                format!("rewiring probability {} outside [0, 1]", self.rewire_prob)
            ));
        }
        Ok(())
    }

    pub fn build<R>(&self, n: usize, rng: &mut R) -> SimResult<ContactGraph>
    where R: Rng
    {
        self.validate(n)?;

        let degree_dist = Poisson::new(self.mean_degree as f64)
            .map_err(|_| SimError::Configuration("mean degree must be positive".into()))?;

        let mut pairs = Vec::with_capacity(n * self.mean_degree);
        for node in 0..n{
            let degree = degree_dist.sample(rng) as usize;
            pairs.extend(lattice_neighbors(node, degree, n));
        }
        pairs.sort_unstable();
        pairs.dedup();

        rewire_pairs(&mut pairs, self.rewire_prob, n, rng);

        // degrees are stochastic here, so the tag carries no household
        // meaning; everything is background contact
        let edges = pairs
            .into_iter()
            .map(|pair| Edge{pair, connection: ConnectionType::Inter});
        Ok(ContactGraph::from_edges(n, edges))
    }

    /// Regenerates connectivity over an existing node set: same node
    /// identifiers, all prior edges discarded. Topology only, any per-node
    /// simulation state is none of the builder's business.
    pub fn update<R>(&self, graph: &ContactGraph, rng: &mut R) -> SimResult<ContactGraph>
    where R: Rng
    {
        self.build(graph.node_count(), rng)
    }
}
