use{
    rand::Rng,
    serde::{Serialize, Deserialize},
    super::*,
    crate::error::*,
    crate::misc_types::*,
    crate::network::*,
};

/// Partial parameter set merged into the active parameters at
/// `start_day`. Only one trigger per run; a sorted sequence of
/// (day, override) pairs would be the natural extension but is not
/// supported.
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub struct NpiOverride{
    pub start_day: u32,
    pub mean_degree: Option<usize>,
    pub rewire_prob: Option<f64>,
    pub transmission: Option<TransmissionRate>,
    pub disease_duration: Option<u32>,
}

impl NpiOverride{
    /// a degree or rewiring change invalidates the current edge set
    pub fn changes_topology(&self) -> bool
    {
        self.mean_degree.is_some() || self.rewire_prob.is_some()
    }

    /// override wins on collision, everything else is retained
    pub fn merged(&self, params: &Parameters) -> Parameters
    {
        let mut merged = params.clone();
        if let Some(mean_degree) = self.mean_degree{
            merged.mean_degree = mean_degree;
        }
        if let Some(rewire_prob) = self.rewire_prob{
            merged.rewire_prob = rewire_prob;
        }
        if let Some(transmission) = self.transmission{
            merged.transmission = transmission;
        }
        if let Some(disease_duration) = self.disease_duration{
            merged.disease_duration = disease_duration;
        }
        merged
    }
}

/// Builds the initial contact graph for a parameter set.
pub fn build_contact_graph<R>(
    params: &Parameters,
    graph_type: GraphType,
    rng: &mut R,
) -> SimResult<ContactGraph>
where R: Rng
{
    match graph_type{
        GraphType::PoissonSmallWorld => {
            let n = match &params.population{
                Population::FixedSize(n) => n.get(),
                Population::HouseholdSizes(_) => {
                    return Err(SimError::Configuration(
                        "the poisson builder needs a fixed population size".into()
                    ));
                }
            };
            let builder = PoissonSmallWorld{
                mean_degree: params.mean_degree,
                rewire_prob: params.rewire_prob,
            };
            builder.build(n, rng)
        },
        GraphType::HouseholdClique => {
            let builder = HouseholdClique{
                base_degree: params.mean_degree,
                rewire_prob: params.rewire_prob,
            };
            builder.build(&params.population, rng)
        }
    }
}

/// Merges the override into the active parameters and, when a
/// topology-affecting field changed, regenerates the edge set with the
/// builder the run started with. Node identities survive regeneration;
/// the caller keeps its per-node state map untouched.
pub fn apply_npi<R>(
    params: &Parameters,
    npi: &NpiOverride,
    graph: &ContactGraph,
    graph_type: GraphType,
    rng: &mut R,
) -> SimResult<(Parameters, Option<ContactGraph>)>
where R: Rng
{
    let merged = npi.merged(params);
    if !npi.changes_topology(){
        return Ok((merged, None));
    }

    let regenerated = match graph_type{
        GraphType::PoissonSmallWorld => {
            let builder = PoissonSmallWorld{
                mean_degree: merged.mean_degree,
                rewire_prob: merged.rewire_prob,
            };
            builder.update(graph, rng)?
        },
        GraphType::HouseholdClique => {
            // same population, same id layout, fresh base ring + cliques
            let builder = HouseholdClique{
                base_degree: merged.mean_degree,
                rewire_prob: merged.rewire_prob,
            };
            builder.build(&merged.population, rng)?
        }
    };

    if regenerated.node_count() != graph.node_count(){
        return Err(SimError::InvariantViolation(
            format!(
                "regeneration changed the node count: {} -> {}",
                graph.node_count(),
                regenerated.node_count()
            )
        ));
    }

    Ok((merged, Some(regenerated)))
}

#[cfg(test)]
mod testing
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;
    use std::num::NonZeroUsize;

    fn params() -> Parameters
    {
        Parameters{
            population: Population::FixedSize(NonZeroUsize::new(120).unwrap()),
            mean_degree: 6,
            rewire_prob: 0.2,
            transmission: TransmissionRate::Scalar(0.1),
            disease_duration: 6,
            initial_infected: 2,
        }
    }

    #[test]
    fn rate_only_override_keeps_the_graph()
    {
        let params = params();
        let mut rng = Pcg64::seed_from_u64(77);
        let graph = build_contact_graph(&params, GraphType::PoissonSmallWorld, &mut rng).unwrap();

        let npi = NpiOverride{
            start_day: 10,
            mean_degree: None,
            rewire_prob: None,
            transmission: Some(TransmissionRate::Scalar(0.01)),
            disease_duration: None,
        };
        let (merged, new_graph) = apply_npi(&params, &npi, &graph, GraphType::PoissonSmallWorld, &mut rng).unwrap();

        assert!(new_graph.is_none());
        assert!(matches!(merged.transmission, TransmissionRate::Scalar(r) if r == 0.01));
        assert_eq!(merged.mean_degree, params.mean_degree);
    }

    #[test]
    fn degree_override_regenerates_the_edge_set()
    {
        let params = params();
        let mut rng = Pcg64::seed_from_u64(4242);
        let graph = build_contact_graph(&params, GraphType::PoissonSmallWorld, &mut rng).unwrap();

        let npi = NpiOverride{
            start_day: 10,
            mean_degree: Some(2),
            rewire_prob: None,
            transmission: None,
            disease_duration: None,
        };
        let (merged, new_graph) = apply_npi(&params, &npi, &graph, GraphType::PoissonSmallWorld, &mut rng).unwrap();

        let new_graph = new_graph.expect("topology override must rebuild");
        assert_eq!(merged.mean_degree, 2);
        assert_eq!(new_graph.node_count(), graph.node_count());
        assert_ne!(new_graph.edge_pairs(), graph.edge_pairs());
    }

    #[test]
    fn poisson_builder_rejects_household_input()
    {
        let mut p = params();
        p.population = Population::HouseholdSizes(vec![2, 3]);
        let mut rng = Pcg64::seed_from_u64(5);
        assert!(matches!(
            build_contact_graph(&p, GraphType::PoissonSmallWorld, &mut rng),
            Err(SimError::Configuration(_))
        ));
    }
}
