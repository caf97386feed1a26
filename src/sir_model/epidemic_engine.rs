use{
    rand::distributions::{Distribution, Uniform},
    rand_pcg::Pcg64,
    super::*,
    crate::error::*,
    crate::misc_types::*,
    crate::network::*,
};

/// Owns the contact graph, the per-node state map and the day loop.
/// Single threaded; every random draw comes from the one Pcg64 handed in
/// at construction, which makes whole runs reproducible from (parameters,
/// rng state) alone.
#[derive(Clone)]
pub struct EpidemicEngine{
    graph: ContactGraph,
    states: Vec<InfectionState>,
    params: Parameters,
    graph_type: GraphType,
    npi: Option<NpiOverride>,
    metrics: MetricsCollector,
    rng: Pcg64,
    infected_list: Vec<usize>,
    new_infected_list: Vec<usize>,
    /// next day to simulate, starting at 1
    day: u32,
}

impl EpidemicEngine{
    /// Validates everything up front (the merged NPI parameter set too),
    /// builds the initial graph and seeds `initial_infected` distinct
    /// nodes. Nothing is retried later; an invalid configuration never
    /// starts a run.
    pub fn new(
        graph_type: GraphType,
        params: Parameters,
        npi: Option<NpiOverride>,
        mut rng: Pcg64,
    ) -> SimResult<Self>
    {
        params.validate()?;
        if let Some(npi) = &npi{
            npi.merged(&params).validate()?;
        }

        let graph = build_contact_graph(&params, graph_type, &mut rng)?;
        let n = graph.node_count();

        let mut states = vec![InfectionState::Susceptible; n];
        let mut infected_list = Vec::with_capacity(params.initial_infected);
        let un = Uniform::new(0, n);
        while infected_list.len() < params.initial_infected{
            let index = un.sample(&mut rng);
            if !infected_list.iter().any(|&i| i == index){
                states[index] = InfectionState::newly_infected();
                infected_list.push(index);
            }
        }

        Ok(
            Self{
                graph,
                states,
                params,
                graph_type,
                npi,
                metrics: MetricsCollector::new(),
                rng,
                infected_list,
                new_infected_list: Vec::new(),
                day: 1,
            }
        )
    }

    /// One simulated day, fixed phase order: count, progress, transmit,
    /// NPI check. The count runs first, so it reports the infections
    /// seeded by the previous day's transmit phase; downstream cumulative
    /// arithmetic depends on that lag.
    pub fn step(&mut self) -> SimResult<()>
    {
        let day = self.day;

        self.count_daily_cases();
        self.update_disease_progress()?;
        self.transmit();

        if let Some(npi) = self.npi{
            if npi.start_day == day{
                let (merged, new_graph) = apply_npi(
                    &self.params,
                    &npi,
                    &self.graph,
                    self.graph_type,
                    &mut self.rng
                )?;
                self.params = merged;
                if let Some(graph) = new_graph{
                    self.graph = graph;
                }
            }
        }

        self.day += 1;
        Ok(())
    }

    pub fn run(&mut self, max_days: u32) -> SimResult<()>
    {
        for _ in 0..max_days{
            self.step()?;
        }
        Ok(())
    }

    fn count_daily_cases(&mut self)
    {
        let new_cases = self.states
            .iter()
            .filter(|state| matches!(**state, InfectionState::Infected{days_with_disease: 1}))
            .count();
        self.metrics.record(new_cases);
    }

    fn update_disease_progress(&mut self) -> SimResult<()>
    {
        let duration = self.params.disease_duration;
        for i in (0..self.infected_list.len()).rev(){
            let node = self.infected_list[i];
            let state = &mut self.states[node];
            if let InfectionState::Infected{days_with_disease} = state{
                if *days_with_disease >= duration{
                    *state = InfectionState::Recovered;
                    self.infected_list.swap_remove(i);
                }else{
                    *days_with_disease += 1;
                }
            }else{
                return Err(SimError::InvariantViolation(
                    format!("node {} in the infected bookkeeping has state {:?}", node, state)
                ));
            }
        }
        Ok(())
    }

    fn transmit(&mut self)
    {
        debug_assert!(self.new_infected_list.is_empty());

        let prob_dist = Uniform::new_inclusive(0.0, 1.0);
        let transmission = self.params.transmission;

        for idx in 0..self.infected_list.len(){
            let node = self.infected_list[idx];
            for &(neighbor, connection) in self.graph.neighbors(node){
                if !self.states[neighbor].sus_check(){
                    continue;
                }
                let rate = transmission.for_connection(connection);
                if prob_dist.sample(&mut self.rng) < rate{
                    // a node infected here stays off the infectious list
                    // until tomorrow and is no longer a target today
                    self.states[neighbor] = InfectionState::newly_infected();
                    self.new_infected_list.push(neighbor);
                }
            }
        }
        self.infected_list.append(&mut self.new_infected_list);
    }

    pub fn daily_cases(&self) -> &[usize]
    {
        self.metrics.daily_cases()
    }

    pub fn cumulative_cases(&self) -> Vec<usize>
    {
        self.metrics.cumulative_cases()
    }

    pub fn metrics(&self) -> &MetricsCollector
    {
        &self.metrics
    }

    pub fn nodes_by_status(&self, status: Status) -> Vec<usize>
    {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.status() == status)
            .map(|(node, _)| node)
            .collect()
    }

    pub fn states(&self) -> &[InfectionState]
    {
        &self.states
    }

    pub fn infected_count(&self) -> usize
    {
        self.infected_list.len()
    }

    pub fn node_count(&self) -> usize
    {
        self.graph.node_count()
    }

    pub fn graph(&self) -> &ContactGraph
    {
        &self.graph
    }

    pub fn params(&self) -> &Parameters
    {
        &self.params
    }

    /// next day `step` would simulate
    pub fn current_day(&self) -> u32
    {
        self.day
    }

    pub fn rng(&self) -> &Pcg64
    {
        &self.rng
    }

    /// hands the generator back so a caller can resume the stream
    pub fn into_rng(self) -> Pcg64
    {
        self.rng
    }
}
