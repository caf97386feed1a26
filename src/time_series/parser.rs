use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    rand::Rng,
    std::num::*,
    crate::json_parsing::*,
    crate::misc_types::*,
    crate::network::*,
    crate::sir_model::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Simulate an epidemic on a synthetic contact network and write the
/// daily/cumulative case curves
pub struct TimeSeries
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl TimeSeries {
    pub fn parse(&self) -> (TimeSeriesParams, Value)
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self)
    {
        let (param, json) = self.parse();
        super::execute::run_time_series(param, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TimeSeriesParams
{
    pub graph_type: GraphType,
    pub population: Population,
    /// [[household size, count], ...]; expands into a shuffled household
    /// distribution and replaces `population` when present
    pub household_hist: Option<Vec<[usize; 2]>>,
    pub mean_degree: usize,
    pub rewire_prob: f64,
    pub transmission: TransmissionRate,
    pub disease_duration: u32,
    pub initial_infected: usize,
    pub max_days: u32,
    pub npi: Option<NpiOverride>,
    pub samples: NonZeroUsize,
    pub fraction: bool,
    pub sir_seed: u64,
}

impl Default for TimeSeriesParams
{
    fn default() -> Self {
        Self{
            graph_type: GraphType::HouseholdClique,
            population: Population::FixedSize(DEFAULT_SYSTEM_SIZE),
            household_hist: None,
            mean_degree: DEFAULT_MEAN_DEGREE,
            rewire_prob: DEFAULT_REWIRE_PROB,
            transmission: TransmissionRate::PerType{
                intra: DEFAULT_INTRA_RATE,
                inter: DEFAULT_INTER_RATE
            },
            disease_duration: DEFAULT_DISEASE_DURATION,
            initial_infected: DEFAULT_INITIAL_INFECTED,
            max_days: DEFAULT_MAX_DAYS,
            npi: None,
            samples: ONE,
            fraction: false,
            sir_seed: DEFAULT_SIR_SEED,
        }
    }
}

impl TimeSeriesParams
{
    /// Resolves the json-level options into the engine's parameter bag.
    /// The histogram (if any) is expanded with the master rng, so every
    /// sample of a run sees the same household layout.
    pub fn build_parameters<R>(&self, rng: &mut R) -> Parameters
    where R: Rng
    {
        let population = match &self.household_hist{
            Some(hist) => Population::HouseholdSizes(distribution_from_hist(hist, rng)),
            None => self.population.clone(),
        };
        Parameters{
            population,
            mean_degree: self.mean_degree,
            rewire_prob: self.rewire_prob,
            transmission: self.transmission,
            disease_duration: self.disease_duration,
            initial_infected: self.initial_infected,
        }
    }

    pub fn quick_name(
        &self,
        n: usize,
        num_threads: Option<NonZeroUsize>
    ) -> String
    {
        let k = match num_threads
        {
            None => "".to_owned(),
            Some(v) => format!("k{}", v)
        };
        let npi = match &self.npi{
            None => "".to_owned(),
            Some(npi) => format!("NPI{}", npi.start_day)
        };
        format!(
            "v{}TimeSeries_G{}_N{}_D{}_E{}_Dur{}_InInf{}_T{}{}_Sam{}_SS{}{}.dat",
            crate::VERSION,
            self.graph_type.name(),
            n,
            self.mean_degree,
            self.rewire_prob,
            self.disease_duration,
            self.initial_infected,
            self.max_days,
            npi,
            self.samples,
            self.sir_seed,
            k
        )
    }
}
