use{
    serde::{Serialize, Deserialize},
    crate::error::*,
    crate::network::*,
};

/// Per-edge transmission probability. The scalar form ignores the
/// connection tag entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub enum TransmissionRate{
    Scalar(f64),
    PerType{intra: f64, inter: f64},
}

impl TransmissionRate{
    pub fn for_connection(&self, connection: ConnectionType) -> f64
    {
        match self{
            Self::Scalar(rate) => *rate,
            Self::PerType{intra, inter} => match connection{
                ConnectionType::Intra => *intra,
                ConnectionType::Inter => *inter,
            },
        }
    }

    fn validate(&self) -> SimResult<()>
    {
        let rates = match self{
            Self::Scalar(rate) => vec![*rate],
            Self::PerType{intra, inter} => vec![*intra, *inter],
        };
        for rate in rates{
            if !(0.0..=1.0).contains(&rate){
                return Err(SimError::Configuration(
                    format!("transmission rate {} outside [0, 1]", rate)
                ));
            }
        }
        Ok(())
    }
}

/// The full parameter bag of a run. Immutable once the engine starts,
/// except through an NPI override.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Parameters{
    pub population: Population,
    /// D: Poisson mean, or k nearest neighbors for the household base ring
    pub mean_degree: usize,
    /// epsilon
    pub rewire_prob: f64,
    pub transmission: TransmissionRate,
    /// d, days a node stays infectious
    pub disease_duration: u32,
    /// i0
    pub initial_infected: usize,
}

impl Parameters{
    pub fn node_count(&self) -> usize
    {
        self.population.node_count()
    }

    pub fn validate(&self) -> SimResult<()>
    {
        self.population.validate()?;
        if self.mean_degree == 0{
            return Err(SimError::Configuration("mean degree must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.rewire_prob){
            return Err(SimError::Configuration(
                format!("rewiring probability {} outside [0, 1]", self.rewire_prob)
            ));
        }
        self.transmission.validate()?;
        if self.disease_duration == 0{
            return Err(SimError::Configuration("disease duration must be positive".into()));
        }
        if self.initial_infected == 0{
            return Err(SimError::Configuration("initial infected count must be positive".into()));
        }
        let n = self.node_count();
        if self.initial_infected > n{
            return Err(SimError::Configuration(
                format!("initial infected {} exceeds population {}", self.initial_infected, n)
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod testing
{
    use super::*;
    use std::num::NonZeroUsize;

    fn valid() -> Parameters
    {
        Parameters{
            population: Population::FixedSize(NonZeroUsize::new(100).unwrap()),
            mean_degree: 6,
            rewire_prob: 0.3,
            transmission: TransmissionRate::PerType{intra: 0.5, inter: 0.1},
            disease_duration: 6,
            initial_infected: 1,
        }
    }

    #[test]
    fn valid_parameters_pass()
    {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn out_of_range_fields_fail()
    {
        let mut p = valid();
        p.rewire_prob = -0.1;
        assert!(p.validate().is_err());

        let mut p = valid();
        p.transmission = TransmissionRate::Scalar(1.5);
        assert!(p.validate().is_err());

        let mut p = valid();
        p.disease_duration = 0;
        assert!(p.validate().is_err());

        let mut p = valid();
        p.initial_infected = 101;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rate_lookup_by_connection_type()
    {
        let rate = TransmissionRate::PerType{intra: 0.5, inter: 0.1};
        assert_eq!(rate.for_connection(ConnectionType::Intra), 0.5);
        assert_eq!(rate.for_connection(ConnectionType::Inter), 0.1);

        let scalar = TransmissionRate::Scalar(0.25);
        assert_eq!(scalar.for_connection(ConnectionType::Intra), 0.25);
        assert_eq!(scalar.for_connection(ConnectionType::Inter), 0.25);
    }
}
