use serde::{Serialize, Deserialize};

/// Per-node disease state. The day counter only exists while a node is
/// infected, so a stale counter cannot survive a transition.
#[derive(Clone, Debug, PartialEq, Copy)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    Susceptible,
    Infected{days_with_disease: u32},
    Recovered,
}

impl InfectionState{
    pub fn sus_check(&self) -> bool{
        matches!(self, InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, InfectionState::Infected{..})
    }
    pub fn rec_check(&self) -> bool{
        matches!(self, InfectionState::Recovered)
    }

    pub fn is_or_was_infected(&self) -> bool
    {
        matches!(self, Self::Infected{..} | Self::Recovered)
    }

    pub fn newly_infected() -> Self
    {
        Self::Infected{days_with_disease: 1}
    }

    pub fn status(&self) -> Status
    {
        match self{
            Self::Susceptible => Status::Susceptible,
            Self::Infected{..} => Status::Infected,
            Self::Recovered => Status::Recovered,
        }
    }
}

impl Default for InfectionState{
    fn default() -> Self{
        InfectionState::Susceptible
    }
}

/// Payload-free discriminant for queries and snapshots
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
#[derive(Serialize, Deserialize)]
pub enum Status{
    Susceptible,
    Infected,
    Recovered,
}
