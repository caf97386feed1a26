use{
    serde::{Serialize, Deserialize},
    rand::Rng,
    rand::seq::SliceRandom,
    std::num::*,
};

pub const DEFAULT_SYSTEM_SIZE: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(200)};
pub const DEFAULT_MEAN_DEGREE: usize = 6;
pub const DEFAULT_REWIRE_PROB: f64 = 0.3;
pub const DEFAULT_INTRA_RATE: f64 = 0.5;
pub const DEFAULT_INTER_RATE: f64 = 0.1;
pub const DEFAULT_DISEASE_DURATION: u32 = 6;
pub const DEFAULT_INITIAL_INFECTED: usize = 10;
pub const DEFAULT_MAX_DAYS: u32 = 100;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;
pub const ONE: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(1)};

/// Which generator produced (and on NPI regenerates) the contact graph
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub enum GraphType{
    PoissonSmallWorld,
    HouseholdClique,
}

impl GraphType{
    pub fn name(&self) -> &'static str
    {
        match self{
            Self::PoissonSmallWorld => "poisson",
            Self::HouseholdClique => "household",
        }
    }
}

/// Expands a household-size histogram `[[size, count], ...]` into the
/// flat, shuffled size sequence the clique builder consumes.
pub fn distribution_from_hist<R>(hist: &[[usize; 2]], rng: &mut R) -> Vec<usize>
where R: Rng
{
    let mut dist = Vec::new();
    for &[size, count] in hist{
        dist.extend(std::iter::repeat(size).take(count));
    }
    dist.shuffle(rng);
    dist
}

#[cfg(test)]
mod testing
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    #[test]
    fn hist_expansion_keeps_counts()
    {
        let mut rng = Pcg64::seed_from_u64(12);
        let dist = distribution_from_hist(&[[0, 0], [1, 3], [4, 2]], &mut rng);

        assert_eq!(dist.len(), 5);
        assert_eq!(dist.iter().filter(|&&s| s == 1).count(), 3);
        assert_eq!(dist.iter().filter(|&&s| s == 4).count(), 2);
        assert_eq!(dist.iter().sum::<usize>(), 11);
    }
}
