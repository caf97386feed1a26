use serde::{Serialize, Deserialize};

/// Append-only daily case series, one entry per simulated day.
/// Cumulative counts are a prefix sum over the same data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector{
    daily_cases: Vec<usize>,
}

impl MetricsCollector{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn record(&mut self, new_cases: usize)
    {
        self.daily_cases.push(new_cases);
    }

    pub fn daily_cases(&self) -> &[usize]
    {
        &self.daily_cases
    }

    pub fn cumulative_cases(&self) -> Vec<usize>
    {
        self.daily_cases
            .iter()
            .scan(0, |sum, &cases|{
                *sum += cases;
                Some(*sum)
            })
            .collect()
    }

    pub fn total_cases(&self) -> usize
    {
        self.daily_cases.iter().sum()
    }

    pub fn days_recorded(&self) -> usize
    {
        self.daily_cases.len()
    }
}

#[cfg(test)]
mod testing
{
    use super::*;

    #[test]
    fn cumulative_is_the_prefix_sum()
    {
        let mut metrics = MetricsCollector::new();
        for cases in [1, 0, 4, 2]{
            metrics.record(cases);
        }

        assert_eq!(metrics.daily_cases(), &[1, 0, 4, 2]);
        assert_eq!(metrics.cumulative_cases(), vec![1, 1, 5, 7]);
        assert_eq!(metrics.total_cases(), 7);
        assert_eq!(metrics.days_recorded(), 4);
    }
}
