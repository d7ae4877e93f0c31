//! Remapping of a discrete action.
use super::ActFilter;
use crate::{
    error::WrapError,
    record::{Record, RecordValue},
    Discrete, DiscreteAct,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration of [`RemapAct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemapActConfig {
    /// The action to be replaced.
    pub from: i64,

    /// Candidates of the replacement.
    pub to: Vec<i64>,

    /// Seed of the random number generator choosing a candidate.
    pub seed: u64,
}

impl Default for RemapActConfig {
    fn default() -> Self {
        Self {
            from: 3,
            to: vec![0, 1, 2],
            seed: 42,
        }
    }
}

impl RemapActConfig {
    /// Sets the action to be replaced.
    pub fn from(mut self, from: i64) -> Self {
        self.from = from;
        self
    }

    /// Sets the candidates of the replacement.
    pub fn to(mut self, to: Vec<i64>) -> Self {
        self.to = to;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Replaces one discrete action with a random choice among others.
///
/// For example, the default configuration prevents action `3` (e.g., moving left)
/// from reaching the environment by taking one of `0`, `1` or `2` instead.
/// Other actions pass through. When a replacement happens, `"remapped"` is
/// recorded with value `1`.
pub struct RemapAct {
    from: i64,
    to: Vec<i64>,
    rng: fastrand::Rng,
}

impl ActFilter<Discrete> for RemapAct {
    type Config = RemapActConfig;
    type Space = Discrete;

    fn build(config: &Self::Config) -> Result<Self> {
        if config.to.is_empty() {
            return Err(WrapError::InvalidConfiguration(
                "no replacement candidates for the remapped action".to_string(),
            )
            .into());
        }
        Ok(Self {
            from: config.from,
            to: config.to.clone(),
            rng: fastrand::Rng::with_seed(config.seed),
        })
    }

    fn filt_space(&self, space: &Discrete) -> Discrete {
        *space
    }

    fn filt(&mut self, act: &DiscreteAct) -> (DiscreteAct, Record) {
        if act.0 == self.from {
            let act = self.to[self.rng.usize(..self.to.len())];
            (
                DiscreteAct(act),
                Record::from_slice(&[("remapped", RecordValue::Scalar(1.0))]),
            )
        } else {
            (*act, Record::empty())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_remap() -> Result<()> {
        let mut filter = RemapAct::build(&RemapActConfig::default())?;
        for _ in 0..100 {
            let (act, record) = filter.filt(&DiscreteAct(3));
            assert!([0, 1, 2].contains(&act.0));
            assert_eq!(record.get_scalar("remapped")?, 1.0);
        }
        for a in 0..3 {
            let (act, record) = filter.filt(&DiscreteAct(a));
            assert_eq!(act, DiscreteAct(a));
            assert!(record.is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_empty_candidates() {
        let config = RemapActConfig::default().to(vec![]);
        assert!(RemapAct::build(&config).is_err());
    }
}
