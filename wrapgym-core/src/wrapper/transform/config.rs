//! Configuration of [`TransformEnv`](super::TransformEnv).
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`TransformEnv`](super::TransformEnv).
///
/// Type parameters are the configurations of the inner environment, the
/// observation filter, the reward filter and the action filter, respectively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformEnvConfig<C, OC, RC, AC> {
    /// Configuration of the inner environment.
    pub env_config: C,

    /// Configuration of the observation filter.
    pub obs_filter_config: OC,

    /// Configuration of the reward filter.
    pub reward_filter_config: RC,

    /// Configuration of the action filter.
    pub act_filter_config: AC,
}

impl<C, OC, RC, AC> TransformEnvConfig<C, OC, RC, AC> {
    /// Sets the configuration of the inner environment.
    pub fn env_config(mut self, v: C) -> Self {
        self.env_config = v;
        self
    }

    /// Sets the configuration of the observation filter.
    pub fn obs_filter_config(mut self, v: OC) -> Self {
        self.obs_filter_config = v;
        self
    }

    /// Sets the configuration of the reward filter.
    pub fn reward_filter_config(mut self, v: RC) -> Self {
        self.reward_filter_config = v;
        self
    }

    /// Sets the configuration of the action filter.
    pub fn act_filter_config(mut self, v: AC) -> Self {
        self.act_filter_config = v;
        self
    }
}

impl<C, OC, RC, AC> TransformEnvConfig<C, OC, RC, AC>
where
    C: Serialize + DeserializeOwned,
    OC: Serialize + DeserializeOwned,
    RC: Serialize + DeserializeOwned,
    AC: Serialize + DeserializeOwned,
{
    /// Constructs [`TransformEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`TransformEnvConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
