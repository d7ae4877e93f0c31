//! Utilities for interaction of policies and environments.
mod config;
use crate::{
    record::{RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use chrono::Local;
pub use config::RolloutConfig;
use log::{debug, info};

/// Summary of a run of [`run_steps`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolloutStats {
    /// The number of environment steps taken.
    pub n_steps: usize,

    /// The number of episodes that ended during the run.
    pub n_episodes: usize,

    /// Sum of rewards over all steps.
    pub total_reward: f32,
}

/// Runs a fixed number of steps with a policy, resetting the environment when an episode ends.
///
/// At every step, the record returned by the environment is extended with
/// `"reward"`, `"episode"`, `"step"` (the step count within the episode) and
/// `"time"` (the wall-clock time of the step) and written to `recorder`. If
/// [`RolloutConfig::wait_ms`] is non-zero, the loop sleeps after every step.
pub fn run_steps<E, P, R>(
    env: &mut E,
    policy: &mut P,
    config: &RolloutConfig,
    recorder: &mut R,
) -> Result<RolloutStats>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let wait = config.wait();
    let mut stats = RolloutStats::default();
    let mut episode_step = 0;
    let mut obs = env.reset()?;

    for _ in 0..config.n_steps {
        let act = policy.sample(&obs);
        let (step, mut record) = env.step_with_reset(&act)?;
        stats.n_steps += 1;
        stats.total_reward += step.reward;

        record.insert("reward", RecordValue::Scalar(step.reward));
        record.insert("episode", RecordValue::Scalar(stats.n_episodes as _));
        record.insert("step", RecordValue::Scalar(episode_step as _));
        record.insert("time", RecordValue::DateTime(Local::now()));
        recorder.write(record);

        obs = match step.init_obs {
            Some(init_obs) => {
                debug!(
                    "Episode {} ended after {} steps",
                    stats.n_episodes,
                    episode_step + 1
                );
                stats.n_episodes += 1;
                episode_step = 0;
                init_obs
            }
            None => {
                episode_step += 1;
                step.obs
            }
        };

        if wait.as_nanos() > 0 {
            std::thread::sleep(wait);
        }
    }

    info!(
        "{} steps, {} episodes, total reward = {}",
        stats.n_steps, stats.n_episodes, stats.total_reward
    );
    Ok(stats)
}

/// Runs episodes with a policy and returns the return of each episode.
///
/// Episodes run until the environment terminates or truncates them.
pub fn eval_episodes<E, P>(env: &mut E, policy: &mut P, n_episodes: usize) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut r_total = 0.0;
        let mut count_step = 0;

        loop {
            let act = policy.sample(&prev_obs);
            let (step, _) = env.step(&act)?;
            r_total += step.reward;
            count_step += 1;
            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
        }

        info!(
            "Episode {:?}, {:?} steps, reward = {:?}",
            episode, count_step, r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dummy::{CounterEnv, CounterEnvConfig},
        record::{BufferedRecorder, NullRecorder},
        wrapper::FrameStack,
        RandomPolicy,
    };

    #[test]
    fn test_run_steps_resets_on_episode_end() -> Result<()> {
        let env_config = CounterEnvConfig::default().truncate_at(Some(3));
        let mut env = CounterEnv::build(&env_config, 0)?;
        let mut policy = RandomPolicy::new(&env, 0);
        let mut recorder = BufferedRecorder::new();
        let config = RolloutConfig::default().n_steps(7);

        let stats = run_steps(&mut env, &mut policy, &config, &mut recorder)?;

        // Rewards within an episode are -1, 0, 1
        assert_eq!(stats.n_steps, 7);
        assert_eq!(stats.n_episodes, 2);
        assert_eq!(stats.total_reward, -1.0);
        assert_eq!(recorder.len(), 7);

        let steps = recorder
            .iter()
            .map(|r| r.get_scalar("step"))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(steps, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0]);
        let episodes = recorder
            .iter()
            .map(|r| r.get_scalar("episode"))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(episodes, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0]);

        let times = recorder
            .iter()
            .map(|r| r.get_datetime("time"))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(times.len(), 7);
        Ok(())
    }

    #[test]
    fn test_run_steps_with_null_recorder() -> Result<()> {
        let env_config = CounterEnvConfig::default().terminate_at(Some(5));
        let mut env = CounterEnv::build(&env_config, 0)?;
        let mut policy = RandomPolicy::new(&env, 0);
        let config = RolloutConfig::default().n_steps(20);

        let stats = run_steps(&mut env, &mut policy, &config, &mut NullRecorder::default())?;
        assert_eq!(stats.n_episodes, 4);
        assert_eq!(stats.total_reward, 4.0 * 5.0);
        Ok(())
    }

    #[test]
    fn test_eval_episodes_through_wrapper() -> Result<()> {
        let env_config = CounterEnvConfig::default().terminate_at(Some(4));
        let env = CounterEnv::build(&env_config, 0)?;
        let mut env = FrameStack::new(env, 2)?;
        let mut policy = RandomPolicy::new(&env, 0);

        let returns = eval_episodes(&mut env, &mut policy, 3)?;
        assert_eq!(returns, vec![2.0, 2.0, 2.0]);
        Ok(())
    }
}
