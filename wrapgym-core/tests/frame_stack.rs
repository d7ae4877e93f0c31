use anyhow::Result;
use ndarray::{Array2, ArrayD, Axis};
use wrapgym_core::{
    dummy::{CounterEnv, CounterEnvConfig},
    error::WrapError,
    wrapper::{FrameStack, FrameStackConfig},
    DiscreteAct, Env,
};

const OBS_DIM: usize = 3;

/// The observation of the counter env after `i` steps of an episode.
fn counter_obs(i: usize) -> Vec<f32> {
    (0..OBS_DIM)
        .map(|j| (i * OBS_DIM + j + 1) as f32)
        .collect()
}

/// Stacked observation expected after `n` steps with `k` frames.
fn expected(k: usize, n: usize) -> ArrayD<f32> {
    let data = (0..k)
        .flat_map(|slot| {
            // The slot holds the frame of step `n + 1 + slot - k`, or the initial one
            let i = (n + 1 + slot).saturating_sub(k);
            counter_obs(i)
        })
        .collect::<Vec<_>>();
    Array2::from_shape_vec((k, OBS_DIM), data)
        .unwrap()
        .into_dyn()
}

fn build(k: i64) -> Result<FrameStack<CounterEnv, f32>> {
    let config = FrameStackConfig::default()
        .env_config(CounterEnvConfig::default().obs_dim(OBS_DIM))
        .n_stack(k);
    FrameStack::build(&config, 0)
}

#[test]
fn test_stacked_frames_for_various_depths() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    for k in 1..=5 {
        let mut env = build(k as i64)?;
        let obs = env.reset()?;
        assert_eq!(obs.0.len_of(Axis(0)), k);
        assert_eq!(obs.0, expected(k, 0));

        // After reset, every slot holds the initial observation
        for frame in obs.0.axis_iter(Axis(0)) {
            assert_eq!(frame.iter().cloned().collect::<Vec<f32>>(), counter_obs(0));
        }

        for n in 1..=(2 * k + 1) {
            let (step, _) = env.step(&DiscreteAct(0))?;
            assert_eq!(step.obs.0.len_of(Axis(0)), k);
            assert_eq!(step.obs.0, expected(k, n), "k = {}, n = {}", k, n);
        }
    }
    Ok(())
}

#[test]
fn test_pass_through_of_step_values() -> Result<()> {
    let env_config = CounterEnvConfig::default()
        .obs_dim(OBS_DIM)
        .truncate_at(Some(5))
        .terminate_at(Some(3));
    let mut inner = CounterEnv::build(&env_config, 0)?;
    let mut env = FrameStack::new(CounterEnv::build(&env_config, 0)?, 2)?;
    inner.reset()?;
    env.reset()?;

    for _ in 0..5 {
        let (expected, expected_record) = inner.step(&DiscreteAct(2))?;
        let (step, record) = env.step(&DiscreteAct(2))?;
        assert_eq!(step.reward, expected.reward);
        assert_eq!(step.is_terminated, expected.is_terminated);
        assert_eq!(step.is_truncated, expected.is_truncated);
        assert_eq!(step.info, expected.info);
        assert_eq!(record, expected_record);
    }
    Ok(())
}

#[test]
fn test_invalid_depth_from_config() {
    for k in [0i64, -1, -10, i64::MAX].iter() {
        let err = build(*k).err().expect("build must fail");
        assert!(
            matches!(
                err.downcast_ref::<WrapError>(),
                Some(WrapError::InvalidConfiguration(_))
            ),
            "unexpected error: {}",
            err
        );
    }
}

#[test]
fn test_step_with_reset_restacks_initial_obs() -> Result<()> {
    let env_config = CounterEnvConfig::default()
        .obs_dim(OBS_DIM)
        .terminate_at(Some(2));
    let mut env = FrameStack::new(CounterEnv::build(&env_config, 0)?, 3)?;
    env.reset()?;

    let (step, _) = env.step_with_reset(&DiscreteAct(0))?;
    assert!(step.init_obs.is_none());

    let (step, _) = env.step_with_reset(&DiscreteAct(0))?;
    assert!(step.is_terminated);
    assert_eq!(step.obs.0, expected(3, 2));
    let init_obs = step.init_obs.expect("episode ended");
    assert_eq!(init_obs.0, expected(3, 0));
    Ok(())
}

#[test]
fn test_config_roundtrip() -> Result<()> {
    let config = FrameStackConfig::default()
        .env_config(CounterEnvConfig::default().obs_dim(8).truncate_at(Some(10)))
        .n_stack(6);

    let dir = tempdir::TempDir::new("frame_stack_config")?;
    let path = dir.path().join("frame_stack.yaml");
    config.save(&path)?;
    let loaded = FrameStackConfig::<CounterEnvConfig>::load(&path)?;
    assert_eq!(config, loaded);

    let env = FrameStack::<CounterEnv, f32>::build(&loaded, 0)?;
    assert_eq!(env.observation_space().shape(), &[6, 8]);
    Ok(())
}
