use anyhow::Result;
use ndarray::Axis;
use wrapgym_core::{
    record::BufferedRecorder,
    rollout::{run_steps, RolloutConfig},
    wrapper::{
        ClipReward, ClipRewardConfig, FrameStack, FrameStackConfig, ObsFilter, RawAct, RawReward,
        RemapAct, RemapActConfig, ScaleObs, ScaleObsConfig, TransformEnv, TransformEnvConfig,
    },
    BoxSpace, DiscreteAct, Env, Policy, RandomPolicy, Space,
};
use wrapgym_toy_env::{PixelEnv, PixelEnvConfig};

type Wrapped = TransformEnv<PixelEnv, ScaleObs, ClipReward, RemapAct>;
type WrappedConfig =
    TransformEnvConfig<PixelEnvConfig, ScaleObsConfig, ClipRewardConfig, RemapActConfig>;

fn pixel_config() -> PixelEnvConfig {
    PixelEnvConfig::default()
        .height(10)
        .width(8)
        .termination_prob(0.05)
}

fn wrapped_config() -> WrappedConfig {
    TransformEnvConfig::default().env_config(pixel_config())
}

#[test]
fn test_scaled_and_clipped() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut env = Wrapped::build(&wrapped_config(), 42)?;
    let space = env.observation_space().clone();
    assert_eq!(space.shape(), &[10, 8]);
    assert_eq!(space.low(), 0.0);
    assert_eq!(space.high(), 1.0);

    let mut policy = RandomPolicy::new(&env, 0);
    let mut obs = env.reset()?;
    for _ in 0..300 {
        assert!(space.contains(&obs));
        let act = policy.sample(&obs);
        let (step, _) = env.step_with_reset(&act)?;
        assert!(step.reward >= 0.0 && step.reward <= 1.0);
        obs = step.init_obs.unwrap_or(step.obs);
    }
    Ok(())
}

#[test]
fn test_stack_of_scaled_frames() -> Result<()> {
    let config = FrameStackConfig::default()
        .env_config(wrapped_config())
        .n_stack(4);
    let mut env = FrameStack::<Wrapped, f32>::build(&config, 0)?;
    assert_eq!(env.observation_space().shape(), &[4, 10, 8]);

    let obs = env.reset()?;
    let first = obs.0.index_axis(Axis(0), 0).to_owned();
    for frame in obs.0.axis_iter(Axis(0)) {
        assert_eq!(frame, first);
    }

    let mut prev = obs;
    for _ in 0..50 {
        let (step, _) = env.step_with_reset(&DiscreteAct(0))?;
        assert_eq!(step.obs.0.shape(), &[4, 10, 8]);
        // Frames shift by one slot per step
        for i in 0..3 {
            assert_eq!(
                step.obs.0.index_axis(Axis(0), i),
                prev.0.index_axis(Axis(0), i + 1)
            );
        }
        prev = step.init_obs.unwrap_or(step.obs);
    }
    Ok(())
}

#[test]
fn test_scaled_stack_of_raw_frames() -> Result<()> {
    // Stacking before scaling gives the same observations as scaling before stacking
    let stacked = FrameStack::new(PixelEnv::build(&pixel_config(), 5)?, 3)?;
    let scale = <ScaleObs as ObsFilter<BoxSpace<u8>>>::build(&ScaleObsConfig::default())?;
    let mut env1 = TransformEnv::new(stacked, scale, RawReward, RawAct);
    let mut env2 = FrameStack::<Wrapped, f32>::build(
        &FrameStackConfig::default()
            .env_config(
                wrapped_config().act_filter_config(RemapActConfig::default().from(-1)),
            )
            .n_stack(3),
        5,
    )?;
    assert_eq!(env1.observation_space(), env2.observation_space());
    assert_eq!(env1.reset()?, env2.reset()?);
    for _ in 0..20 {
        let (step1, _) = env1.step_with_reset(&DiscreteAct(3))?;
        let (step2, _) = env2.step_with_reset(&DiscreteAct(3))?;
        assert_eq!(step1.obs, step2.obs);
        assert_eq!(step1.is_terminated, step2.is_terminated);
        assert_eq!(step1.is_truncated, step2.is_truncated);
    }
    Ok(())
}

#[test]
fn test_rollout_on_stacked_pixels() -> Result<()> {
    let config = FrameStackConfig::default()
        .env_config(pixel_config().termination_prob(0.2))
        .n_stack(2);
    let mut env = FrameStack::<PixelEnv, u8>::build(&config, 0)?;
    let mut policy = RandomPolicy::new(&env, 1);
    let mut recorder = BufferedRecorder::new();
    let stats = run_steps(
        &mut env,
        &mut policy,
        &RolloutConfig::default().n_steps(100),
        &mut recorder,
    )?;

    assert_eq!(stats.n_steps, 100);
    assert!(stats.n_episodes > 0);
    assert_eq!(recorder.len(), 100);
    for record in recorder.iter() {
        assert!(record.get_scalar("reward").is_ok());
        assert!(record.get_scalar("noop").is_ok());
        assert!(record.get_datetime("time").is_ok());
    }
    Ok(())
}
