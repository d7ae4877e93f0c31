use anyhow::Result;
use clap::Parser;
use wrapgym_core::{
    record::BufferedRecorder,
    rollout::{run_steps, RolloutConfig},
    Env as _, RandomPolicy,
};
use wrapgym_toy_env::{PixelEnv, PixelEnvConfig};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The number of environment steps
    #[arg(long, default_value_t = 200)]
    n_steps: usize,

    /// Sleep after every step, in milliseconds
    #[arg(long, default_value_t = 10)]
    wait_ms: u64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML file of the environment configuration
    #[arg(long)]
    config: Option<String>,
}

fn env_config(args: &Args) -> Result<PixelEnvConfig> {
    match &args.config {
        Some(path) => PixelEnvConfig::load(path),
        None => Ok(PixelEnvConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut env = PixelEnv::build(&env_config(&args)?, args.seed as i64)?;
    println!("Observation space: {:?}", env.observation_space());
    println!("Action space: {:?}", env.action_space());

    let mut policy = RandomPolicy::new(&env, args.seed);
    let mut recorder = BufferedRecorder::new();
    let config = RolloutConfig::default()
        .n_steps(args.n_steps)
        .wait_ms(args.wait_ms);
    let stats = run_steps(&mut env, &mut policy, &config, &mut recorder)?;
    println!(
        "{} steps, {} episodes, total reward = {}",
        stats.n_steps, stats.n_episodes, stats.total_reward
    );

    let mut n_noops = 0;
    for record in recorder.iter() {
        if record.get_scalar("noop")? > 0.0 {
            n_noops += 1;
        }
    }
    println!("{} of {} actions were noop", n_noops, recorder.len());

    if let (Some(first), Some(last)) = (recorder.iter().next(), recorder.iter().last()) {
        let elapsed = last.get_datetime("time")? - first.get_datetime("time")?;
        println!("Elapsed: {} ms", elapsed.num_milliseconds());
    }

    env.close()
}
