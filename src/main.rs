//! Balance Dash entry point
//!
//! Natively this is a headless demo: the autopilot plays seeded runs and the
//! results are printed. The browser build is driven through `balance_dash::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use balance_dash::consts::TICKS_PER_SECOND;
    use balance_dash::{Tuning, run_autopilot};

    /// Play headless Balance Dash runs with the autopilot
    #[derive(Debug, Parser)]
    #[command(name = "balance-dash", version, about)]
    struct Args {
        /// Session seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of consecutive runs
        #[arg(long, default_value_t = 1)]
        runs: u32,
        /// Give up on a run after this many ticks (default: ten minutes of play)
        #[arg(long, default_value_t = 600 * TICKS_PER_SECOND as u64)]
        max_ticks: u64,
        /// JSON tuning file (missing fields use defaults)
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Print summaries as JSON lines
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        if args.max_ticks == 0 {
            bail!("--max-ticks must be > 0");
        }

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path).inspect_err(|err| {
                log::warn!("Rejected tuning file {}: {}", path.display(), err);
            })?,
            None => Tuning::default(),
        };

        log::info!(
            "Balance Dash (native) starting: seed {}, {} run(s)",
            args.seed,
            args.runs
        );

        let summaries = run_autopilot(args.seed, tuning, args.runs, args.max_ticks)
            .context("autopilot session failed")?;

        for summary in &summaries {
            if args.json {
                println!("{}", serde_json::to_string(summary)?);
            } else {
                let ending = if summary.game_over {
                    "out of balance"
                } else {
                    "tick budget reached"
                };
                println!(
                    "run {}: score {} | distance {}m | {} ticks | speed {:.1} | {} good / {} bad | {}",
                    summary.run,
                    summary.score,
                    summary.distance_meters,
                    summary.ticks,
                    summary.final_speed,
                    summary.good_hits,
                    summary.bad_hits,
                    ending
                );
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::init, this is just to satisfy the compiler
}
