//! Deterministic driver for exercising a [`Tracker`] against a synthetic
//! touch stream, useful for manual exploration of promote/demote dynamics.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use toptrack_core::{DecayConfig, Tracker, TrackerConfig, TrackerParams};

#[derive(Parser, Debug)]
#[command(name = "scenario_driver", about = "Drive a toptrack Tracker with a synthetic touch stream")]
struct Args {
    /// Number of elements the score table/LRU filter can hold.
    #[arg(long, default_value_t = 64)]
    capacity: usize,

    /// Number of top ranks promoted each epoch.
    #[arg(long, default_value_t = 8)]
    thresh: usize,

    /// Number of distinct keys in the synthetic keyspace.
    #[arg(long, default_value_t = 200)]
    keyspace: u64,

    /// Number of epochs to simulate.
    #[arg(long, default_value_t = 20)]
    epochs: u32,

    /// Touches issued per epoch.
    #[arg(long, default_value_t = 500)]
    touches_per_epoch: u32,

    /// PRNG seed, for reproducible runs.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = TrackerConfig {
        promote_capacity: args.capacity,
        promote_thresh: args.thresh,
        remove_thresh: 0.05,
        exp_decay: DecayConfig { m: 0.8, c: 0.2 },
        min_promote_score: 0.0,
        ..TrackerConfig::default()
    };

    let params = TrackerParams::new(config)
        .with_promote_cb(|key| println!("epoch event: promote {key}"))
        .with_demote_cb(|key| println!("epoch event: demote {key}"));

    let mut tracker = Tracker::create(params).expect("valid configuration");
    let mut rng = StdRng::seed_from_u64(args.seed);

    for epoch in 0..args.epochs {
        // A Zipf-ish skew: biasing toward low key values keeps a stable hot
        // set visible while still exercising the long tail of the keyspace.
        for _ in 0..args.touches_per_epoch {
            let skewed = (rng.gen::<f64>().powi(3) * args.keyspace as f64) as u64;
            tracker.touch(skewed.min(args.keyspace - 1));
        }
        tracker.progress();
        println!("epoch {epoch}: table_size={}, promoted={:?}", tracker.table_size(), tracker.promoted_keys());
    }
}
