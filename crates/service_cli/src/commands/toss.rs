//! Coin-toss command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use montelab_mc::sampling::coin_toss;

use crate::Result;

/// Run the coin-toss command
pub fn run(trials: u64, seed: u64) -> Result<()> {
    info!("Tossing a fair coin {} times (seed {})", trials, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let counts = coin_toss(&mut rng, trials);

    println!("trials : {}", counts.trials());
    println!("heads  : {}", counts.heads);
    println!("tails  : {}", counts.tails);
    Ok(())
}
