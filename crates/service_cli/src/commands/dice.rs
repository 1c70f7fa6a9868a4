//! Dice command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use montelab_mc::sampling::dice_histogram;

use crate::Result;

/// Run the dice command
pub fn run(trials: u64, faces: usize, seed: u64) -> Result<()> {
    info!(
        "Rolling a {}-sided die {} times (seed {})",
        faces, trials, seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let counts = dice_histogram(&mut rng, trials, faces)?;

    println!("trials : {}", trials);
    for (face, count) in counts.iter().enumerate() {
        println!("face {:>2}: {}", face + 1, count);
    }
    Ok(())
}
