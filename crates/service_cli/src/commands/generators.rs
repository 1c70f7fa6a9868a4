//! Generators command implementation
//!
//! Demonstrates the classic teaching generators with the parameters from
//! the lab sheet: middle-square from 3141, the (5, 3, 23) linear
//! congruential recurrence from 7, and the 4-bit shift register from
//! 0b0110.

use tracing::info;

use montelab_core::generators::{middle_square, Lcg, ShiftRegister4};

use crate::Result;

/// Run the generators command
pub fn run(rounds: usize) -> Result<()> {
    info!("Running classic generator demonstrations ({} rounds)", rounds);

    println!("middle-square (seed 3141):");
    for value in middle_square(3141, rounds) {
        print!("{value}  ");
    }
    println!();

    let mut lcg = Lcg::new(5, 3, 23, 7)?;
    println!("linear congruential (a=5, c=3, m=23, x0=7):");
    for _ in 0..rounds {
        print!("{}  ", lcg.next_int());
    }
    println!();

    let mut lcg = Lcg::new(5, 3, 23, 7)?;
    println!("linear congruential, float variant:");
    for _ in 0..rounds {
        print!("{:.4}  ", lcg.next_float());
    }
    println!();

    let mut register = ShiftRegister4::new(0b0110);
    println!("4-bit shift register (seed 0110):");
    for _ in 0..rounds {
        print!("{:04b}  ", register.step());
    }
    println!();

    Ok(())
}
