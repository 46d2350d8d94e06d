//! One-loop spectra of a damped power-law linear spectrum.
//!
//! Run with `RUST_LOG=spt=debug` to see every computed loop term.

use spt::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SptError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let linear = PowerLaw::new(2e4, 1.0).with_cutoff(0.5);
    let engine = Spt::new().epsrel(1e-4).build(&(), &linear)?;

    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14} {:>10}",
        "k", "P_L", "P_dd", "P_dt", "P_tt", "G"
    );
    println!("{}", "-".repeat(80));

    for k in [0.01, 0.02, 0.05, 0.1, 0.2] {
        println!(
            "{:>8.3} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>10.6}",
            k,
            engine.linear_at(k),
            engine.p(k, 1, 1),
            engine.p(k, 1, 2),
            engine.p(k, 2, 2),
            engine.g(k),
        );
    }

    // Index products other than 1, 2 and 4 are rejected with a warning.
    let invalid = engine.p(0.1, 1, 3);
    println!("P(0.1, 1, 3) = {invalid}");

    Ok(())
}
