//! Simplify a synthetic GPS trace with every algorithm and report the reduction.
//!
//! Usage: `cargo run -p linesimp --example simplify_trace [tolerance]`

use linesimp::prelude::*;

fn trace(n: usize) -> Polyline {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.02;
            Point2d::new(t * 10.0, (t * 1.3).sin() * 4.0 + (t * 7.1).cos() * 0.3)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let tolerance: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 0.1,
    };

    let line = trace(5_000);
    println!("input: {} points, length {:.2}", line.len(), line.length());

    for algorithm in Algorithm::ALL {
        let simplified = algorithm.simplify(&line, tolerance)?;
        println!(
            "{:<28} {:>5} points ({:.1}% kept), length {:.2}",
            algorithm,
            simplified.len(),
            100.0 * simplified.len() as f64 / line.len() as f64,
            simplified.length()
        );
    }

    // Favour the middle of the trace
    let weights: Vec<f64> = (0..line.len())
        .map(|i| if (2_000..3_000).contains(&i) { 10.0 } else { 1.0 })
        .collect();
    let weighted = WeightedVisvalingamSimplifier::new(weights).simplify(&line, tolerance)?;
    println!("{:<28} {:>5} points", "visvalingam_whyatt_weighted", weighted.len());

    Ok(())
}
