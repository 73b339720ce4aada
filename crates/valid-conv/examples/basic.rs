//! Basic example: run every available strategy on one signal.
//!
//! `VALID_CONV_VARIANTS=naive,wide_aligned cargo run --example basic`
//! restricts the run to the listed variants.

use valid_conv::prelude::*;

fn main() {
    println!("Valid-mode convolution - Basic Example\n");
    println!("{}\n", valid_conv::version_info());

    // The textbook case: a difference kernel over a ramp.
    let out = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0]).unwrap();
    println!("[1,2,3,4,5] * [1,0,-1] = {:?}\n", out);

    let signal: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.05).sin()).collect();
    let kernel: Vec<f32> = (0..16).map(|i| 1.0 / 16.0 + i as f32 * 0.001).collect();
    let reference = convolve_valid(&signal, &kernel).unwrap();

    let variants: Vec<Variant> = match std::env::var("VALID_CONV_VARIANTS") {
        Ok(list) => list
            .split(',')
            .map(|name| name.parse::<Variant>())
            .collect::<Result<_, _>>()
            .unwrap_or_else(|err| {
                eprintln!("{}", err);
                std::process::exit(2);
            }),
        Err(_) => Variant::ALL.to_vec(),
    };

    println!("{:<20} {:<40} {}", "variant", "strategy", "max |diff|");
    for variant in variants {
        let mut out = vec![0.0f32; reference.len()];
        match convolve_variant(variant, &signal, &kernel, &mut out) {
            Ok(()) => {
                let max_diff = reference
                    .iter()
                    .zip(&out)
                    .map(|(a, b)| (a - b).abs())
                    .fold(0.0f32, f32::max);
                let ok = variant.tolerance().check(&signal, &kernel, &reference, &out).is_ok();
                println!(
                    "{:<20} {:<40} {:e}{}",
                    variant.name(),
                    variant.strategy().strategy().to_string(),
                    max_diff,
                    if ok { "" } else { "  (outside tolerance)" }
                );
            }
            Err(err) => println!("{:<20} {}", variant.name(), err),
        }
    }
}
