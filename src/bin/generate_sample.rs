use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize
    }
}

/// Lay `values` out over lines of 1..=4 tokens with uneven spacing, the
/// way hand-edited input files tend to look.
fn render(values: &[f64], rng: &mut SimpleRng) -> String {
    const GAPS: [&str; 4] = [" ", "  ", "\t", "    "];

    let mut out = String::new();
    let mut rest = values;
    while !rest.is_empty() {
        let take = (1 + rng.below(4)).min(rest.len());
        let (line, tail) = rest.split_at(take);
        if rng.below(3) == 0 {
            out.push(' ');
        }
        for (i, v) in line.iter().enumerate() {
            if i > 0 {
                out.push_str(GAPS[rng.below(GAPS.len())]);
            }
            let _ = write!(out, "{v}");
        }
        out.push('\n');
        rest = tail;
    }
    out
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut rng = SimpleRng::new(42);
    let count = 40;

    // Two decimals keeps the files readable
    let numbers: Vec<f64> = (0..count)
        .map(|_| ((rng.next_f64() * 200.0 - 100.0) * 100.0).round() / 100.0)
        .collect();
    let weights: Vec<f64> = (0..count)
        .map(|_| (rng.next_f64() * 4.0 * 4.0).round() / 4.0)
        .collect();

    let numbers_path = out_dir.join("numbers.txt");
    let weights_path = out_dir.join("weights.txt");

    std::fs::write(&numbers_path, render(&numbers, &mut rng))
        .with_context(|| format!("writing {}", numbers_path.display()))?;
    std::fs::write(&weights_path, render(&weights, &mut rng))
        .with_context(|| format!("writing {}", weights_path.display()))?;

    println!(
        "Wrote {count} numbers to {} and {count} weights to {}",
        numbers_path.display(),
        weights_path.display()
    );
    Ok(())
}
