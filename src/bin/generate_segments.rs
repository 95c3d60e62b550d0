use std::fs;
use std::io::Write;

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

    /// Uniform noise in [-amplitude, amplitude].
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amplitude
    }
}

/// A damped oscillation that stays small near both ends of the unit
/// interval, shaped like a boundary-value solver run with zero edges.
fn solution(x: f64) -> f64 {
    (-3.0 * x).exp() * (10.0 * std::f64::consts::PI * x).sin()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let prefix = "demo";
    let n_files = 4;
    let samples_per_file = 50;
    let total = n_files * samples_per_file;

    for file_idx in 0..n_files {
        // Interior points only: the viewer adds the boundary zeros itself.
        let tokens: Vec<String> = (0..samples_per_file)
            .map(|i| {
                let global = file_idx * samples_per_file + i;
                let x = (global + 1) as f64 / (total + 1) as f64;
                let y = solution(x) + rng.jitter(0.002);
                format!("{y:.6}")
            })
            .collect();

        let path = format!("{prefix}{file_idx}.dat");
        let mut file = fs::File::create(&path).expect("Failed to create segment file");
        writeln!(file, "{}", tokens.join(" ")).expect("Failed to write segment file");
    }

    println!(
        "Wrote {n_files} segment files ({samples_per_file} samples each) with prefix {prefix:?}"
    );
    println!("View them with: rusty-curve {prefix} {n_files}");
}
