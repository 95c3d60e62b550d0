// ---------------------------------------------------------------------------
// Series – the zero-padded sample sequence handed to the plot
// ---------------------------------------------------------------------------

/// The concatenated samples of every segment, wrapped in the boundary pad.
/// Built once at startup, immutable afterwards; the only data the UI reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Wrap concatenated samples in the boundary pad:
    /// `[0.0] + samples + [0.0]`.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let mut values = Vec::with_capacity(samples.len() + 2);
        values.push(0.0);
        values.extend(samples);
        values.push(0.0);
        Series { values }
    }

    /// All values, pad included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Length of the padded sequence (always at least 2).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of samples that came from the segment files.
    pub fn sample_count(&self) -> usize {
        self.values.len() - 2
    }

    /// The normalised x axis for this series.
    pub fn x_coords(&self) -> Vec<f64> {
        x_coords(self.values.len())
    }

    /// Positionally paired `[x, y]` points, ready for the plot.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x_coords()
            .into_iter()
            .zip(self.values.iter().copied())
            .map(|(x, y)| [x, y])
            .collect()
    }

    /// Smallest and largest value, pad included.
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// `n` evenly spaced coordinates over the closed interval [0.0, 1.0].
///
/// A single point sits at 0.0. For longer axes the last coordinate is
/// exactly 1.0: `(n-1)/(n-1)` divides without rounding.
pub fn x_coords(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}
