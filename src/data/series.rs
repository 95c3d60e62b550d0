use std::path::PathBuf;

use anyhow::Result;

use super::loader::read_samples;
use super::model::Series;

// ---------------------------------------------------------------------------
// Segment file naming
// ---------------------------------------------------------------------------

/// Filename of one segment: `<prefix><index>.dat`.
pub fn segment_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}{index}.dat"))
}

/// The ordered segment list, `prefix0.dat` through `prefix{count-1}.dat`.
pub fn segment_paths(prefix: &str, count: usize) -> Vec<PathBuf> {
    (0..count).map(|index| segment_path(prefix, index)).collect()
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Load every segment in index order and join them into the padded series.
///
/// The first segment that fails to load aborts the whole assembly. A count
/// of zero touches no file and yields the bare two-point pad.
pub fn assemble(prefix: &str, count: usize) -> Result<Series> {
    let mut samples = Vec::new();

    for path in segment_paths(prefix, count) {
        let values = read_samples(&path)?;
        log::debug!("{}: {} samples", path.display(), values.len());
        samples.extend(values);
    }

    Ok(Series::from_samples(samples))
}
