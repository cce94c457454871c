use crate::config::Config;
use crate::error::*;
use crate::level;

/// Reduce one closed plateau to a logic level.
///
/// The leading `ratio` fraction of the nominal window is dropped as
/// still settling, the remaining samples are combined into a
/// time-weighted average and the averaged voltage is classified.
///
/// `cycle` only identifies the plateau in errors.
pub fn aggregate(config: &Config, cycle: usize, plateau: &[(f64, f64)]) -> Result<u8> {
    let duration = match (plateau.first(), plateau.last()) {
        (Some(first), Some(last)) => last.0 - first.0,
        _ => 0.0,
    };
    if !(duration > 0.0 && duration <= config.half_period) {
        return Err(Error::InvalidPlateauDuration(duration));
    }

    let average = weighted_average(config, plateau).ok_or(Error::EmptyPlateau(cycle))?;

    level::to_digital(config, average)
}

/// Time-weighted average of the stable part of a plateau.
///
/// Each retained sample is weighted by the time elapsed since the
/// previous retained sample, normalized by the nominal length of the
/// stable window. This approximates the time-integral average of a
/// zero-order-hold signal without requiring uniform sampling. Returns
/// `None` when every sample falls before the stabilization cutoff.
fn weighted_average(config: &Config, plateau: &[(f64, f64)]) -> Option<f64> {
    let window = config.half_period - config.fall_time;
    let stab_start = plateau[0].0 + window * config.ratio;
    let norm = window * (1.0 - config.ratio);

    let mut average = 0.0;
    let mut prev: Option<f64> = None;

    for &(t, v) in plateau.iter().filter(|point| point.0 >= stab_start) {
        if let Some(prev_t) = prev {
            average += v * (t - prev_t) / norm;
        }
        prev = Some(t);
    }

    prev.map(|_| average)
}
