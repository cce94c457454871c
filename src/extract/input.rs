use super::{DigitalVector, State};
use crate::config::Config;
use crate::error::*;
use crate::level;

/// Extract the digital vector of a driven (stimulus) pin.
///
/// Stimulus waveforms have a single pre-generated transition per cycle,
/// so the first sample strictly inside the settled part of each cycle's
/// window is classified directly, without averaging. Both window bounds
/// are exclusive here, unlike the output path where a sample on the
/// cycle end still belongs to the cycle. The scan stops at the end of
/// the sweep; any cycle left unresolved fails the extraction.
pub fn extract<I>(config: &Config, samples: I) -> Result<DigitalVector>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let cnt = config.cnt();
    let end = config.delay + cnt as f64 * config.half_period;
    let mut slots: Vec<Option<u8>> = vec![None; cnt];
    let mut state = State::BeforeDelay;

    for (t, v) in samples {
        if let State::BeforeDelay = state {
            if t <= config.delay {
                continue;
            }
            state = State::InCycle(0);
        }

        let k = match state {
            State::InCycle(k) => k,
            _ => break,
        };

        if t >= end {
            break;
        }

        let lower = config.delay + config.half_period * k as f64 + config.rise_time;
        let upper = config.delay + config.half_period * (k + 1) as f64;

        if lower < t && t < upper {
            slots[k] = Some(level::to_digital(config, v)?);
            state = if k + 1 < cnt {
                State::InCycle(k + 1)
            } else {
                State::Done
            };
        }
    }

    super::seal(slots)
}


#[cfg(test)]
mod test {
    use super::*;
    use ndarray::prelude::*;

    fn small_config() -> Config {
        Config {
            bits: 1,
            ..Config::default()
        }
    }

    /// One settled sample per cycle, 30 ns past the nominal edge.
    fn driven_wave(config: &Config, levels: &[u8]) -> Vec<(f64, f64)> {
        let mut samples = vec![(0.0, 0.0)];

        for (k, &level) in levels.iter().enumerate() {
            let start = config.delay + config.half_period * k as f64;
            samples.push((start + 30e-9, level as f64 * config.voltage));
        }

        samples
    }

    #[test]
    fn test_driven_wave_extraction() {
        let config = small_config();
        let levels = [1, 0, 1, 1, 0, 0, 1, 0];

        let vector = extract(&config, driven_wave(&config, &levels)).unwrap();
        assert_eq!(Array1::from_vec(levels.to_vec()), vector);
    }

    #[test]
    fn test_first_sample_in_window_wins() {
        let config = small_config();
        let mut samples = driven_wave(&config, &[1; 8]);

        // A second, contradictory sample later in cycle 4's window must
        // be ignored.
        let start = config.delay + config.half_period * 4.0;
        samples.push((start + 200e-9, 0.0));
        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let vector = extract(&config, samples).unwrap();
        assert_eq!(Array1::from_elem(8, 1), vector);
    }

    #[test]
    fn test_sample_on_rise_boundary_is_excluded() {
        let config = small_config();
        let mut samples = driven_wave(&config, &[0; 8]);

        // Cycle 2's only sample sits exactly on the rise-time boundary.
        // The strict lower bound leaves the slot unresolved.
        let start = config.delay + config.half_period * 2.0;
        samples.retain(|&(t, _)| t <= start || t >= start + config.half_period);
        samples.push((start + config.rise_time, 0.0));
        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let rv = extract(&config, samples);
        assert!(matches!(rv, Err(Error::IncompleteExtraction(2, 8))));
    }

    #[test]
    fn test_sample_on_cycle_end_is_excluded() {
        let config = small_config();
        let mut samples = driven_wave(&config, &[0; 8]);

        // Unlike the output path, a sample exactly on the cycle end
        // belongs to neither cycle.
        let start = config.delay + config.half_period * 6.0;
        let upper = config.delay + config.half_period * 7.0;
        samples.retain(|&(t, _)| t <= start || t > upper);
        samples.push((upper, 0.0));
        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let rv = extract(&config, samples);
        assert!(matches!(rv, Err(Error::IncompleteExtraction(6, 8))));
    }

    #[test]
    fn test_truncated_trace() {
        let config = small_config();
        let mut samples = driven_wave(&config, &[0; 8]);

        let end = config.delay + config.half_period * 7.0;
        samples.retain(|&(t, _)| t < end);

        let rv = extract(&config, samples);
        assert!(matches!(rv, Err(Error::IncompleteExtraction(7, 8))));
    }

    #[test]
    fn test_samples_after_sweep_are_ignored() {
        let config = small_config();
        let mut samples = driven_wave(&config, &[1; 8]);

        // Garbage after the sweep bound must never be classified.
        let end = config.delay + 8.0 * config.half_period;
        samples.push((end + 1e-9, 2.5));

        let vector = extract(&config, samples).unwrap();
        assert_eq!(Array1::from_elem(8, 1), vector);
    }

    #[test]
    fn test_unsettled_sample_fails() {
        let config = small_config();
        let mut samples = driven_wave(&config, &[1; 8]);

        // A mid-rail first sample in a window is a hard error.
        samples[3].1 = 2.5;

        let rv = extract(&config, samples);
        assert!(matches!(rv, Err(Error::InvalidLevel(_))));
    }
}
