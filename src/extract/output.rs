use super::{plateau, DigitalVector, State};
use crate::config::Config;
use crate::error::*;

/// Extract the digital vector of a probed (response) pin.
///
/// Response signals may exhibit residual ringing after an edge, so each
/// cycle's window collects every sample between `fall_time` past the
/// nominal edge (exclusive) and the end of the cycle (inclusive). The
/// first sample beyond the window closes the plateau, which is then
/// reduced by [`plateau::aggregate`]. The closing sample itself is
/// consumed and never carried into the next cycle's window.
pub fn extract<I>(config: &Config, samples: I) -> Result<DigitalVector>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let cnt = config.cnt();
    let mut slots: Vec<Option<u8>> = vec![None; cnt];
    let mut acc: Vec<(f64, f64)> = Vec::new();
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

        let lower = config.delay + config.half_period * k as f64 + config.fall_time;
        let upper = config.delay + config.half_period * (k + 1) as f64;

        if lower < t && t <= upper {
            acc.push((t, v));
        } else if t > upper {
            if acc.is_empty() {
                return Err(Error::EmptyPlateau(k));
            }

            slots[k] = Some(plateau::aggregate(config, k, &acc)?);
            acc.clear();
            state = if k + 1 < cnt {
                State::InCycle(k + 1)
            } else {
                State::Done
            };
        }
    }

    super::seal(slots)
}
