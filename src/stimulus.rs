use crate::error::*;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parameters of one periodic pulse, in the style of a SPICE PULSE
/// source.
#[derive(Debug, Clone, Copy)]
pub struct PulseParams {
    /// Initial voltage, in volts.
    pub v1: f64,
    /// Peak voltage, in volts.
    pub v2: f64,
    /// Delay before the first pulse, in seconds.
    pub delay: f64,
    /// Rise time, in seconds.
    pub rise_time: f64,
    /// Fall time, in seconds.
    pub fall_time: f64,
    /// Time spent at the peak level, in seconds.
    pub pulse_width: f64,
    /// Pulse repetition period, in seconds.
    pub period: f64,
}

/// Breakpoints of a piecewise-linear pulse train.
///
/// The waveform holds the initial level through the delay, then per
/// cycle ramps to the peak, holds for the pulse width, ramps back down
/// and holds until the next cycle starts. Consecutive breakpoints may
/// share a timestamp; consumers interpolate linearly between them.
pub fn breakpoints(params: &PulseParams, num_cycles: usize) -> Vec<(f64, f64)> {
    let mut points = vec![(0.0, params.v1), (params.delay, params.v1)];

    for i in 0..num_cycles {
        let t_start = params.delay + i as f64 * params.period;
        points.push((t_start, params.v1));
        points.push((t_start + params.rise_time, params.v2));

        let t_high = t_start + params.rise_time + params.pulse_width;
        points.push((t_high, params.v2));
        points.push((t_high + params.fall_time, params.v1));

        if i + 1 < num_cycles {
            points.push((params.delay + (i + 1) as f64 * params.period, params.v1));
        }
    }

    points
}

/// Write a pulse train as a PWL file, one `time voltage` pair per line.
pub fn write_pwl<W: Write>(writer: &mut W, params: &PulseParams, num_cycles: usize) -> Result<()> {
    for (t, v) in breakpoints(params, num_cycles) {
        writeln!(writer, "{:.12e} {:.6}", t, v)?;
    }

    Ok(())
}

pub fn write_pwl_file(
    path: impl AsRef<Path>,
    params: &PulseParams,
    num_cycles: usize,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    write_pwl(&mut writer, params, num_cycles)
}
