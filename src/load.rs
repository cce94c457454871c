use crate::error::*;

use ndarray::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Analog samples for all monitored pins over one shared time axis.
///
/// Rows are samples in temporal order, columns are pins in the fixed
/// testbench order. Immutable once loaded.
pub struct Trace {
    time: Array1<f64>,
    voltages: Array2<f64>,
}

impl Trace {
    pub fn new(time: Array1<f64>, voltages: Array2<f64>) -> Result<Self> {
        if time.len() != voltages.nrows() {
            return Err(Error::MalformedInput(format!(
                "time axis has {} samples but voltage table has {} rows",
                time.len(),
                voltages.nrows()
            )));
        }

        for i in 1..time.len() {
            if time[i] < time[i - 1] {
                return Err(Error::MalformedInput(format!(
                    "time axis decreases at sample {}: {} after {}",
                    i,
                    time[i],
                    time[i - 1]
                )));
            }
        }

        Ok(Self { time, voltages })
    }

    pub fn num_samples(&self) -> usize {
        self.time.len()
    }

    pub fn num_pins(&self) -> usize {
        self.voltages.ncols()
    }

    pub fn time(&self) -> ArrayView1<f64> {
        self.time.view()
    }

    pub fn voltages(&self, pin: usize) -> ArrayView1<f64> {
        self.voltages.column(pin)
    }

    /// Iterate one pin's `(time, voltage)` samples in temporal order.
    pub fn samples(&self, pin: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.voltages.column(pin).into_iter().copied())
    }
}


/// Read a whitespace-delimited trace table.
///
/// The first line is a header and is skipped. Every following non-blank
/// line must hold the time column plus `num_pins` voltage columns.
pub fn read_trace(path: impl AsRef<Path>, num_pins: usize) -> Result<Trace> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| Error::MalformedInput(format!("cannot read '{}': {}", path.display(), err)))?;
    let reader = BufReader::new(file);

    let mut time = Vec::new();
    let mut voltages = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;

        if lineno == 0 || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != num_pins + 1 {
            return Err(Error::MalformedInput(format!(
                "line {}: expected {} columns, found {}",
                lineno + 1,
                num_pins + 1,
                fields.len()
            )));
        }

        let mut row = Vec::with_capacity(fields.len());
        for field in fields {
            let value: f64 = field.parse().map_err(|_| {
                Error::MalformedInput(format!("line {}: invalid number '{}'", lineno + 1, field))
            })?;
            row.push(value);
        }

        time.push(row[0]);
        voltages.extend_from_slice(&row[1..]);
    }

    if time.is_empty() {
        return Err(Error::MalformedInput(format!(
            "'{}' contains no data rows",
            path.display()
        )));
    }

    let rows = time.len();
    let voltages = Array2::from_shape_vec((rows, num_pins), voltages)
        .map_err(|err| Error::MalformedInput(err.to_string()))?;

    Trace::new(Array1::from_vec(time), voltages)
}
