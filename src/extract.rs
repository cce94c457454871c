pub mod input;
pub mod output;
pub mod plateau;

use crate::config::Config;
use crate::error::*;
use crate::load::Trace;

use ndarray::prelude::*;

//
// Types
//

/// One extracted logic level per sweep row, fully populated.
pub type DigitalVector = Array1<u8>;

/// Digital vectors for every monitored pin.
///
/// Built once by extraction, read-only during verification. Only the
/// carry-in of bit 0 is physically driven; carries of higher bits are
/// internal to the adder and never probed.
pub struct BitBundle {
    pub a: Vec<DigitalVector>,
    pub b: Vec<DigitalVector>,
    pub cin: DigitalVector,
    pub cout: Vec<DigitalVector>,
    pub s: Vec<DigitalVector>,
}

/// Windowing progress of a single-pin extraction pass.
enum State {
    /// Before the propagation delay, samples are discarded.
    BeforeDelay,
    /// Collecting within cycle `k`'s window.
    InCycle(usize),
    /// All cycles resolved, remaining samples are ignored.
    Done,
}

//
// Extraction
//

/// Extract digital vectors for all pins of a trace.
///
/// Input pins take the sampled path, output pins the plateau-averaged
/// path. A failure on any pin aborts the whole run; verification never
/// sees a partially populated bundle.
pub fn extract_all(config: &Config, trace: &Trace) -> Result<BitBundle> {
    if trace.num_pins() != config.columns() {
        return Err(Error::MalformedInput(format!(
            "trace has {} pin columns, testbench defines {}",
            trace.num_pins(),
            config.columns()
        )));
    }

    let column = |col: usize| -> Result<DigitalVector> {
        let rv = if col < config.input_ports() {
            input::extract(config, trace.samples(col))
        } else {
            output::extract(config, trace.samples(col))
        };

        rv.map_err(|err| Error::Signal {
            name: config.port_name(col),
            source: Box::new(err),
        })
    };

    let n = config.bits;
    let a = (0..n).map(|i| column(i)).collect::<Result<Vec<_>>>()?;
    let b = (0..n).map(|i| column(n + i)).collect::<Result<Vec<_>>>()?;
    let cin = column(2 * n)?;
    let cout = (0..n).map(|i| column(2 * n + 1 + i)).collect::<Result<Vec<_>>>()?;
    let s = (0..n).map(|i| column(3 * n + 1 + i)).collect::<Result<Vec<_>>>()?;

    Ok(BitBundle { a, b, cin, cout, s })
}

/// Turn per-cycle slots into a digital vector, rejecting unset entries.
fn seal(slots: Vec<Option<u8>>) -> Result<DigitalVector> {
    let total = slots.len();
    let mut values = Vec::with_capacity(total);

    for (cycle, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(bit) => values.push(bit),
            None => return Err(Error::IncompleteExtraction(cycle, total)),
        }
    }

    Ok(Array1::from_vec(values))
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_seal_complete() {
        let vector = seal(vec![Some(1), Some(0), Some(1)]).unwrap();
        assert_eq!(Array1::from_vec(vec![1, 0, 1]), vector);
    }

    #[test]
    fn test_seal_rejects_unset_slot() {
        let rv = seal(vec![Some(1), None, Some(1)]);
        assert!(matches!(rv, Err(Error::IncompleteExtraction(1, 3))));
    }
}
