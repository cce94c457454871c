use crate::config::Config;
use crate::extract::BitBundle;

use std::fmt;

/// One full-adder bit slice: `(sum, carry-out)` of two operand bits and
/// a carry-in.
pub fn full_adder(a: u8, b: u8, cin: u8) -> (u8, u8) {
    let s = a ^ b ^ cin;
    let cout = (a & b) | (a & cin) | (b & cin);

    (s, cout)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Sum,
    Carry,
}

/// A single disagreement between the circuit and the truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub row: usize,
    pub bit: usize,
    pub output: Output,
    pub expected: u8,
    pub actual: u8,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.output {
            Output::Sum => "Sum",
            Output::Carry => "Carry",
        };

        write!(
            f,
            "{} mismatch in row {}, bit {}: expected {}, got {}",
            what, self.row, self.bit, self.expected, self.actual
        )
    }
}

/// Check every sweep row of an extracted bundle against the adder truth
/// table, walking the carry from the least to the most significant bit.
///
/// The carry-in of bit 0 is the driven `Cin` pin; carries of higher
/// bits are recomputed through [`full_adder`], since the ripple chain
/// is internal to the circuit and not probed. Mismatches are collected,
/// not raised: the sweep always runs to completion so that one run
/// surfaces every discrepancy. An empty result is the pass condition.
pub fn verify(config: &Config, bundle: &BitBundle) -> Vec<Mismatch> {
    let mut findings = Vec::new();

    for row in 0..config.cnt() {
        let mut cin = bundle.cin[row];

        for bit in 0..config.bits {
            let a = bundle.a[bit][row];
            let b = bundle.b[bit][row];
            let (s, cout) = full_adder(a, b, cin);

            if bundle.s[bit][row] != s {
                findings.push(Mismatch {
                    row,
                    bit,
                    output: Output::Sum,
                    expected: s,
                    actual: bundle.s[bit][row],
                });
            }

            if bundle.cout[bit][row] != cout {
                findings.push(Mismatch {
                    row,
                    bit,
                    output: Output::Carry,
                    expected: cout,
                    actual: bundle.cout[bit][row],
                });
            }

            cin = cout;
        }
    }

    findings
}
