/// Electrical and timing parameters of the simulated adder testbench.
///
/// Constructed once at startup and shared read-only by every stage. All
/// window boundaries used during extraction derive from these values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supply voltage in volts.
    pub voltage: f64,
    /// Half-width of the recognized logic bands in volts.
    pub threshold: f64,
    /// Leading fraction of a plateau window treated as still settling.
    pub ratio: f64,
    /// Propagation delay before the first valid cycle, in seconds.
    pub delay: f64,
    /// Length of one logic cycle, half of the fastest stimulus period.
    pub half_period: f64,
    /// Stimulus rise time, in seconds.
    pub rise_time: f64,
    /// Stimulus fall time, in seconds.
    pub fall_time: f64,
    /// Adder bus width in bits.
    pub bits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voltage: 5.0,
            threshold: 1.5,
            ratio: 0.3,
            delay: 100e-9,
            half_period: 250e-9,
            rise_time: 20e-9,
            fall_time: 20e-9,
            bits: 4,
        }
    }
}

impl Config {
    /// Number of driven pins: `A[0..N]`, `B[0..N]` and `Cin`.
    pub fn input_ports(&self) -> usize {
        2 * self.bits + 1
    }

    /// Number of probed pins: `Cout[0..N]` and `S[0..N]`.
    pub fn output_ports(&self) -> usize {
        2 * self.bits
    }

    /// Total pin columns in a trace, excluding the time column.
    pub fn columns(&self) -> usize {
        self.input_ports() + self.output_ports()
    }

    /// Number of test rows in an exhaustive sweep of the input pins.
    pub fn cnt(&self) -> usize {
        1 << self.input_ports()
    }

    /// Period of the fastest stimulus pulse.
    pub fn period(&self) -> f64 {
        2.0 * self.half_period
    }

    /// Logical name of a trace pin column.
    ///
    /// Column order is fixed by the testbench netlist:
    /// `A[0..N], B[0..N], Cin, Cout[0..N], S[0..N]`.
    pub fn port_name(&self, column: usize) -> String {
        let n = self.bits;

        if column < n {
            format!("A[{}]", column)
        } else if column < 2 * n {
            format!("B[{}]", column - n)
        } else if column == 2 * n {
            "Cin".to_string()
        } else if column < 3 * n + 1 {
            format!("Cout[{}]", column - 2 * n - 1)
        } else {
            format!("S[{}]", column - 3 * n - 1)
        }
    }
}
