use crate::config::Config;
use crate::error::*;

/// Map one settled voltage sample to a logic level.
///
/// Returns 0 for samples strictly inside the band around 0 V and 1 for
/// samples strictly inside the band around the supply voltage. Anything
/// in between is rejected rather than rounded, to catch simulation
/// glitches and mis-timed sampling.
pub fn to_digital(config: &Config, sample: f64) -> Result<u8> {
    if -config.threshold < sample && sample < config.threshold {
        Ok(0)
    } else if config.voltage - config.threshold < sample
        && sample < config.voltage + config.threshold
    {
        Ok(1)
    } else {
        Err(Error::InvalidLevel(sample))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_low_band() {
        let config = Config::default();

        assert_eq!(0, to_digital(&config, 0.0).unwrap());
        assert_eq!(0, to_digital(&config, 1.49).unwrap());
        assert_eq!(0, to_digital(&config, -1.49).unwrap());
    }

    #[test]
    fn test_high_band() {
        let config = Config::default();

        assert_eq!(1, to_digital(&config, 5.0).unwrap());
        assert_eq!(1, to_digital(&config, 3.51).unwrap());
        assert_eq!(1, to_digital(&config, 6.49).unwrap());
    }

    #[test]
    fn test_forbidden_values() {
        let config = Config::default();

        for v in [1.5, -1.5, 2.5, 3.5, 6.5, -4.0, 12.0] {
            assert!(matches!(to_digital(&config, v), Err(Error::InvalidLevel(_))));
        }
    }
}
