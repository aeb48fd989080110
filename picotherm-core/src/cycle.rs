//! Refresh cycle state machine
//!
//! Each display update walks a fixed ring of phases. The sampling phase
//! carries a fallback rule: a failed sensor read reuses the last good
//! value so a bad cycle never aborts the loop or leaves garbage on the
//! display.

use crate::sensor::SensorError;

/// Phases of one refresh cycle
///
/// Cyclic and non-terminating; the loop only ends with process shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// Waiting for the interval timer
    Idle,
    /// Reading the temperature and clock collaborators
    Sampling,
    /// Clearing and redrawing the frame buffer
    Rendering,
    /// Pushing the frame buffer to the display
    Transmitting,
    /// Blocking until the next tick
    Sleeping,
}

impl CyclePhase {
    /// Step to the next phase in the ring
    pub fn advance(self) -> Self {
        use CyclePhase::*;
        match self {
            Idle => Sampling,
            Sampling => Rendering,
            Rendering => Transmitting,
            Transmitting => Sleeping,
            Sleeping => Idle,
        }
    }
}

/// Temperature sampling with last-known-value fallback
#[derive(Debug, Default, Clone, Copy)]
pub struct Sampler {
    last_temp: Option<f32>,
}

impl Sampler {
    /// Create a sampler with no reading yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample and return the value to display
    ///
    /// A successful read replaces the stored value. A failed read returns
    /// the last good value, or `None` if no read has ever succeeded (the
    /// layout renders a placeholder for that).
    pub fn record(&mut self, reading: Result<f32, SensorError>) -> Option<f32> {
        if let Ok(t) = reading {
            self.last_temp = Some(t);
        }
        self.last_temp
    }

    /// Last good reading, if any
    pub fn last(&self) -> Option<f32> {
        self.last_temp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_ring_order() {
        use CyclePhase::*;
        let mut phase = Idle;
        let expected = [Sampling, Rendering, Transmitting, Sleeping, Idle];
        for want in expected {
            phase = phase.advance();
            assert_eq!(phase, want);
        }
    }

    #[test]
    fn test_sampler_keeps_last_good_value() {
        let mut s = Sampler::new();
        assert_eq!(s.record(Ok(23.5)), Some(23.5));
        assert_eq!(s.record(Err(SensorError::ConversionError)), Some(23.5));
        assert_eq!(s.record(Ok(24.0)), Some(24.0));
        assert_eq!(s.last(), Some(24.0));
    }

    #[test]
    fn test_sampler_placeholder_before_first_read() {
        let mut s = Sampler::new();
        assert_eq!(s.record(Err(SensorError::OutOfRange)), None);
        assert_eq!(s.last(), None);
    }
}
