use std::f64::consts::TAU;

/// Two-speed angular scan over one turn around the rotation center.
///
/// The window spans `[angle + min_step + buffer, angle + 2π − min_step −
/// buffer)`: one guard arc of `min_step` on each side so the first and the
/// last accepted region cannot overlap the source region, plus the caller's
/// extra buffer. Advancing by `min_step` after an accept guarantees that
/// consecutive accepted positions are at least `min_step` apart; advancing
/// by the finer `increment` after a reject probes for the next free slot.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AngularSweep {
    current: f64,
    max: f64,
    min_step: f64,
    increment: f64,
}

impl AngularSweep {
    pub(crate) fn new(position_angle: f64, min_step: f64, increment: f64, buffer: f64) -> Self {
        Self {
            current: position_angle + min_step + buffer,
            max: position_angle + TAU - min_step - buffer,
            min_step,
            increment,
        }
    }

    /// Angle of the next candidate, or `None` once the window is exhausted.
    ///
    /// Also `None` from the start when the window is empty or inverted
    /// (guard arcs wider than the full turn).
    #[inline]
    pub(crate) fn current(&self) -> Option<f64> {
        (self.current < self.max).then_some(self.current)
    }

    /// Remaining window length, radians. Negative when inverted.
    #[inline]
    pub(crate) fn remaining(&self) -> f64 {
        self.max - self.current
    }

    #[inline]
    pub(crate) fn accept(&mut self) {
        self.current += self.min_step;
    }

    #[inline]
    pub(crate) fn reject(&mut self) {
        self.current += self.increment;
    }
}
