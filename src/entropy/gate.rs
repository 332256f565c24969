//! Collecting / Locked gate.

/// Level at which the gate locks.
pub const FULL: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Below full; every accepted sample or config change regenerates.
    #[default]
    Collecting,
    /// Full; the password is final until reset.
    Locked,
}

#[derive(Debug, Clone, Default)]
pub struct Gate {
    state: GateState,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    /// Feed the level after an accepted sample. Returns true on the transition
    /// into `Locked`.
    pub fn observe(&mut self, level: f64) -> bool {
        if self.state == GateState::Collecting && level >= FULL {
            self.state = GateState::Locked;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.state = GateState::Collecting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_once_at_full() {
        let mut gate = Gate::new();
        assert_eq!(gate.state(), GateState::Collecting);
        assert!(!gate.observe(99.9));
        assert!(gate.observe(FULL));
        assert!(gate.is_locked());
        assert!(!gate.observe(FULL));
    }

    #[test]
    fn only_reset_unlocks() {
        let mut gate = Gate::new();
        gate.observe(FULL);
        gate.observe(0.0);
        assert!(gate.is_locked());
        gate.reset();
        assert_eq!(gate.state(), GateState::Collecting);
    }
}
