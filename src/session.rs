//! Session state and its transitions.
//!
//! A [`Session`] owns everything one generation cycle touches: the point log
//! and level, the gate, the current password and strength, and the history.
//! All mutation goes through [`Session::apply`] (or the per-event methods it
//! dispatches to), one event at a time. Hosts that share a session across
//! threads must serialize access to it; two generations never overlap.

use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::entropy::{
    AccrualRates, Gate, GateState, PointerSample, Region, Rejection, SampleCollector,
};
use crate::error::GenerateError;
use crate::history::HistoryBuffer;
use crate::pass::{self, GenerationConfig};
use crate::rng::{RandomSource, SystemRandom};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Sample(PointerSample),
    ConfigChanged(GenerationConfig),
    Reset,
}

/// What an event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dropped; nothing changed.
    Rejected(Rejection),
    /// A new password replaced the old one and was added to history.
    Generated { strength: u8 },
    /// This sample filled the meter. The current password is now final.
    Locked,
    /// No classes selected; password and strength were cleared.
    Cleared,
    /// The random source failed. The previous password is still current.
    RandomSourceUnavailable,
    /// Config stored without generating (gate locked or no samples yet).
    Stored,
    /// Back to an empty, collecting cycle.
    Reset,
}

pub struct Session<R = SystemRandom> {
    config: GenerationConfig,
    collector: SampleCollector,
    gate: Gate,
    password: Option<Zeroizing<String>>,
    strength: u8,
    history: HistoryBuffer,
    rng: R,
}

impl Session<SystemRandom> {
    /// Session backed by the OS CSPRNG.
    pub fn with_system_random(config: GenerationConfig, rates: AccrualRates) -> Self {
        Self::new(config, rates, SystemRandom)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: GenerationConfig, rates: AccrualRates, rng: R) -> Self {
        Self {
            config,
            collector: SampleCollector::new(rates),
            gate: Gate::new(),
            password: None,
            strength: 0,
            history: HistoryBuffer::new(),
            rng,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::Sample(sample) => self.submit(sample),
            SessionEvent::ConfigChanged(config) => self.configure(config),
            SessionEvent::Reset => self.reset(),
        }
    }

    /// Offer a motion sample to the collector.
    pub fn submit(&mut self, sample: PointerSample) -> Outcome {
        if self.gate.is_locked() {
            return Outcome::Rejected(Rejection::Locked);
        }
        if self.config.selection.is_empty() {
            self.clear();
            return Outcome::Rejected(Rejection::NoClassesSelected);
        }

        let level = match self.collector.accept(&sample) {
            Ok(level) => level,
            Err(rejection) => return Outcome::Rejected(rejection),
        };

        if self.gate.observe(level) {
            info!(
                points = self.collector.points().len(),
                strength = self.strength,
                "entropy meter full, password locked"
            );
            return Outcome::Locked;
        }
        self.regenerate()
    }

    /// Replace the generation config. Regenerates only while collecting and
    /// after at least one sample.
    pub fn configure(&mut self, config: GenerationConfig) -> Outcome {
        self.config = config;
        if self.gate.is_locked() {
            return Outcome::Stored;
        }
        if config.selection.is_empty() {
            debug!("no character classes selected");
            self.clear();
            return Outcome::Cleared;
        }
        if self.collector.is_empty() {
            return Outcome::Stored;
        }
        self.regenerate()
    }

    /// Start a new cycle. History is kept.
    pub fn reset(&mut self) -> Outcome {
        self.collector.reset();
        self.gate.reset();
        self.clear();
        info!("generator reset");
        Outcome::Reset
    }

    fn regenerate(&mut self) -> Outcome {
        match pass::generate(&self.config, &mut self.rng) {
            Ok(password) => self.complete(password),
            Err(GenerateError::EmptySelection) => {
                debug!("no character classes selected");
                self.clear();
                Outcome::Cleared
            }
            Err(GenerateError::RandomSourceUnavailable(e)) => {
                error!(error = %e, "password generation aborted");
                Outcome::RandomSourceUnavailable
            }
        }
    }

    fn complete(&mut self, password: Zeroizing<String>) -> Outcome {
        let strength = pass::score(&password);
        self.history.record(&password, strength);
        debug!(
            length = password.len(),
            strength,
            level = self.collector.level(),
            "generated"
        );
        self.password = Some(password);
        self.strength = strength;
        Outcome::Generated { strength }
    }

    fn clear(&mut self) {
        self.password = None;
        self.strength = 0;
    }

    /// The password to show, copy or export.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn entropy_level(&self) -> f64 {
        self.collector.level()
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn is_locked(&self) -> bool {
        self.gate.is_locked()
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn rates(&self) -> &AccrualRates {
        self.collector.rates()
    }

    pub fn point_count(&self) -> usize {
        self.collector.points().len()
    }

    /// Where the password is drawn. Pointer samples inside are ignored.
    pub fn set_display_region(&mut self, region: Option<Region>) {
        self.collector.set_display_region(region);
    }
}
