//! Entropy meter: sample collection and the generation gate.
//!
//! The level is a UI progress value derived from how many motion samples were
//! accepted. It is not a measurement of bits of entropy.

pub mod collector;
pub mod gate;

pub use collector::{
    AccrualRates, Modality, ModalityRate, Point, PointerSample, Region, Rejection,
    SampleCollector,
};
pub use gate::{FULL, Gate, GateState};
