//! Entropy-gated password generation.
//!
//! A [`Session`] collects pointer and touch samples until its meter fills,
//! regenerating a password from the OS CSPRNG on every accepted sample. Once
//! the meter reaches 100 the gate locks and the password is final until
//! [`Session::reset`].
//!
//! The "entropy level" is a progress metric for the UI. It counts accepted
//! motion samples and says nothing about bits of entropy in the output.

pub mod entropy;
pub mod error;
pub mod export;
pub mod history;
pub mod pass;
pub mod rng;
pub mod session;
pub mod settings;

pub use entropy::{AccrualRates, GateState, Modality, PointerSample, Region, Rejection};
pub use error::{ExportError, GenerateError, RandomSourceUnavailable, SettingsError};
pub use history::{HistoryBuffer, HistoryEntry};
pub use pass::{CharacterClass, CharacterClassSelection, GenerationConfig, StrengthLabel};
pub use rng::{RandomSource, SystemRandom};
pub use session::{Outcome, Session, SessionEvent};
pub use settings::Settings;
