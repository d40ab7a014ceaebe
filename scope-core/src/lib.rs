// scope-core/src/lib.rs

//! The core logic for the microphone wave scope.
//! This crate is responsible for turning captured sample blocks into
//! display-ready data: shaped waveforms, RMS amplitude, amplitude-gated
//! pitch readings, and nearest-note classification. It is completely
//! headless and contains no GUI code.

pub mod frame;
pub mod pitch;
pub mod plot;
pub mod scope;
pub mod tuning;
pub mod waveform;

pub use frame::FrameChunker;
pub use pitch::PitchReading;
pub use scope::{Scope, ScopeData};
pub use tuning::NoteClassification;
pub use waveform::WaveShape;
