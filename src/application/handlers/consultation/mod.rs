//! Consultation orchestration.

mod generate_reading;

pub use generate_reading::{ConsultationError, GenerateReadingHandler, GeneratedReading};
