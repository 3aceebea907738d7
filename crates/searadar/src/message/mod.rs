//! Typed station messages produced by the converter

use std::fmt;

mod radar;
mod target;

pub use radar::RadarSystemDataMessage;
pub use target::{Iff, TargetStatus, TargetType, TrackedTargetMessage};

/// One decoded station message
///
/// Every successfully tokenized sentence decodes into exactly one of
/// these variants. Sentences whose shape is fine but whose field
/// content violates a domain rule — and sentences with a well-formed
/// but unrecognized type code — surface as
/// [`StationMessage::Invalid`] rather than disappearing or raising
/// an error. Callers can therefore match exhaustively:
///
/// ```
/// use searadar::{Mr231Converter, StationMessage};
///
/// let converter = Mr231Converter::new();
/// for message in converter
///     .convert("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,95.0,N,N,S*33")?
/// {
///     match message {
///         StationMessage::TrackedTarget(ttm) => println!("target {}", ttm.target_number),
///         StationMessage::RadarSystemData(rsd) => println!("scale {}", rsd.distance_scale),
///         StationMessage::Invalid(invalid) => eprintln!("{}", invalid),
///     }
/// }
/// # Ok::<(), searadar::SentenceError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum StationMessage {
    /// Tracked target report (`TTM`)
    TrackedTarget(TrackedTargetMessage),

    /// Radar system data report (`RSD`)
    RadarSystemData(RadarSystemDataMessage),

    /// Structurally parseable but semantically rejected sentence
    Invalid(InvalidMessage),
}

impl From<TrackedTargetMessage> for StationMessage {
    fn from(message: TrackedTargetMessage) -> Self {
        StationMessage::TrackedTarget(message)
    }
}

impl From<RadarSystemDataMessage> for StationMessage {
    fn from(message: RadarSystemDataMessage) -> Self {
        StationMessage::RadarSystemData(message)
    }
}

impl From<InvalidMessage> for StationMessage {
    fn from(message: InvalidMessage) -> Self {
        StationMessage::Invalid(message)
    }
}

impl fmt::Display for StationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationMessage::TrackedTarget(message) => message.fmt(f),
            StationMessage::RadarSystemData(message) => message.fmt(f),
            StationMessage::Invalid(message) => message.fmt(f),
        }
    }
}

/// A semantically rejected sentence
///
/// Carries a human-readable diagnostic naming the field that failed
/// validation and the offending value, like
/// `RSD message. Wrong distance scale value: 95.0`. Diagnostics are a
/// stable contract; downstream reporting keys on them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidMessage {
    info: String,
}

impl InvalidMessage {
    pub fn new<S>(info: S) -> Self
    where
        S: Into<String>,
    {
        InvalidMessage { info: info.into() }
    }

    /// The diagnostic text
    pub fn info(&self) -> &str {
        &self.info
    }
}

impl fmt::Display for InvalidMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.info.fmt(f)
    }
}
