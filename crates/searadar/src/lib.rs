//! # searadar: MR-231-3 radar sentence decoding
//!
//! This crate decodes the NMEA-0183-style sentence dialect of the
//! MR-231-3 marine navigation radar into strongly-typed station
//! messages. It covers sentence tokenization, checksum and field
//! extraction, per-sentence-type field mapping with physical-unit
//! validation, and the decision between a typed message, a
//! semantically-invalid message, and a hard parse failure.
//!
//! Transport is out of scope: the caller delivers raw sentence
//! strings that have already been split out of the byte stream, one
//! per [`Mr231Converter::convert`] call.
//!
//! ## Example
//!
//! ```
//! use searadar::{Mr231StationType, StationMessage, TargetStatus};
//!
//! let converter = Mr231StationType::new().create_converter();
//!
//! let messages = converter
//!     .convert("$RATTM,23,13.88,137.2,T,63.8,094.3,T,9.2,79.4,N,b,T,,783344,А*42")
//!     .expect("malformed sentence");
//!
//! match &messages[0] {
//!     StationMessage::TrackedTarget(ttm) => {
//!         assert_eq!(23, ttm.target_number);
//!         assert_eq!(TargetStatus::Tracked, ttm.status);
//!         println!("{}", ttm);
//!     }
//!     StationMessage::RadarSystemData(rsd) => println!("{}", rsd),
//!     StationMessage::Invalid(invalid) => eprintln!("rejected: {}", invalid),
//! }
//! ```
//!
//! ## Wire format
//!
//! Sentences look like
//!
//! ```txt
//! $<talker><type>,<field0>,<field1>,...,<fieldN>*<checksum>
//! ```
//!
//! with a two-character talker, a three-letter type code (`TTM` for
//! tracked target reports, `RSD` for radar system data), comma
//! delimited fields that may be empty, and an optional two-hex-digit
//! XOR checksum. The checksum is informational: a mismatch is logged
//! but does not reject the sentence.
//!
//! ## Error tiers
//!
//! Two kinds of bad input, never conflated:
//!
//! * **Structural failures** — the line is too short or does not
//!   match the frame at all. [`Mr231Converter::convert`] returns
//!   [`SentenceError`]; no message can be attributed to the input.
//! * **Semantic rejections** — the frame is fine but a field value
//!   violates a domain rule (an out-of-range bearing, a distance
//!   scale outside the legal set, an unrecognized type code). These
//!   decode normally into [`StationMessage::Invalid`] with a
//!   diagnostic naming the field and value, and are never silently
//!   dropped.
//!
//! The converter is a pure function of its input: no I/O, no state
//! across calls, safe to share between threads.

mod converter;
mod message;
mod schema;
mod sentence;
mod station;

pub use converter::Mr231Converter;
pub use message::{
    Iff, InvalidMessage, RadarSystemDataMessage, StationMessage, TargetStatus, TargetType,
    TrackedTargetMessage,
};
pub use schema::DISTANCE_SCALES;
pub use sentence::{Sentence, SentenceError};
pub use station::Mr231StationType;
