//! Raw sentence tokenization

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Error splitting a raw radar sentence
///
/// Structural errors mean the line cannot be attributed to any
/// sentence type at all. They are fatal for the offending input and
/// are reported to the caller as an `Err` — unlike semantic problems
/// with field *content*, which decode into
/// [`InvalidMessage`](crate::InvalidMessage).
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SentenceError {
    /// Input is shorter than the minimum viable `$TTSSS` header
    #[error("invalid radar sentence: shorter than the minimum header")]
    TooShort,

    /// Header or frame does not match the vendor dialect
    #[error("invalid radar sentence: text does not match the `$<talker><type>,...` frame")]
    Malformed,
}

/// One tokenized radar sentence
///
/// Splits a single raw line of the vendor's NMEA-0183-style dialect,
///
/// ```txt
/// $RATTM,23,13.88,137.2,T,63.8,094.3,T,9.2,79.4,N,b,T,,783344,А*42
/// ```
///
/// into the two-character talker (`RA`), the three-letter sentence
/// type code (`TTM`), and the ordered comma-separated field strings
/// with the `*hh` checksum suffix stripped. Fields may be empty
/// strings, meaning "not provided".
///
/// ```
/// use searadar::Sentence;
///
/// let sentence = Sentence::new("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33")?;
/// assert_eq!("RA", sentence.talker());
/// assert_eq!("RSD", sentence.type_code());
/// assert_eq!(Some("36.5"), sentence.fields().first().copied());
/// # Ok::<(), searadar::SentenceError>(())
/// ```
///
/// The checksum is informational only: [`Sentence::checksum_ok`]
/// reports whether the stated value matches the computed one, but a
/// mismatch never fails tokenization and says nothing about field
/// content.
#[derive(Clone, Debug, PartialEq)]
pub struct Sentence<'raw> {
    talker: &'raw str,
    type_code: &'raw str,
    body: &'raw str,
    fields: Vec<&'raw str>,
    checksum: Option<u8>,
}

impl<'raw> Sentence<'raw> {
    /// Tokenize a single raw sentence
    ///
    /// Trailing line terminators are ignored. Fails with a
    /// [`SentenceError`] when the header is too short or the frame
    /// does not match `$<talker:2><type:3>` followed by either
    /// nothing or a comma-introduced field list.
    pub fn new(raw: &'raw str) -> Result<Self, SentenceError> {
        lazy_static! {
            static ref HEADER: Regex =
                Regex::new(r"^\$([A-Z]{2})([A-Z]{3})").expect("bad header regexp");
        }

        let raw = raw.trim_end();
        if raw.len() < MIN_HEADER_LENGTH {
            return Err(SentenceError::TooShort);
        }

        let caps = HEADER.captures(raw).ok_or(SentenceError::Malformed)?;
        let talker = caps.get(1).ok_or(SentenceError::Malformed)?.as_str();
        let type_code = caps.get(2).ok_or(SentenceError::Malformed)?.as_str();

        let rest = &raw[MIN_HEADER_LENGTH..];
        let (body, checksum) = match rest.rsplit_once('*') {
            Some((body, stated)) => (body, Some(parse_checksum(stated)?)),
            None => (rest, None),
        };

        let fields = if body.is_empty() {
            Vec::new()
        } else if let Some(list) = body.strip_prefix(',') {
            list.split(',').collect()
        } else {
            return Err(SentenceError::Malformed);
        };

        Ok(Self {
            talker,
            type_code,
            body,
            fields,
            checksum,
        })
    }

    /// Two-character talker prefix, like `RA`
    pub fn talker(&self) -> &'raw str {
        self.talker
    }

    /// Three-letter sentence type code, like `TTM` or `RSD`
    pub fn type_code(&self) -> &'raw str {
        self.type_code
    }

    /// Ordered field strings, checksum stripped
    ///
    /// Empty strings mark fields the radar did not provide.
    pub fn fields(&self) -> &[&'raw str] {
        &self.fields
    }

    /// Stated checksum byte, if the sentence carried a `*hh` suffix
    pub fn checksum(&self) -> Option<u8> {
        self.checksum
    }

    /// Advisory checksum verification
    ///
    /// Returns `None` if the sentence carried no checksum suffix.
    /// Otherwise compares the stated value against the XOR of all
    /// bytes between `$` and `*`. A `Some(false)` is worth a log
    /// line but must not be mistaken for field validation.
    pub fn checksum_ok(&self) -> Option<bool> {
        let stated = self.checksum?;
        let computed = self
            .talker
            .bytes()
            .chain(self.type_code.bytes())
            .chain(self.body.bytes())
            .fold(0u8, |acc, byte| acc ^ byte);
        Some(computed == stated)
    }
}

/// Minimum viable header: `$` + two-character talker + three-letter type
const MIN_HEADER_LENGTH: usize = 6;

// The checksum suffix must be exactly two hex digits; anything else
// breaks the frame.
fn parse_checksum(stated: &str) -> Result<u8, SentenceError> {
    if stated.len() != 2 {
        return Err(SentenceError::Malformed);
    }
    u8::from_str_radix(stated, 16).map_err(|_| SentenceError::Malformed)
}
