//! Tracked target report

use std::fmt;

use strum::EnumMessage;

/// Decoded tracked target (`TTM`) report
///
/// All numeric fields are positionally decoded from the sentence and
/// already validated: `target_number` is non-negative, `bearing` and
/// `course` lie in `[0, 360)`, `distance` and `speed` are
/// non-negative. Reference flags, closest-point data, units, name and
/// time are passed through as the radar sent them; absent fields are
/// `None` or empty.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedTargetMessage {
    /// Target number assigned by the radar
    pub target_number: u32,
    /// Distance to the target, nautical miles
    pub distance: f64,
    /// Bearing to the target, degrees
    pub bearing: f64,
    /// True/relative bearing reference flag
    pub bearing_reference: Option<char>,
    /// Target speed
    pub speed: f64,
    /// Target course, degrees
    pub course: f64,
    /// True/relative course reference flag
    pub course_reference: Option<char>,
    /// Distance of closest point of approach, informational
    pub distance_cpa: Option<f64>,
    /// Time to closest point of approach, informational
    pub time_cpa: Option<f64>,
    /// Speed/distance units flag
    pub units: Option<char>,
    /// Target name or label
    pub name: String,
    /// Tracking status
    pub status: TargetStatus,
    /// Reference target flag
    pub reference_target: Option<char>,
    /// Time of the report, as sent
    pub time: String,
    /// Target classification
    pub target_type: TargetType,
    /// Identification friend-or-foe
    pub iff: Iff,
}

impl fmt::Display for TrackedTargetMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target {}: {} NM at {}°, course {}°, speed {}, {}, {}",
            self.target_number,
            self.distance,
            self.bearing,
            self.course,
            self.speed,
            self.status,
            self.iff
        )
    }
}

/// Tracking status of a reported target
///
/// Converted `from()` the single-character wire code. Unrecognized
/// or absent codes decode quietly as [`TargetStatus::Unknown`] so
/// that decoding stays total.
///
/// ```
/// use searadar::TargetStatus;
///
/// assert_eq!(TargetStatus::Tracked, TargetStatus::from("T"));
/// assert_eq!("T", TargetStatus::Tracked.as_code_str());
/// assert_eq!("Tracked", format!("{}", TargetStatus::Tracked));
///
/// assert_eq!(TargetStatus::Unknown, TargetStatus::from("x"));
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage, strum_macros::EnumString,
)]
pub enum TargetStatus {
    /// Target is being tracked
    #[strum(serialize = "T", detailed_message = "Tracked")]
    Tracked,

    /// Target has been lost
    #[strum(serialize = "L", detailed_message = "Lost")]
    Lost,

    /// Target is in acquisition/query
    #[strum(serialize = "Q", detailed_message = "Query")]
    Query,

    /// Status code not recognized
    #[strum(serialize = "", detailed_message = "Unknown")]
    Unknown,
}

impl TargetStatus {
    /// Parse from the one-character wire code
    ///
    /// Anything but `T`, `L` or `Q` decodes as
    /// [`TargetStatus::Unknown`].
    pub fn from<S>(code: S) -> Self
    where
        S: AsRef<str>,
    {
        str::parse(code.as_ref()).unwrap_or_default()
    }

    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// One-character wire code
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl Default for TargetStatus {
    fn default() -> Self {
        TargetStatus::Unknown
    }
}

impl From<&str> for TargetStatus {
    fn from(code: &str) -> TargetStatus {
        TargetStatus::from(code)
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Target classification
///
/// The MR-231-3 dialect does not carry a classification field;
/// tracked target reports always decode as
/// [`TargetType::Unknown`]. The enumeration is non-exhaustive to
/// admit dialects that do report one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage)]
#[non_exhaustive]
pub enum TargetType {
    /// No classification reported
    #[strum(detailed_message = "Unknown")]
    Unknown,
}

impl TargetType {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl Default for TargetType {
    fn default() -> Self {
        TargetType::Unknown
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Identification friend-or-foe flag
///
/// The radar reports IFF with the Cyrillic codes of the vendor
/// dialect; the Latin lookalikes are accepted as well. Unrecognized
/// codes decode quietly as [`Iff::Unknown`].
///
/// ```
/// use searadar::Iff;
///
/// assert_eq!(Iff::Friend, Iff::from("А"));
/// assert_eq!(Iff::Foe, Iff::from("P"));
/// assert_eq!(Iff::Unknown, Iff::from("?"));
/// assert_eq!("Friend", format!("{}", Iff::Friend));
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage, strum_macros::EnumString,
)]
pub enum Iff {
    /// Friendly target
    #[strum(serialize = "А", serialize = "A", detailed_message = "Friend")]
    Friend,

    /// Hostile target
    #[strum(serialize = "П", serialize = "P", detailed_message = "Foe")]
    Foe,

    /// No identification
    #[strum(serialize = "", detailed_message = "Unknown")]
    Unknown,
}

impl Iff {
    /// Parse from the one-character wire code
    pub fn from<S>(code: S) -> Self
    where
        S: AsRef<str>,
    {
        str::parse(code.as_ref()).unwrap_or_default()
    }

    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Wire code of this flag
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl Default for Iff {
    fn default() -> Self {
        Iff::Unknown
    }
}

impl From<&str> for Iff {
    fn from(code: &str) -> Iff {
        Iff::from(code)
    }
}

impl fmt::Display for Iff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}
