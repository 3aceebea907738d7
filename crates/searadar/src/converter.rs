//! Sentence-to-message conversion

use log::warn;

use crate::message::{
    Iff, InvalidMessage, RadarSystemDataMessage, StationMessage, TargetStatus, TargetType,
    TrackedTargetMessage,
};
use crate::schema::{self, map_fields};
use crate::sentence::{Sentence, SentenceError};

/// Tracked target report
const TYPE_TRACKED_TARGET: &str = "TTM";

/// Radar system data report
const TYPE_RADAR_SYSTEM_DATA: &str = "RSD";

// map_fields() has already admitted every value read here
const SCHEMA_PANIC: &str = "field schema admitted a mismatched value";

/// Converter for the MR-231-3 sentence dialect
///
/// A pure, stateless transform from one raw sentence string to a
/// sequence of [`StationMessage`]s. The sequence allows for future
/// multi-message sentences; today it always has length 1. Instances
/// carry no state between calls and may be shared freely across
/// threads.
///
/// Obtained from
/// [`Mr231StationType::create_converter`](crate::Mr231StationType::create_converter).
///
/// ```
/// use searadar::{Mr231Converter, StationMessage};
///
/// let converter = Mr231Converter::new();
/// let messages = converter
///     .convert("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33")?;
///
/// match &messages[0] {
///     StationMessage::RadarSystemData(rsd) => assert_eq!(96.0, rsd.distance_scale),
///     other => panic!("unexpected message {}", other),
/// }
/// # Ok::<(), searadar::SentenceError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mr231Converter {}

impl Mr231Converter {
    pub fn new() -> Self {
        Mr231Converter {}
    }

    /// Convert one raw sentence into station messages
    ///
    /// Three outcomes, never conflated:
    ///
    /// 1. A well-formed sentence with valid field content decodes
    ///    into one typed message.
    /// 2. A well-formed sentence whose field content violates a
    ///    domain rule, or whose type code is unrecognized, decodes
    ///    into one [`StationMessage::Invalid`] carrying the
    ///    diagnostic.
    /// 3. A sentence whose header or frame is malformed fails the
    ///    whole call with a [`SentenceError`]. This is fatal for the
    ///    offending input; retry policy belongs to the caller.
    ///
    /// A stated checksum is verified advisorily and logged on
    /// mismatch, but never rejects the sentence.
    pub fn convert(&self, raw: &str) -> Result<Vec<StationMessage>, SentenceError> {
        let sentence = Sentence::new(raw)?;

        if sentence.checksum_ok() == Some(false) {
            warn!(
                "{}{} sentence failed checksum verification; decoding anyway",
                sentence.talker(),
                sentence.type_code()
            );
        }

        let message = match sentence.type_code() {
            TYPE_TRACKED_TARGET => decode_tracked_target(&sentence),
            TYPE_RADAR_SYSTEM_DATA => decode_radar_system_data(&sentence),
            unknown => {
                InvalidMessage::new(format!("Unknown sentence type: {}", unknown)).into()
            }
        };

        Ok(vec![message])
    }
}

fn decode_tracked_target(sentence: &Sentence) -> StationMessage {
    let values = match map_fields(TYPE_TRACKED_TARGET, schema::TTM_FIELDS, sentence.fields()) {
        Ok(values) => values,
        Err(info) => return InvalidMessage::new(info).into(),
    };

    TrackedTargetMessage {
        target_number: values[schema::TTM_TARGET_NUMBER]
            .integer()
            .expect(SCHEMA_PANIC),
        distance: values[schema::TTM_DISTANCE].number().expect(SCHEMA_PANIC),
        bearing: values[schema::TTM_BEARING].number().expect(SCHEMA_PANIC),
        bearing_reference: values[schema::TTM_BEARING_REFERENCE].flag(),
        speed: values[schema::TTM_SPEED].number().expect(SCHEMA_PANIC),
        course: values[schema::TTM_COURSE].number().expect(SCHEMA_PANIC),
        course_reference: values[schema::TTM_COURSE_REFERENCE].flag(),
        distance_cpa: values[schema::TTM_DISTANCE_CPA].number(),
        time_cpa: values[schema::TTM_TIME_CPA].number(),
        units: values[schema::TTM_UNITS].flag(),
        name: values[schema::TTM_NAME].text().to_owned(),
        status: TargetStatus::from(values[schema::TTM_STATUS].text()),
        reference_target: values[schema::TTM_REFERENCE_TARGET].flag(),
        time: values[schema::TTM_TIME].text().to_owned(),
        target_type: TargetType::default(),
        iff: Iff::from(values[schema::TTM_IFF].text()),
    }
    .into()
}

fn decode_radar_system_data(sentence: &Sentence) -> StationMessage {
    let values = match map_fields(
        TYPE_RADAR_SYSTEM_DATA,
        schema::RSD_FIELDS,
        sentence.fields(),
    ) {
        Ok(values) => values,
        Err(info) => return InvalidMessage::new(info).into(),
    };

    RadarSystemDataMessage {
        initial_distance: values[schema::RSD_INITIAL_DISTANCE]
            .number()
            .expect(SCHEMA_PANIC),
        initial_bearing: values[schema::RSD_INITIAL_BEARING]
            .number()
            .expect(SCHEMA_PANIC),
        moving_circle_of_distance: values[schema::RSD_MOVING_CIRCLE]
            .number()
            .expect(SCHEMA_PANIC),
        bearing: values[schema::RSD_BEARING].number().expect(SCHEMA_PANIC),
        distance_from_ship: values[schema::RSD_DISTANCE_FROM_SHIP]
            .number()
            .expect(SCHEMA_PANIC),
        bearing2: values[schema::RSD_BEARING2].number().expect(SCHEMA_PANIC),
        distance_scale: values[schema::RSD_DISTANCE_SCALE]
            .number()
            .expect(SCHEMA_PANIC),
        distance_unit: values[schema::RSD_DISTANCE_UNIT].flag().expect(SCHEMA_PANIC),
        display_orientation: values[schema::RSD_DISPLAY_ORIENTATION]
            .flag()
            .expect(SCHEMA_PANIC),
        working_mode: values[schema::RSD_WORKING_MODE].flag().expect(SCHEMA_PANIC),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_approx_eq::assert_approx_eq;

    const CORRECT_TTM: &str =
        "$RATTM,23,13.88,137.2,T,63.8,094.3,T,9.2,79.4,N,b,T,,783344,А*42";
    const CORRECT_RSD: &str = "$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33";
    const WRONG_SCALE_RSD: &str = "$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,95.0,N,N,S*33";
    const INCORRECT: &str = "RAR";

    #[test]
    fn test_correct_tracked_target() {
        let converter = Mr231Converter::new();
        let messages = converter.convert(CORRECT_TTM).expect("convert");
        assert_eq!(1, messages.len());

        let ttm = match &messages[0] {
            StationMessage::TrackedTarget(ttm) => ttm,
            other => panic!("expected tracked target, got {:?}", other),
        };

        assert_eq!(23, ttm.target_number);
        assert_approx_eq!(13.88, ttm.distance);
        assert_approx_eq!(137.2, ttm.bearing);
        assert_approx_eq!(94.3, ttm.course);
        assert_approx_eq!(63.8, ttm.speed);
        assert_eq!(TargetType::Unknown, ttm.target_type);
        assert_eq!(TargetStatus::Tracked, ttm.status);
        assert_eq!(Iff::Friend, ttm.iff);

        // passthrough fields
        assert_eq!(Some('T'), ttm.bearing_reference);
        assert_eq!(Some('T'), ttm.course_reference);
        assert_eq!(Some(9.2), ttm.distance_cpa);
        assert_eq!(Some(79.4), ttm.time_cpa);
        assert_eq!(Some('N'), ttm.units);
        assert_eq!("b", ttm.name);
        assert_eq!(None, ttm.reference_target);
        assert_eq!("783344", ttm.time);
    }

    #[test]
    fn test_correct_radar_system_data() {
        let converter = Mr231Converter::new();
        let messages = converter.convert(CORRECT_RSD).expect("convert");
        assert_eq!(1, messages.len());

        let rsd = match &messages[0] {
            StationMessage::RadarSystemData(rsd) => rsd,
            other => panic!("expected radar system data, got {:?}", other),
        };

        assert_approx_eq!(36.5, rsd.initial_distance);
        assert_approx_eq!(331.4, rsd.initial_bearing);
        assert_approx_eq!(8.4, rsd.moving_circle_of_distance);
        assert_approx_eq!(320.6, rsd.bearing);
        assert_approx_eq!(11.6, rsd.distance_from_ship);
        assert_approx_eq!(185.3, rsd.bearing2);
        assert_approx_eq!(96.0, rsd.distance_scale);
        assert_eq!('N', rsd.distance_unit);
        assert_eq!('N', rsd.display_orientation);
        assert_eq!('S', rsd.working_mode);
    }

    #[test]
    fn test_wrong_distance_scale() {
        let converter = Mr231Converter::new();
        let messages = converter.convert(WRONG_SCALE_RSD).expect("convert");
        assert_eq!(1, messages.len());

        match &messages[0] {
            StationMessage::Invalid(invalid) => assert_eq!(
                "RSD message. Wrong distance scale value: 95.0",
                invalid.info()
            ),
            other => panic!("expected invalid message, got {:?}", other),
        }
    }

    #[test]
    fn test_structural_failure() {
        let converter = Mr231Converter::new();
        assert_eq!(
            Some(SentenceError::TooShort),
            converter.convert(INCORRECT).err()
        );
        assert_eq!(
            Some(SentenceError::Malformed),
            converter.convert("$RATTM23,13.88").err()
        );
    }

    #[test]
    fn test_unknown_type_code() {
        let converter = Mr231Converter::new();
        let messages = converter
            .convert("$RAGLL,4916.45,N,12311.12,W*71")
            .expect("convert");

        match &messages[0] {
            StationMessage::Invalid(invalid) => {
                assert_eq!("Unknown sentence type: GLL", invalid.info())
            }
            other => panic!("expected invalid message, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_numeric_field() {
        let converter = Mr231Converter::new();
        let messages = converter
            .convert("$RATTM,23,13.88,361.0,T,63.8,094.3,T,9.2,79.4,N,b,T,,783344,А*42")
            .expect("convert");

        match &messages[0] {
            StationMessage::Invalid(invalid) => {
                assert_eq!("TTM message. Wrong bearing value: 361.0", invalid.info())
            }
            other => panic!("expected invalid message, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let converter = Mr231Converter::new();
        let messages = converter.convert("$RATTM,23,13.88").expect("convert");

        match &messages[0] {
            StationMessage::Invalid(invalid) => {
                assert_eq!("TTM message. Missing bearing value", invalid.info())
            }
            other => panic!("expected invalid message, got {:?}", other),
        }
    }

    #[test]
    fn test_status_fallback() {
        // unrecognized status code decodes, with Unknown status
        let converter = Mr231Converter::new();
        let messages = converter
            .convert("$RATTM,23,13.88,137.2,T,63.8,094.3,T,9.2,79.4,N,b,X,,783344,Z*42")
            .expect("convert");

        match &messages[0] {
            StationMessage::TrackedTarget(ttm) => {
                assert_eq!(TargetStatus::Unknown, ttm.status);
                assert_eq!(Iff::Unknown, ttm.iff);
            }
            other => panic!("expected tracked target, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let converter = Mr231Converter::new();
        let first = converter.convert(CORRECT_TTM).expect("convert");
        let second = converter.convert(CORRECT_TTM).expect("convert");
        assert_eq!(first, second);
    }
}
