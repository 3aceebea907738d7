//! Positional field schemas for the supported sentence types
//!
//! Each sentence type is described by a declarative table of
//! [`FieldSpec`] entries, one per comma-separated position. The
//! mapper walks the table, converts every raw field string to its
//! declared kind, and stops at the first domain-rule violation with
//! a diagnostic naming the offending field and value. Adding another
//! sentence type to the dialect means writing another table, not
//! another hand-rolled parser.

/// Legal MR-231-3 range scale values, in nautical miles
///
/// A radar system data sentence whose distance scale is not in this
/// set decodes as an invalid message, not as data.
pub const DISTANCE_SCALES: [f64; 11] = [
    0.125, 0.25, 0.5, 0.75, 1.5, 3.0, 6.0, 12.0, 24.0, 48.0, 96.0,
];

/// Conversion and validation rule for one positional field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// Non-negative integer
    Integer,
    /// Any finite float
    Number,
    /// Finite float, zero or greater
    NonNegative,
    /// Finite float in `[0, 360)`
    Degrees,
    /// Finite float restricted to [`DISTANCE_SCALES`]
    Scale,
    /// Single categorical character, passed through verbatim
    Flag,
    /// Free-form text, passed through verbatim
    Text,
}

/// One entry of a sentence schema
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldSpec {
    /// Field name as it appears in diagnostics
    pub name: &'static str,
    pub kind: FieldKind,
    /// Required fields may not be empty or absent
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            kind,
            required: false,
        }
    }
}

/// A raw field converted to its declared kind
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FieldValue<'a> {
    Integer(u32),
    Number(f64),
    Flag(char),
    Text(&'a str),
    /// Field not provided (empty string or absent position)
    Empty,
}

impl<'a> FieldValue<'a> {
    pub fn integer(&self) -> Option<u32> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn flag(&self) -> Option<char> {
        match self {
            FieldValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Text content; empty for anything but a text field
    pub fn text(&self) -> &'a str {
        match self {
            FieldValue::Text(value) => *value,
            _ => "",
        }
    }
}

/// Tracked target (`TTM`) positional schema
pub(crate) static TTM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("target number", FieldKind::Integer),
    FieldSpec::required("distance", FieldKind::NonNegative),
    FieldSpec::required("bearing", FieldKind::Degrees),
    FieldSpec::optional("bearing reference", FieldKind::Flag),
    FieldSpec::required("speed", FieldKind::NonNegative),
    FieldSpec::required("course", FieldKind::Degrees),
    FieldSpec::optional("course reference", FieldKind::Flag),
    FieldSpec::optional("distance of closest point", FieldKind::Number),
    FieldSpec::optional("time to closest point", FieldKind::Number),
    FieldSpec::optional("units", FieldKind::Flag),
    FieldSpec::optional("target name", FieldKind::Text),
    FieldSpec::optional("target status", FieldKind::Text),
    FieldSpec::optional("reference target", FieldKind::Flag),
    FieldSpec::optional("time", FieldKind::Text),
    FieldSpec::optional("IFF", FieldKind::Text),
];

pub(crate) const TTM_TARGET_NUMBER: usize = 0;
pub(crate) const TTM_DISTANCE: usize = 1;
pub(crate) const TTM_BEARING: usize = 2;
pub(crate) const TTM_BEARING_REFERENCE: usize = 3;
pub(crate) const TTM_SPEED: usize = 4;
pub(crate) const TTM_COURSE: usize = 5;
pub(crate) const TTM_COURSE_REFERENCE: usize = 6;
pub(crate) const TTM_DISTANCE_CPA: usize = 7;
pub(crate) const TTM_TIME_CPA: usize = 8;
pub(crate) const TTM_UNITS: usize = 9;
pub(crate) const TTM_NAME: usize = 10;
pub(crate) const TTM_STATUS: usize = 11;
pub(crate) const TTM_REFERENCE_TARGET: usize = 12;
pub(crate) const TTM_TIME: usize = 13;
pub(crate) const TTM_IFF: usize = 14;

/// Radar system data (`RSD`) positional schema
///
/// Positions 4 through 7 are present on the wire but carry nothing
/// in this dialect.
pub(crate) static RSD_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("initial distance", FieldKind::Number),
    FieldSpec::required("initial bearing", FieldKind::Number),
    FieldSpec::required("moving circle of distance", FieldKind::Number),
    FieldSpec::required("bearing", FieldKind::Number),
    FieldSpec::optional("reserved", FieldKind::Text),
    FieldSpec::optional("reserved", FieldKind::Text),
    FieldSpec::optional("reserved", FieldKind::Text),
    FieldSpec::optional("reserved", FieldKind::Text),
    FieldSpec::required("distance from ship", FieldKind::Number),
    FieldSpec::required("bearing 2", FieldKind::Number),
    FieldSpec::required("distance scale", FieldKind::Scale),
    FieldSpec::required("distance unit", FieldKind::Flag),
    FieldSpec::required("display orientation", FieldKind::Flag),
    FieldSpec::required("working mode", FieldKind::Flag),
];

pub(crate) const RSD_INITIAL_DISTANCE: usize = 0;
pub(crate) const RSD_INITIAL_BEARING: usize = 1;
pub(crate) const RSD_MOVING_CIRCLE: usize = 2;
pub(crate) const RSD_BEARING: usize = 3;
pub(crate) const RSD_DISTANCE_FROM_SHIP: usize = 8;
pub(crate) const RSD_BEARING2: usize = 9;
pub(crate) const RSD_DISTANCE_SCALE: usize = 10;
pub(crate) const RSD_DISTANCE_UNIT: usize = 11;
pub(crate) const RSD_DISPLAY_ORIENTATION: usize = 12;
pub(crate) const RSD_WORKING_MODE: usize = 13;

/// Map raw field strings onto a sentence schema
///
/// `label` is the sentence type as it appears in diagnostics, like
/// `"RSD"`. Returns one [`FieldValue`] per schema entry, or the
/// diagnostic for the first field that violates its rule. Positions
/// past the end of `fields` count as empty; extra fields beyond the
/// schema are ignored.
pub(crate) fn map_fields<'a>(
    label: &str,
    schema: &[FieldSpec],
    fields: &[&'a str],
) -> Result<Vec<FieldValue<'a>>, String> {
    let mut values = Vec::with_capacity(schema.len());

    for (position, spec) in schema.iter().enumerate() {
        let raw = fields.get(position).copied().unwrap_or("");
        values.push(map_one(label, spec, raw)?);
    }

    Ok(values)
}

fn map_one<'a>(label: &str, spec: &FieldSpec, raw: &'a str) -> Result<FieldValue<'a>, String> {
    if raw.is_empty() {
        if spec.required {
            return Err(format!("{} message. Missing {} value", label, spec.name));
        }
        return Ok(FieldValue::Empty);
    }

    let wrong = || format!("{} message. Wrong {} value: {}", label, spec.name, raw);

    match spec.kind {
        FieldKind::Integer => raw
            .parse::<u32>()
            .map(FieldValue::Integer)
            .map_err(|_| wrong()),
        FieldKind::Number => parse_float(raw).map(FieldValue::Number).ok_or_else(wrong),
        FieldKind::NonNegative => parse_float(raw)
            .filter(|value| *value >= 0.0)
            .map(FieldValue::Number)
            .ok_or_else(wrong),
        FieldKind::Degrees => parse_float(raw)
            .filter(|value| (0.0..360.0).contains(value))
            .map(FieldValue::Number)
            .ok_or_else(wrong),
        FieldKind::Scale => parse_float(raw)
            .filter(|value| DISTANCE_SCALES.contains(value))
            .map(FieldValue::Number)
            .ok_or_else(wrong),
        FieldKind::Flag => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(flag), None) => Ok(FieldValue::Flag(flag)),
                _ => Err(wrong()),
            }
        }
        FieldKind::Text => Ok(FieldValue::Text(raw)),
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_approx_eq::assert_approx_eq;

    /// ensure the schemas and their index constants agree
    #[test]
    fn check_schema_tables() {
        assert_eq!(15, TTM_FIELDS.len());
        assert_eq!(14, RSD_FIELDS.len());

        assert_eq!("target number", TTM_FIELDS[TTM_TARGET_NUMBER].name);
        assert_eq!("IFF", TTM_FIELDS[TTM_IFF].name);
        assert_eq!("distance scale", RSD_FIELDS[RSD_DISTANCE_SCALE].name);
        assert_eq!(FieldKind::Scale, RSD_FIELDS[RSD_DISTANCE_SCALE].kind);

        for spec in TTM_FIELDS.iter().chain(RSD_FIELDS.iter()) {
            assert!(!spec.name.is_empty());
        }

        // scales are sorted and unique
        for window in DISTANCE_SCALES.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_map_tracked_target() {
        let fields = [
            "23", "13.88", "137.2", "T", "63.8", "094.3", "T", "9.2", "79.4", "N", "b", "T", "",
            "783344", "А",
        ];
        let values = map_fields("TTM", TTM_FIELDS, &fields).expect("map");

        assert_eq!(Some(23), values[TTM_TARGET_NUMBER].integer());
        assert_approx_eq!(13.88, values[TTM_DISTANCE].number().unwrap());
        assert_approx_eq!(94.3, values[TTM_COURSE].number().unwrap());
        assert_eq!(Some('T'), values[TTM_BEARING_REFERENCE].flag());
        assert_eq!(FieldValue::Empty, values[TTM_REFERENCE_TARGET]);
        assert_eq!("783344", values[TTM_TIME].text());
        assert_eq!("А", values[TTM_IFF].text());
    }

    #[test]
    fn test_wrong_values() {
        let run = |raw: &str, position: usize| {
            let mut fields = vec![
                "23", "13.88", "137.2", "T", "63.8", "094.3", "T", "9.2", "79.4", "N", "b", "T",
                "", "783344", "А",
            ];
            fields[position] = raw;
            map_fields("TTM", TTM_FIELDS, &fields).unwrap_err()
        };

        assert_eq!(
            "TTM message. Wrong target number value: -1",
            run("-1", TTM_TARGET_NUMBER)
        );
        assert_eq!(
            "TTM message. Wrong distance value: abc",
            run("abc", TTM_DISTANCE)
        );
        assert_eq!(
            "TTM message. Wrong bearing value: 360.0",
            run("360.0", TTM_BEARING)
        );
        assert_eq!(
            "TTM message. Wrong speed value: -0.1",
            run("-0.1", TTM_SPEED)
        );
        assert_eq!(
            "TTM message. Wrong bearing reference value: TT",
            run("TT", TTM_BEARING_REFERENCE)
        );
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(
            "TTM message. Missing target number value",
            map_fields("TTM", TTM_FIELDS, &[]).unwrap_err()
        );
        assert_eq!(
            "RSD message. Missing distance from ship value",
            map_fields(
                "RSD",
                RSD_FIELDS,
                &["36.5", "331.4", "8.4", "320.6", "", "", "", "", "", "185.3"]
            )
            .unwrap_err()
        );
    }

    #[test]
    fn test_distance_scale_set() {
        fn run(scale: &str) -> Result<Vec<FieldValue<'_>>, String> {
            let fields = [
                "36.5", "331.4", "8.4", "320.6", "", "", "", "", "11.6", "185.3", scale, "N", "N",
                "S",
            ];
            map_fields("RSD", RSD_FIELDS, &fields)
        }

        for scale in ["0.125", "1.5", "96.0", "96"] {
            assert!(run(scale).is_ok(), "scale {} must be legal", scale);
        }

        assert_eq!(
            "RSD message. Wrong distance scale value: 95.0",
            run("95.0").unwrap_err()
        );
        assert_eq!(
            "RSD message. Wrong distance scale value: inf",
            run("inf").unwrap_err()
        );
    }
}
