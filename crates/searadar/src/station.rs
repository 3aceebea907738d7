//! Station type descriptor

use crate::converter::Mr231Converter;

/// Descriptor for an MR-231-3 radar station
///
/// The station/device layer holds one of these per configured radar
/// and asks it for a converter bound to the vendor dialect. Device
/// discovery, transport, and message routing stay with the caller;
/// this type is the single entry point the decoder core exposes.
///
/// ```
/// use searadar::Mr231StationType;
///
/// let station = Mr231StationType::new();
/// assert_eq!("MR-231-3", station.model());
///
/// let converter = station.create_converter();
/// let messages = converter.convert("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33");
/// assert_eq!(1, messages.unwrap().len());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mr231StationType {}

impl Mr231StationType {
    pub fn new() -> Self {
        Mr231StationType {}
    }

    /// Vendor model designation of this dialect
    pub fn model(&self) -> &'static str {
        "MR-231-3"
    }

    /// Create a converter for this station's dialect
    pub fn create_converter(&self) -> Mr231Converter {
        Mr231Converter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory() {
        let station = Mr231StationType::new();
        assert_eq!("MR-231-3", station.model());
        assert_eq!(Mr231Converter::new(), station.create_converter());
    }
}
