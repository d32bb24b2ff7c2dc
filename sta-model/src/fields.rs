//! Canonical field-name tags.
//!
//! These are the names emitted in change sets and matched by notification
//! topic filters. Kept as plain constants: the table has no lifecycle and
//! no reason to be an object.
//!
//! Composite windows (phenomenon/result time start+end pairs) collapse to a
//! single tag here; the differ never reports the halves separately.

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const ENCODING_TYPE: &str = "encodingType";
pub const LOCATION: &str = "location";
pub const PHENOMENON_TIME: &str = "phenomenonTime";
pub const RESULT_TIME: &str = "resultTime";
pub const VALID_TIME: &str = "validTime";
pub const UNIT_OF_MEASUREMENT: &str = "unitOfMeasurement";
pub const OBSERVATION_TYPE: &str = "observationType";
pub const OBSERVED_AREA: &str = "observedArea";
pub const TIME: &str = "time";
pub const FEATURE: &str = "feature";
pub const DEFINITION: &str = "definition";
pub const METADATA: &str = "metadata";
pub const PROPERTIES: &str = "properties";
