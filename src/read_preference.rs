//! The read preference option.
use common::{ReadMode, ReadPreference};
use error::Result;
use options::UniqueOption;
use properties::MongoDbProperties;
use reader::{self, ConfigurationPropertyReader, EnumProperty, PropertyType};

use std::fmt;

/// The read preference applied when none is configured.
pub const DEFAULT_READ_PREFERENCE: ReadPreferenceType = ReadPreferenceType::Primary;

/// Configurable read preference modes.
///
/// See the [MongoDB manual](http://docs.mongodb.org/manual/core/read-preference/).
///
/// Configuration properties match literals case-insensitively, while serde only accepts the exact
/// upper-case literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadPreferenceType {
    Primary,
    PrimaryPreferred,
    Secondary,
    SecondaryPreferred,
    Nearest,
}

impl ReadPreferenceType {
    /// The driver read preference for this mode, without tag sets.
    pub fn read_preference(&self) -> ReadPreference {
        ReadPreference::new(self.read_mode(), None)
    }

    pub fn read_mode(&self) -> ReadMode {
        match *self {
            ReadPreferenceType::Primary => ReadMode::Primary,
            ReadPreferenceType::PrimaryPreferred => ReadMode::PrimaryPreferred,
            ReadPreferenceType::Secondary => ReadMode::Secondary,
            ReadPreferenceType::SecondaryPreferred => ReadMode::SecondaryPreferred,
            ReadPreferenceType::Nearest => ReadMode::Nearest,
        }
    }
}

impl EnumProperty for ReadPreferenceType {
    const LITERALS: &'static [(&'static str, ReadPreferenceType)] =
        &[("PRIMARY", ReadPreferenceType::Primary),
          ("PRIMARY_PREFERRED", ReadPreferenceType::PrimaryPreferred),
          ("SECONDARY", ReadPreferenceType::Secondary),
          ("SECONDARY_PREFERRED", ReadPreferenceType::SecondaryPreferred),
          ("NEAREST", ReadPreferenceType::Nearest)];
}

impl PropertyType for ReadPreferenceType {
    fn parse_property(property: &str, value: &str) -> Result<Self> {
        reader::parse_enum(property, value)
    }
}

impl fmt::Display for ReadPreferenceType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.literal())
    }
}

impl From<ReadPreferenceType> for ReadPreference {
    fn from(rp: ReadPreferenceType) -> ReadPreference {
        rp.read_preference()
    }
}

/// Option for specifying the `ReadPreference` used by the datastore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadPreferenceOption;

impl UniqueOption for ReadPreferenceOption {
    type Value = ReadPreference;

    fn default_value(&self, reader: &ConfigurationPropertyReader) -> Result<ReadPreference> {
        let rp = reader
            .property::<ReadPreferenceType>(MongoDbProperties::READ_PREFERENCE)
            .with_default(DEFAULT_READ_PREFERENCE)
            .get_value()?;
        Ok(rp.read_preference())
    }
}
