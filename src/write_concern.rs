//! The write concern option.
use common::{Acknowledgment, WriteConcern};
use error::Result;
use options::UniqueOption;
use properties::MongoDbProperties;
use reader::{self, ConfigurationPropertyReader, EnumProperty, PropertyType};

use std::fmt;

/// The write concern applied when none is configured.
pub const DEFAULT_WRITE_CONCERN: WriteConcernType = WriteConcernType::Acknowledged;

/// Configurable write acknowledgment levels.
///
/// Configuration properties match literals case-insensitively, while serde only accepts the exact
/// upper-case literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteConcernType {
    /// Wait for the primary to acknowledge the write.
    Acknowledged,
    /// Return without waiting for acknowledgment; only network errors are reported.
    Unacknowledged,
    /// Wait for the write to reach the primary's journal.
    Journaled,
    /// Wait for the primary to flush data files to disk.
    Fsynced,
    /// Wait for acknowledgment from two members.
    ReplicaAcknowledged,
    /// Wait for acknowledgment from a majority of voting members.
    Majority,
}

impl WriteConcernType {
    pub fn write_concern(&self) -> WriteConcern {
        let mut wc = WriteConcern::new();
        match *self {
            WriteConcernType::Acknowledged => (),
            WriteConcernType::Unacknowledged => wc.w = Acknowledgment::Nodes(0),
            WriteConcernType::Journaled => wc.j = true,
            WriteConcernType::Fsynced => wc.fsync = true,
            WriteConcernType::ReplicaAcknowledged => wc.w = Acknowledgment::Nodes(2),
            WriteConcernType::Majority => wc.w = Acknowledgment::Majority,
        }
        wc
    }
}

impl EnumProperty for WriteConcernType {
    const LITERALS: &'static [(&'static str, WriteConcernType)] =
        &[("ACKNOWLEDGED", WriteConcernType::Acknowledged),
          ("UNACKNOWLEDGED", WriteConcernType::Unacknowledged),
          ("JOURNALED", WriteConcernType::Journaled),
          ("FSYNCED", WriteConcernType::Fsynced),
          ("REPLICA_ACKNOWLEDGED", WriteConcernType::ReplicaAcknowledged),
          ("MAJORITY", WriteConcernType::Majority)];
}

impl PropertyType for WriteConcernType {
    fn parse_property(property: &str, value: &str) -> Result<Self> {
        reader::parse_enum(property, value)
    }
}

impl fmt::Display for WriteConcernType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.literal())
    }
}

/// Option for specifying the `WriteConcern` used by the datastore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteConcernOption;

impl UniqueOption for WriteConcernOption {
    type Value = WriteConcern;

    fn default_value(&self, reader: &ConfigurationPropertyReader) -> Result<WriteConcern> {
        let wc = reader
            .property::<WriteConcernType>(MongoDbProperties::WRITE_CONCERN)
            .with_default(DEFAULT_WRITE_CONCERN)
            .get_value()?;
        Ok(wc.write_concern())
    }
}
