//! Well-known configuration property names of the MongoDB datastore.

/// Property keys understood by the MongoDB datastore options.
pub struct MongoDbProperties;

impl MongoDbProperties {
    /// The read preference to apply to queries. Accepts the literals of
    /// `ReadPreferenceType`; defaults to `PRIMARY`.
    pub const READ_PREFERENCE: &'static str = "ogm.mongodb.read_preference";

    /// The write concern to apply to writes. Accepts the literals of
    /// `WriteConcernType`; defaults to `ACKNOWLEDGED`.
    pub const WRITE_CONCERN: &'static str = "ogm.mongodb.write_concern";
}
