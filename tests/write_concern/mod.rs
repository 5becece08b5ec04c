use ogm_mongodb::{Acknowledgment, ConfigurationPropertyReader, EnumProperty, Error,
                  MongoDbProperties, UniqueOption, WriteConcern, WriteConcernOption,
                  WriteConcernType};

use bson::Bson;
use std::collections::BTreeMap;

use properties;

fn resolve(config: &BTreeMap<String, String>) -> Result<WriteConcern, Error> {
    let reader = ConfigurationPropertyReader::new(config);
    WriteConcernOption.default_value(&reader)
}

fn resolve_literal(literal: &str) -> WriteConcern {
    let config = properties(&[(MongoDbProperties::WRITE_CONCERN, literal)]);
    resolve(&config).expect("Failed to resolve write concern.")
}

#[test]
fn defaults_to_acknowledged() {
    let wc = resolve(&BTreeMap::new()).expect("Failed to resolve write concern.");
    assert_eq!(WriteConcern::new(), wc);
    assert_eq!(Acknowledgment::Nodes(1), wc.w);
}

#[test]
fn mapping() {
    let unack = resolve_literal("UNACKNOWLEDGED");
    assert_eq!(Acknowledgment::Nodes(0), unack.w);
    assert!(!unack.j && !unack.fsync);

    let journaled = resolve_literal("journaled");
    assert_eq!(Acknowledgment::Nodes(1), journaled.w);
    assert!(journaled.j);
    assert!(!journaled.fsync);

    let fsynced = resolve_literal("FSYNCED");
    assert!(fsynced.fsync);
    assert!(!fsynced.j);

    assert_eq!(Acknowledgment::Nodes(2), resolve_literal("REPLICA_ACKNOWLEDGED").w);
    assert_eq!(Acknowledgment::Majority, resolve_literal("MAJORITY").w);

    for literal in &["ACKNOWLEDGED", "UNACKNOWLEDGED", "JOURNALED", "FSYNCED",
                     "REPLICA_ACKNOWLEDGED", "MAJORITY"] {
        assert_eq!(0, resolve_literal(literal).w_timeout);
    }
}

#[test]
fn unknown_literal() {
    let config = properties(&[(MongoDbProperties::WRITE_CONCERN, "SAFE")]);
    match resolve(&config) {
        Err(Error::UnknownEnumValue { ref value, .. }) => assert_eq!("SAFE", value),
        other => panic!("Expected unknown enum value error, got {:?}", other),
    }
}

#[test]
fn write_concern_document() {
    let doc = WriteConcernType::Majority.write_concern().to_bson();
    assert_eq!(Some(&Bson::String("majority".to_owned())), doc.get("w"));
    assert_eq!(Some(&Bson::I32(0)), doc.get("wtimeout"));
    assert_eq!(Some(&Bson::Boolean(false)), doc.get("j"));
    assert!(doc.get("fsync").is_none());

    let doc = WriteConcernType::Fsynced.write_concern().to_bson();
    assert_eq!(Some(&Bson::I32(1)), doc.get("w"));
    assert_eq!(Some(&Bson::Boolean(true)), doc.get("fsync"));
}

#[test]
fn literals_cover_every_type() {
    assert_eq!(6, WriteConcernType::LITERALS.len());
    for &(literal, t) in WriteConcernType::LITERALS {
        assert_eq!(literal, t.literal());
        assert_eq!(literal, t.to_string());
        assert_eq!(t.write_concern(), resolve_literal(literal));
    }
}
