use ogm_mongodb::{Acknowledgment, ConfigurationPropertyReader, MongoDbProperties, OptionsContainer,
                  OptionsContext, ReadMode, ReadPreferenceOption, ReadPreferenceType,
                  WriteConcernOption, WriteConcernType};

use properties;

#[test]
fn container_set_and_get() {
    let mut options = OptionsContainer::new();
    assert!(options.is_empty());
    assert!(options.get::<ReadPreferenceOption>().is_none());

    options.set::<ReadPreferenceOption>(ReadPreferenceType::Secondary.read_preference());
    options.set::<ReadPreferenceOption>(ReadPreferenceType::Nearest.read_preference());
    assert_eq!(1, options.len());
    assert!(options.contains::<ReadPreferenceOption>());
    assert!(!options.contains::<WriteConcernOption>());
    assert_eq!(ReadMode::Nearest, options.get::<ReadPreferenceOption>().unwrap().mode);

    let removed = options.remove::<ReadPreferenceOption>().unwrap();
    assert_eq!(ReadMode::Nearest, removed.mode);
    assert!(options.is_empty());
}

#[test]
fn container_merge() {
    let mut base = OptionsContainer::new();
    base.set::<ReadPreferenceOption>(ReadPreferenceType::Secondary.read_preference());
    base.set::<WriteConcernOption>(WriteConcernType::Journaled.write_concern());

    let mut other = OptionsContainer::new();
    other.set::<ReadPreferenceOption>(ReadPreferenceType::PrimaryPreferred.read_preference());

    base.merge(other);
    assert_eq!(2, base.len());
    assert_eq!(ReadMode::PrimaryPreferred, base.get::<ReadPreferenceOption>().unwrap().mode);
    assert!(base.get::<WriteConcernOption>().unwrap().j);
}

#[test]
fn context_falls_back_to_configuration() {
    let config = properties(&[(MongoDbProperties::READ_PREFERENCE, "SECONDARY_PREFERRED")]);
    let reader = ConfigurationPropertyReader::new(&config);

    let global = OptionsContainer::new();
    let context = OptionsContext::new().with_global(&global);

    let rp = context.get_unique(&ReadPreferenceOption, &reader).unwrap();
    assert_eq!(ReadMode::SecondaryPreferred, rp.mode);

    let wc = context.get_unique(&WriteConcernOption, &reader).unwrap();
    assert_eq!(Acknowledgment::Nodes(1), wc.w);
}

#[test]
fn context_precedence() {
    let config = properties(&[(MongoDbProperties::READ_PREFERENCE, "SECONDARY"),
                              (MongoDbProperties::WRITE_CONCERN, "UNACKNOWLEDGED")]);
    let reader = ConfigurationPropertyReader::new(&config);

    let mut global = OptionsContainer::new();
    global.set::<ReadPreferenceOption>(ReadPreferenceType::PrimaryPreferred.read_preference());

    let mut entity = OptionsContainer::new();
    entity.set::<ReadPreferenceOption>(ReadPreferenceType::Nearest.read_preference());
    entity.set::<WriteConcernOption>(WriteConcernType::Majority.write_concern());

    let mut property = OptionsContainer::new();
    property.set::<WriteConcernOption>(WriteConcernType::Fsynced.write_concern());

    let global_only = OptionsContext::new().with_global(&global);
    assert_eq!(ReadMode::PrimaryPreferred,
               global_only.get_unique(&ReadPreferenceOption, &reader).unwrap().mode);
    assert_eq!(Acknowledgment::Nodes(0),
               global_only.get_unique(&WriteConcernOption, &reader).unwrap().w);

    let entity_context = global_only.with_entity(&entity);
    assert_eq!(ReadMode::Nearest,
               entity_context.get_unique(&ReadPreferenceOption, &reader).unwrap().mode);
    assert_eq!(Acknowledgment::Majority,
               entity_context.get_unique(&WriteConcernOption, &reader).unwrap().w);

    let property_context = entity_context.with_property(&property);
    assert_eq!(ReadMode::Nearest,
               property_context.get_unique(&ReadPreferenceOption, &reader).unwrap().mode);
    assert!(property_context.get_unique(&WriteConcernOption, &reader).unwrap().fsync);
}

#[test]
fn configured_errors_surface_only_without_explicit_values() {
    let config = properties(&[(MongoDbProperties::READ_PREFERENCE, "FASTEST")]);
    let reader = ConfigurationPropertyReader::new(&config);

    let empty = OptionsContext::new();
    assert!(empty.get_unique(&ReadPreferenceOption, &reader).is_err());

    let mut global = OptionsContainer::new();
    global.set::<ReadPreferenceOption>(ReadPreferenceType::Primary.read_preference());
    let context = OptionsContext::new().with_global(&global);
    assert_eq!(ReadMode::Primary,
               context.get_unique(&ReadPreferenceOption, &reader).unwrap().mode);
}
