//! Typed options for the MongoDB datastore of an object/grid mapper.
//!
//! Options are resolved from layered configuration. Each option reads its property through a
//! `ConfigurationPropertyReader`, falls back to a documented default when the property is unset,
//! and converts the configured literal into the driver-level value it stands for.
//!
//! ```no_run
//! # extern crate ogm_mongodb;
//! use ogm_mongodb::{ConfigurationPropertyReader, EnvironmentSource, JsonSource, LayeredSource};
//! use ogm_mongodb::{OptionsContainer, OptionsContext, ReadPreferenceOption};
//!
//! # fn main() {
//! let properties = LayeredSource::new()
//!     .push(EnvironmentSource::new())
//!     .push(JsonSource::parse(r#"{ "ogm.mongodb.read_preference": "NEAREST" }"#).unwrap());
//! let reader = ConfigurationPropertyReader::new(&properties);
//!
//! let global = OptionsContainer::new();
//! let context = OptionsContext::new().with_global(&global);
//! let read_preference = context.get_unique(&ReadPreferenceOption, &reader).unwrap();
//! println!("{}", read_preference.mode);
//! # }
//! ```
extern crate bson;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub mod common;
pub mod error;
pub mod options;
pub mod properties;
pub mod read_preference;
pub mod reader;
pub mod source;
pub mod write_concern;

pub use common::{Acknowledgment, ReadMode, ReadPreference, WriteConcern};
pub use error::{Error, Result};
pub use options::{OptionsContainer, OptionsContext, UniqueOption};
pub use properties::MongoDbProperties;
pub use read_preference::{ReadPreferenceOption, ReadPreferenceType, DEFAULT_READ_PREFERENCE};
pub use reader::{ConfigurationPropertyReader, EnumProperty, PropertyType};
pub use source::{EnvironmentSource, JsonSource, LayeredSource, PropertySource};
pub use write_concern::{WriteConcernOption, WriteConcernType, DEFAULT_WRITE_CONCERN};
