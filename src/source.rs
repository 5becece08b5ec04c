//! Sources of raw configuration properties.
//!
//! A `PropertySource` maps property names to raw string values. Sources never interpret the
//! values they hold; conversion to typed values is left to the `ConfigurationPropertyReader`.
use error::Error::ArgumentError;
use error::Result;

use serde_json::{self, Value};

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fmt;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{BufReader, Read};
use std::path::Path;

/// A read-only lookup of raw property values by name.
pub trait PropertySource {
    /// Returns the raw value for `key`, or `None` if the source does not define it.
    fn get(&self, key: &str) -> Option<String>;
}

impl<'a, S: PropertySource + ?Sized> PropertySource for &'a S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<H: BuildHasher> PropertySource for HashMap<String, String, H> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Reads properties from process environment variables.
///
/// The property `ogm.mongodb.read_preference` is looked up as
/// `OGM_MONGODB_READ_PREFERENCE`, preceded by the optional prefix.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSource {
    prefix: String,
}

impl EnvironmentSource {
    pub fn new() -> EnvironmentSource {
        Default::default()
    }

    /// Creates a source whose variable names all start with `prefix`.
    pub fn with_prefix(prefix: &str) -> EnvironmentSource {
        EnvironmentSource { prefix: prefix.to_owned() }
    }

    /// The environment variable consulted for `key`.
    pub fn variable_name(&self, key: &str) -> String {
        let mut name = self.prefix.clone();
        for c in key.chars() {
            if c.is_ascii_alphanumeric() {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push('_');
            }
        }
        name
    }
}

impl PropertySource for EnvironmentSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(self.variable_name(key)).ok()
    }
}

/// Properties read from a JSON document.
///
/// Nested objects are flattened into dotted names, so
/// `{"ogm": {"mongodb": {"read_preference": "NEAREST"}}}` defines `ogm.mongodb.read_preference`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonSource {
    properties: BTreeMap<String, String>,
}

impl JsonSource {
    pub fn parse(json: &str) -> Result<JsonSource> {
        let value: Value = serde_json::from_str(json)?;
        JsonSource::from_value(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<JsonSource> {
        let value: Value = serde_json::from_reader(reader)?;
        JsonSource::from_value(value)
    }

    /// Reads the JSON document stored at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<JsonSource> {
        let file = File::open(path)?;
        JsonSource::from_reader(BufReader::new(file))
    }

    pub fn from_value(value: Value) -> Result<JsonSource> {
        let mut properties = BTreeMap::new();
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    flatten(key, value, &mut properties)?;
                }
            }
            _ => return Err(ArgumentError("Property document must be a JSON object.".to_owned())),
        }
        Ok(JsonSource { properties: properties })
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

// Nested and dotted spellings of one name may not both appear.
fn insert_unique(name: String, value: String, out: &mut BTreeMap<String, String>) -> Result<()> {
    if out.contains_key(&name) {
        return Err(ArgumentError(format!("Property '{}' is defined more than once.", name)));
    }
    out.insert(name, value);
    Ok(())
}

fn flatten(name: String, value: Value, out: &mut BTreeMap<String, String>) -> Result<()> {
    match value {
        Value::Null => (),
        Value::Bool(b) => insert_unique(name, b.to_string(), out)?,
        Value::Number(n) => insert_unique(name, n.to_string(), out)?,
        Value::String(s) => insert_unique(name, s, out)?,
        Value::Array(_) => {
            return Err(ArgumentError(format!("Property '{}' must not be an array.", name)));
        }
        Value::Object(map) => {
            for (key, value) in map {
                flatten(format!("{}.{}", name, key), value, out)?;
            }
        }
    }
    Ok(())
}

impl PropertySource for JsonSource {
    fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

/// An ordered stack of sources. The first layer that defines a key wins.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn PropertySource + Send + Sync>>,
}

impl LayeredSource {
    pub fn new() -> LayeredSource {
        Default::default()
    }

    /// Adds a layer below all existing layers.
    pub fn push<S>(mut self, source: S) -> LayeredSource
        where S: PropertySource + Send + Sync + 'static
    {
        self.layers.push(Box::new(source));
        self
    }

    /// Adds a layer above all existing layers.
    pub fn with_overrides<S>(mut self, source: S) -> LayeredSource
        where S: PropertySource + Send + Sync + 'static
    {
        self.layers.insert(0, Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl fmt::Debug for LayeredSource {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("LayeredSource")
            .field("len", &self.layers.len())
            .finish()
    }
}

impl PropertySource for LayeredSource {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().filter_map(|layer| layer.get(key)).next()
    }
}
