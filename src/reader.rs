//! Typed access to configuration properties.
//!
//! ```ignore
//! let reader = ConfigurationPropertyReader::new(&properties);
//! let read_preference = reader.property::<ReadPreferenceType>(MongoDbProperties::READ_PREFERENCE)
//!     .with_default(ReadPreferenceType::Primary)
//!     .get_value()?;
//! ```
//!
//! Raw values are trimmed before conversion, and a blank value is treated as if the property
//! were not set at all. Conversion failures are reported as errors rather than silently
//! replaced by the default.
use error::{Error, Result};
use source::PropertySource;

use std::result;

/// A type that can be read from a raw property value.
pub trait PropertyType: Sized {
    fn parse_property(property: &str, value: &str) -> Result<Self>;
}

/// A closed set of named literals, matched case-insensitively.
pub trait EnumProperty: Copy + PartialEq + 'static {
    /// Every literal paired with the value it denotes. Must list every variant.
    const LITERALS: &'static [(&'static str, Self)];

    /// The canonical literal for this value.
    fn literal(&self) -> &'static str {
        Self::LITERALS
            .iter()
            .find(|&&(_, variant)| variant == *self)
            .map(|&(literal, _)| literal)
            .unwrap_or("")
    }
}

/// Parses `value` as one of `T`'s literals.
pub fn parse_enum<T: EnumProperty>(property: &str, value: &str) -> Result<T> {
    T::LITERALS
        .iter()
        .find(|&&(literal, _)| literal.eq_ignore_ascii_case(value))
        .map(|&(_, variant)| variant)
        .ok_or_else(|| {
            Error::UnknownEnumValue {
                property: property.to_owned(),
                value: value.to_owned(),
                allowed: T::LITERALS.iter().map(|&(literal, _)| literal).collect(),
            }
        })
}

impl PropertyType for String {
    fn parse_property(_: &str, value: &str) -> Result<String> {
        Ok(value.to_owned())
    }
}

impl PropertyType for bool {
    fn parse_property(property: &str, value: &str) -> Result<bool> {
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::invalid_property(property, value, "expected 'true' or 'false'"))
        }
    }
}

macro_rules! integer_property {
    ( $( $t:ty ),* ) => {
        $(
            impl PropertyType for $t {
                fn parse_property(property: &str, value: &str) -> Result<$t> {
                    value.parse::<$t>()
                        .map_err(|err| Error::invalid_property(property, value, err.to_string()))
                }
            }
        )*
    }
}

integer_property!(i32, i64, u16, u32, u64, usize);

/// Checks an explicitly configured value, returning the reason it was rejected.
pub type Validator<'a, T> = Box<dyn Fn(&T) -> result::Result<(), String> + 'a>;

/// Resolves named properties from a `PropertySource`.
#[derive(Clone, Copy)]
pub struct ConfigurationPropertyReader<'a> {
    source: &'a dyn PropertySource,
}

impl<'a> ConfigurationPropertyReader<'a> {
    pub fn new(source: &'a dyn PropertySource) -> ConfigurationPropertyReader<'a> {
        ConfigurationPropertyReader { source: source }
    }

    /// Starts reading the property `name` as a `T`.
    pub fn property<T: PropertyType>(&self, name: &str) -> PropertyReaderContext<'a, T> {
        PropertyReaderContext {
            source: self.source,
            name: name.to_owned(),
            required: false,
            validators: Vec::new(),
        }
    }

    /// The trimmed raw value of `name`, or `None` if it is unset or blank.
    pub fn raw(&self, name: &str) -> Option<String> {
        raw_value(self.source, name)
    }
}

fn raw_value(source: &dyn PropertySource, name: &str) -> Option<String> {
    source.get(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// A pending lookup of a single property.
pub struct PropertyReaderContext<'a, T> {
    source: &'a dyn PropertySource,
    name: String,
    required: bool,
    validators: Vec<Validator<'a, T>>,
}

impl<'a, T: PropertyType> PropertyReaderContext<'a, T> {
    /// Makes an unset property an error.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a check for explicitly configured values. Validators run in the order they were
    /// added; the first rejection is reported.
    pub fn with_validator<F>(mut self, validator: F) -> Self
        where F: Fn(&T) -> result::Result<(), String> + 'a
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Supplies the value to use when the property is unset. A default satisfies `required`.
    pub fn with_default(self, default: T) -> DefaultedPropertyReaderContext<'a, T> {
        DefaultedPropertyReaderContext {
            context: self,
            default: default,
        }
    }

    pub fn get_value(self) -> Result<Option<T>> {
        match self.resolve()? {
            Some(value) => Ok(Some(value)),
            None if self.required => Err(Error::MissingProperty(self.name)),
            None => Ok(None),
        }
    }

    fn resolve(&self) -> Result<Option<T>> {
        let raw = match raw_value(self.source, &self.name) {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let value = T::parse_property(&self.name, &raw)?;
        for validator in &self.validators {
            if let Err(reason) = validator(&value) {
                return Err(Error::invalid_property(self.name.as_str(), raw, reason));
            }
        }

        trace!("property '{}' resolved from configured value '{}'", self.name, raw);
        Ok(Some(value))
    }
}

/// A property lookup that always yields a value.
pub struct DefaultedPropertyReaderContext<'a, T> {
    context: PropertyReaderContext<'a, T>,
    default: T,
}

impl<'a, T: PropertyType> DefaultedPropertyReaderContext<'a, T> {
    /// Adds a check for explicitly configured values. The default itself is not validated.
    pub fn with_validator<F>(mut self, validator: F) -> Self
        where F: Fn(&T) -> result::Result<(), String> + 'a
    {
        self.context = self.context.with_validator(validator);
        self
    }

    pub fn get_value(self) -> Result<T> {
        match self.context.resolve()? {
            Some(value) => Ok(value),
            None => {
                debug!("property '{}' is not set, using its default", self.context.name);
                Ok(self.default)
            }
        }
    }
}
