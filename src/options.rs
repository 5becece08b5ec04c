//! Options and their layered resolution.
//!
//! An option is a type implementing `UniqueOption`. Its value may be set programmatically for a
//! single property, for an entity or globally; settings are held in an `OptionsContainer`. An
//! `OptionsContext` stacks the containers that apply to one element and, when none of them holds
//! a value, asks the option for its configured default.
use error::Result;
use reader::ConfigurationPropertyReader;

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// An option that holds at most one value per scope.
pub trait UniqueOption: Any {
    type Value: Clone + Send + Sync + 'static;

    /// The value applying when no scope sets one, derived from configuration properties.
    fn default_value(&self, reader: &ConfigurationPropertyReader) -> Result<Self::Value>;
}

/// Programmatically configured option values for one scope.
#[derive(Debug, Default)]
pub struct OptionsContainer {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl OptionsContainer {
    pub fn new() -> OptionsContainer {
        Default::default()
    }

    /// Sets `O`, replacing any earlier value.
    pub fn set<O: UniqueOption>(&mut self, value: O::Value) {
        self.values.insert(TypeId::of::<O>(), Box::new(value));
    }

    pub fn get<O: UniqueOption>(&self) -> Option<&O::Value> {
        self.values
            .get(&TypeId::of::<O>())
            .and_then(|value| value.downcast_ref::<O::Value>())
    }

    pub fn contains<O: UniqueOption>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<O>())
    }

    pub fn remove<O: UniqueOption>(&mut self) -> Option<O::Value> {
        self.values
            .remove(&TypeId::of::<O>())
            .and_then(|value| value.downcast::<O::Value>().ok())
            .map(|value| *value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Moves every value of `other` into this container. Values in `other` win.
    pub fn merge(&mut self, other: OptionsContainer) {
        self.values.extend(other.values);
    }
}

/// The option scopes applying to one element, most specific first.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsContext<'a> {
    property: Option<&'a OptionsContainer>,
    entity: Option<&'a OptionsContainer>,
    global: Option<&'a OptionsContainer>,
}

impl<'a> OptionsContext<'a> {
    pub fn new() -> OptionsContext<'a> {
        Default::default()
    }

    pub fn with_global(mut self, options: &'a OptionsContainer) -> Self {
        self.global = Some(options);
        self
    }

    pub fn with_entity(mut self, options: &'a OptionsContainer) -> Self {
        self.entity = Some(options);
        self
    }

    pub fn with_property(mut self, options: &'a OptionsContainer) -> Self {
        self.property = Some(options);
        self
    }

    /// Returns the most specific value set for `O`, or the option's default otherwise.
    pub fn get_unique<O: UniqueOption>(&self,
                                       option: &O,
                                       reader: &ConfigurationPropertyReader)
                                       -> Result<O::Value> {
        let scopes = [("property", self.property), ("entity", self.entity), ("global", self.global)];

        for &(scope, container) in &scopes {
            if let Some(value) = container.and_then(|c| c.get::<O>()) {
                debug!("option resolved from {} scope", scope);
                return Ok(value.clone());
            }
        }

        option.default_value(reader)
    }
}
