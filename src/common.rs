//! Driver-level read and write controls produced by option resolution.
use bson::{self, Bson};
use error::Error::ArgumentError;
use error::{Error, Result};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Indicates which replica set members may serve a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadMode {
    Primary,
    PrimaryPreferred,
    Secondary,
    SecondaryPreferred,
    Nearest,
}

impl ReadMode {
    /// The name used for this mode in commands and connection strings.
    pub fn as_str(&self) -> &'static str {
        match *self {
            ReadMode::Primary => "primary",
            ReadMode::PrimaryPreferred => "primaryPreferred",
            ReadMode::Secondary => "secondary",
            ReadMode::SecondaryPreferred => "secondaryPreferred",
            ReadMode::Nearest => "nearest",
        }
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for ReadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "primary" => ReadMode::Primary,
            "primaryPreferred" => ReadMode::PrimaryPreferred,
            "secondary" => ReadMode::Secondary,
            "secondaryPreferred" => ReadMode::SecondaryPreferred,
            "nearest" => ReadMode::Nearest,
            _ => return Err(ArgumentError(format!("Could not convert '{}' to ReadMode.", s))),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPreference {
    pub mode: ReadMode,
    pub tag_sets: Vec<BTreeMap<String, String>>,
}

impl ReadPreference {
    pub fn new(mode: ReadMode, tag_sets: Option<Vec<BTreeMap<String, String>>>) -> ReadPreference {
        ReadPreference {
            mode: mode,
            tag_sets: tag_sets.unwrap_or_default(),
        }
    }

    /// Renders the preference as a `$readPreference` document.
    pub fn to_document(&self) -> bson::Document {
        let mut doc = bson::Document::new();
        doc.insert("mode", self.mode.as_str());

        if !self.tag_sets.is_empty() {
            let tags = self.tag_sets
                .iter()
                .map(|set| {
                    let mut tag_doc = bson::Document::new();
                    for (key, value) in set {
                        tag_doc.insert(key.to_owned(), value.to_owned());
                    }
                    Bson::Document(tag_doc)
                })
                .collect();
            doc.insert("tags", Bson::Array(tags));
        }

        doc
    }
}

/// The `w` component of a write concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    /// Wait for acknowledgment from this many members.
    Nodes(i32),
    /// Wait for a majority of voting members.
    Majority,
}

impl From<Acknowledgment> for Bson {
    fn from(w: Acknowledgment) -> Bson {
        match w {
            Acknowledgment::Nodes(n) => Bson::I32(n),
            Acknowledgment::Majority => Bson::String("majority".to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConcern {
    pub w: Acknowledgment, // Write replication
    pub w_timeout: i32,    // Used in conjunction with 'w'. Propagation timeout in ms.
    pub j: bool,           // If true, will block until write operations have been committed to journal.
    pub fsync: bool,       // If true and server is not journaling, blocks until server has synced all data files to disk.
}

impl WriteConcern {
    pub fn new() -> WriteConcern {
        WriteConcern {
            w: Acknowledgment::Nodes(1),
            w_timeout: 0,
            j: false,
            fsync: false,
        }
    }

    pub fn to_bson(&self) -> bson::Document {
        let mut bson = bson::Document::new();
        bson.insert("w", Bson::from(self.w.clone()));
        bson.insert("wtimeout", Bson::I32(self.w_timeout));
        bson.insert("j", Bson::Boolean(self.j));
        if self.fsync {
            bson.insert("fsync", Bson::Boolean(true));
        }
        bson
    }
}

impl Default for WriteConcern {
    fn default() -> Self {
        WriteConcern::new()
    }
}
