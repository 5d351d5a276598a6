//! The per-directory record that handlers read from and merge into.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

/// Field-name to value map produced by handlers, in insertion order.
pub type Fields = Map<String, Value>;

pub const DIR_FIELD: &str = "dir";
pub const DIR_PATH_FIELD: &str = "dirPath";

/// Accumulated fields for one directory that holds at least one matched file.
///
/// Starts out as `{dir, dirPath}`. Handler output is merged on top
/// field-by-field, which may replace the two reserved fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryRecord {
    fields: Fields,
}

impl DirectoryRecord {
    #[must_use]
    pub fn new(dir: &str, dir_path: &Path) -> Self {
        let mut fields = Fields::new();
        fields.insert(DIR_FIELD.to_string(), Value::from(dir));
        fields.insert(
            DIR_PATH_FIELD.to_string(),
            Value::from(dir_path.to_string_lossy().into_owned()),
        );
        Self { fields }
    }

    /// Directory relative to the scan root, `.` for the root itself.
    #[must_use]
    pub fn dir(&self) -> Option<&str> {
        self.fields.get(DIR_FIELD).and_then(Value::as_str)
    }

    /// Absolute path of the directory.
    #[must_use]
    pub fn dir_path(&self) -> Option<&Path> {
        self.fields
            .get(DIR_PATH_FIELD)
            .and_then(Value::as_str)
            .map(Path::new)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Shallow merge: every incoming field replaces the current value.
    pub fn merge(&mut self, partial: Fields) {
        for (key, value) in partial {
            self.fields.insert(key, value);
        }
    }
}

impl From<DirectoryRecord> for Value {
    fn from(record: DirectoryRecord) -> Self {
        Self::Object(record.fields)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
