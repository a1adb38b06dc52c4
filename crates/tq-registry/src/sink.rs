//! Field write pipeline.
//!
//! A `FieldSink` persists fields that are already present in the registry.
//! The directory layout follows the usual time-directory convention:
//!
//! ```text
//! <root>/<time>/<key>.json
//! ```

use crate::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tq_core::{FieldValue, Real};

/// Destination for published fields.
pub trait FieldSink {
    /// Called by the host before the writes of a new output time.
    fn begin_time(&mut self, _time: Real) {}

    /// Persist `field`, registered under `key`.
    fn request_write(&mut self, key: &str, field: &FieldValue) -> RegistryResult<()>;
}

/// Directory name for an output time: the time rounded to twelve significant
/// digits, in shortest decimal form (`0.3`, `1`, `0.125`, `0.0000001`).
///
/// Rounding absorbs accumulation noise such as `0.1 * 3.0`; distinct times
/// that agree to twelve digits share a directory.
pub fn time_name(time: Real) -> String {
    let rounded: Real = format!("{time:.11e}").parse().unwrap_or(time);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    pub time: Real,
    pub key: String,
    pub field: FieldValue,
}

/// Keeps every write in memory. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    time: Real,
    writes: Vec<WriteRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[WriteRecord] {
        &self.writes
    }

    pub fn keys(&self) -> Vec<&str> {
        self.writes.iter().map(|w| w.key.as_str()).collect()
    }
}

impl FieldSink for MemorySink {
    fn begin_time(&mut self, time: Real) {
        self.time = time;
    }

    fn request_write(&mut self, key: &str, field: &FieldValue) -> RegistryResult<()> {
        self.writes.push(WriteRecord {
            time: self.time,
            key: key.to_string(),
            field: field.clone(),
        });
        Ok(())
    }
}

/// On-disk field document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredField {
    pub key: String,
    pub time: Real,
    pub field: FieldValue,
}

/// Writes each field as a JSON document below a root directory.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    root_dir: PathBuf,
    time: Real,
}

impl DirectorySink {
    pub fn new(root_dir: PathBuf) -> RegistryResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self {
            root_dir,
            time: 0.0,
        })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn time_dir(&self, time_name: &str) -> PathBuf {
        self.root_dir.join(time_name)
    }

    fn field_path(&self, time_name: &str, key: &str) -> PathBuf {
        self.time_dir(time_name).join(format!("{key}.json"))
    }

    pub fn has_field(&self, time_name: &str, key: &str) -> bool {
        self.field_path(time_name, key).exists()
    }

    pub fn load_field(&self, time_name: &str, key: &str) -> RegistryResult<StoredField> {
        let path = self.field_path(time_name, key);

        if !path.exists() {
            return Err(RegistryError::FieldNotFound {
                key: key.to_string(),
                time: time_name.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let stored = serde_json::from_str(&content)?;
        Ok(stored)
    }

    /// Output time directories, in ascending time order.
    pub fn list_times(&self) -> RegistryResult<Vec<String>> {
        let mut times = Vec::new();

        if !self.root_dir.exists() {
            return Ok(times);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                if name.parse::<Real>().is_ok() {
                    times.push(name);
                }
            }
        }

        times.sort_by(|a, b| {
            let a: Real = a.parse().unwrap_or(0.0);
            let b: Real = b.parse().unwrap_or(0.0);
            a.total_cmp(&b)
        });
        Ok(times)
    }

    /// Field keys written at one output time, sorted.
    pub fn list_fields(&self, time_name: &str) -> RegistryResult<Vec<String>> {
        let mut keys = Vec::new();
        let dir = self.time_dir(time_name);

        if !dir.exists() {
            return Ok(keys);
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                keys.push(stem.to_string_lossy().to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}

impl FieldSink for DirectorySink {
    fn begin_time(&mut self, time: Real) {
        self.time = time;
    }

    fn request_write(&mut self, key: &str, field: &FieldValue) -> RegistryResult<()> {
        let name = time_name(self.time);
        fs::create_dir_all(self.time_dir(&name))?;

        let stored = StoredField {
            key: key.to_string(),
            time: self.time,
            field: field.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(self.field_path(&name, key), json)?;

        Ok(())
    }
}
