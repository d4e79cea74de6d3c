//! Singleton pattern: one process-wide configuration manager, created on
//! first access and never torn down. Reads and writes go through a mutex so
//! the shared map stays sound if callers ever become concurrent.

use crate::error::Result;
use crate::sink::Sink;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

use super::{completed, section_header};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => write!(f, "{}", s),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

static INSTANCE: Lazy<ConfigurationManager> = Lazy::new(ConfigurationManager::seeded);

pub struct ConfigurationManager {
    values: Mutex<BTreeMap<String, ConfigValue>>,
}

impl ConfigurationManager {
    fn seeded() -> Self {
        let mut values = BTreeMap::new();
        values.insert("database_url".to_string(), "localhost:5432/mydb".into());
        values.insert("api_key".to_string(), "default_api_key_123".into());
        values.insert("max_connections".to_string(), 100i64.into());
        values.insert("debug_mode".to_string(), false.into());
        values.insert("timeout".to_string(), 30i64.into());
        Self {
            values: Mutex::new(values),
        }
    }

    /// The shared instance. Every call returns the same `&'static`.
    pub fn global() -> &'static ConfigurationManager {
        &INSTANCE
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, ConfigValue>> {
        // A poisoned lock still holds usable data for this map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.lock().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.lock().insert(key.into(), value.into());
    }

    /// A copy of the whole mapping, keys in alphabetical order.
    pub fn snapshot(&self) -> BTreeMap<String, ConfigValue> {
        self.lock().clone()
    }
}

fn shown(value: Option<ConfigValue>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}

pub fn run<S: Sink>(sink: &mut S) -> Result<()> {
    section_header(sink, "Singleton Pattern: Configuration Manager")?;
    sink.blank_line()?;

    let config1 = ConfigurationManager::global();
    sink.write_line(&format!(
        "Config 1 - Database URL: {}",
        shown(config1.get("database_url"))
    ))?;

    config1.set("api_key", "new_secret_key_456");
    config1.set("debug_mode", true);
    config1.set("timeout", 60i64);

    let config2 = ConfigurationManager::global();
    sink.write_line(&format!(
        "Config 2 - API Key: {}",
        shown(config2.get("api_key"))
    ))?;
    sink.write_line(&format!(
        "Config 2 - Debug Mode: {}",
        shown(config2.get("debug_mode"))
    ))?;
    sink.write_line(&format!(
        "Config 2 - Timeout: {}",
        shown(config2.get("timeout"))
    ))?;
    sink.blank_line()?;

    sink.write_line(&format!(
        "Same instance? {}",
        std::ptr::eq(config1, config2)
    ))?;
    sink.blank_line()?;

    sink.write_line("All Configuration:")?;
    for (key, value) in config2.snapshot() {
        sink.write_line(&format!("{}: {}", key, value))?;
    }
    sink.blank_line()?;

    completed(sink, "Singleton")
}
