use std::fs;
use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<ConfigTable>> = OnceCell::new();

/// A parsed `config.toml`, handed out section by section.
#[derive(Debug, Clone, Default)]
pub struct ConfigTable {
    table: Table,
}

impl ConfigTable {
    /// 语法错误时退回空表，所有 section 走默认值
    pub fn parse(content: &str) -> Self {
        let table = toml::from_str::<Table>(content).unwrap_or_else(|e| {
            log::error!("Config syntax error: {}, using empty config.", e);
            Table::new()
        });
        Self { table }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file not found at {:?}, using defaults.", path);
            return Ok(Self::default());
        }

        log::info!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Ok(Self::parse(&content))
    }

    pub fn has_section(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Deserializes `[key]` (or `[[key]]`), falling back to `T::default()`
    /// when the section is absent or does not match `T`.
    pub fn section<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.table.get(key) {
            Some(value) => value.clone().try_into().unwrap_or_else(|e| {
                log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
                T::default()
            }),
            None => {
                log::debug!("Config section '[{}]' missing, using default.", key);
                T::default()
            }
        }
    }
}

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let table = ConfigTable::read(path)?;

    GLOBAL_CONFIG.set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("doodle-shared config not initialized, '[{}]' uses defaults.", key);
        return T::default();
    };

    match store.read() {
        Ok(guard) => guard.section(key),
        Err(_) => {
            log::error!("Config lock poisoned, '[{}]' uses defaults.", key);
            T::default()
        }
    }
}
