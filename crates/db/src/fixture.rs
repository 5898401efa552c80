//! Fixture-backed in-memory adapter.
//!
//! Reference data ships as JSON next to this crate and is embedded at compile
//! time. `FIXTURE_DIR` can point at a directory holding replacement files;
//! any file missing there falls back to the embedded copy.

use std::path::Path;

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info};
use adslot_core::{
    errors::{SlotError, SlotResult},
    models::{
        client::{Agency, Client},
        file::UploadedFile,
        program::{Navigator, Program},
    },
};

use crate::repository::{Record, Repository};

/// In-memory store that keeps records in insertion order.
pub struct FixtureRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> FixtureRepository<T> {
    pub fn new(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record + DeserializeOwned> FixtureRepository<T> {
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<T> = serde_json::from_str(json)
            .wrap_err_with(|| format!("Invalid {} fixture", T::KIND))?;
        Ok(Self::new(records))
    }
}

#[async_trait]
impl<T: Record> Repository<T> for FixtureRepository<T> {
    async fn find_by_id(&self, id: &str) -> SlotResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.record_id() == id).cloned())
    }

    async fn list(&self) -> SlotResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, record: T) -> SlotResult<T> {
        let mut records = self.records.write().await;
        let id = record.record_id();
        if records.iter().any(|existing| existing.record_id() == id) {
            return Err(SlotError::Conflict(format!("{} {} already exists", T::KIND, id)));
        }

        debug!(kind = T::KIND, id = %id, "Creating record");
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: T) -> SlotResult<T> {
        let mut records = self.records.write().await;
        let id = record.record_id();
        let slot = records
            .iter_mut()
            .find(|existing| existing.record_id() == id)
            .ok_or_else(|| SlotError::NotFound(format!("{} with ID {} not found", T::KIND, id)))?;

        debug!(kind = T::KIND, id = %id, "Updating record");
        *slot = record.clone();
        Ok(record)
    }
}

const CLIENTS_JSON: &str = include_str!("../fixtures/clients.json");
const AGENCIES_JSON: &str = include_str!("../fixtures/agencies.json");
const PROGRAMS_JSON: &str = include_str!("../fixtures/programs.json");
const NAVIGATORS_JSON: &str = include_str!("../fixtures/navigators.json");
const FILES_JSON: &str = include_str!("../fixtures/files.json");

/// All static fixtures, parsed.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub clients: Vec<Client>,
    pub agencies: Vec<Agency>,
    pub programs: Vec<Program>,
    pub navigators: Vec<Navigator>,
    pub files: Vec<UploadedFile>,
}

impl Fixtures {
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            clients: parse("clients.json", CLIENTS_JSON)?,
            agencies: parse("agencies.json", AGENCIES_JSON)?,
            programs: parse("programs.json", PROGRAMS_JSON)?,
            navigators: parse("navigators.json", NAVIGATORS_JSON)?,
            files: parse("files.json", FILES_JSON)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        info!("Loading fixtures from {}", dir.display());
        Ok(Self {
            clients: load(dir, "clients.json", CLIENTS_JSON)?,
            agencies: load(dir, "agencies.json", AGENCIES_JSON)?,
            programs: load(dir, "programs.json", PROGRAMS_JSON)?,
            navigators: load(dir, "navigators.json", NAVIGATORS_JSON)?,
            files: load(dir, "files.json", FILES_JSON)?,
        })
    }

    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).wrap_err_with(|| format!("Invalid fixture {}", name))
}

fn load<T: DeserializeOwned>(dir: &Path, name: &str, embedded: &str) -> Result<Vec<T>> {
    let path = dir.join(name);
    if !path.exists() {
        debug!("{} not found in fixture directory, using embedded copy", name);
        return parse(name, embedded);
    }

    let json = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("Failed to read fixture {}", path.display()))?;
    parse(name, &json)
}
