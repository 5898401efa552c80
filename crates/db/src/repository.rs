//! Storage abstraction shared by every adapter.
//!
//! Handlers only ever see `dyn Repository<T>`; which adapter backs it (the
//! fixture-backed in-memory store or PostgreSQL) is decided once at start-up.

use async_trait::async_trait;
use adslot_core::{
    errors::SlotResult,
    models::{
        booking::Booking,
        client::{Agency, Client},
        file::UploadedFile,
        program::{Navigator, Program},
    },
};

/// A stored entity with a string key.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human readable kind used in error messages.
    const KIND: &'static str;

    fn record_id(&self) -> String;
}

#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn find_by_id(&self, id: &str) -> SlotResult<Option<T>>;

    async fn list(&self) -> SlotResult<Vec<T>>;

    /// Fails with `SlotError::Conflict` when the id is already taken.
    async fn create(&self, record: T) -> SlotResult<T>;

    /// Replaces the stored record. Fails with `SlotError::NotFound` when the
    /// id is unknown.
    async fn update(&self, record: T) -> SlotResult<T>;
}

impl Record for Client {
    const KIND: &'static str = "Client";

    fn record_id(&self) -> String {
        self.client_id.clone()
    }
}

impl Record for Agency {
    const KIND: &'static str = "Agency";

    fn record_id(&self) -> String {
        self.agency_id.clone()
    }
}

impl Record for Program {
    const KIND: &'static str = "Program";

    fn record_id(&self) -> String {
        self.program_id.clone()
    }
}

impl Record for Navigator {
    const KIND: &'static str = "Navigator";

    fn record_id(&self) -> String {
        self.navigator_id.clone()
    }
}

impl Record for Booking {
    const KIND: &'static str = "Booking";

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}

impl Record for UploadedFile {
    const KIND: &'static str = "File";

    fn record_id(&self) -> String {
        self.file_id.to_string()
    }
}
