use async_trait::async_trait;
use mockall::mock;
use adslot_core::{
    errors::SlotResult,
    models::{booking::Booking, client::Client, file::UploadedFile, program::Program},
};

use crate::repository::Repository;

// Mock repositories for testing
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl Repository<Booking> for BookingRepo {
        async fn find_by_id(&self, id: &str) -> SlotResult<Option<Booking>>;
        async fn list(&self) -> SlotResult<Vec<Booking>>;
        async fn create(&self, record: Booking) -> SlotResult<Booking>;
        async fn update(&self, record: Booking) -> SlotResult<Booking>;
    }
}

mock! {
    pub ClientRepo {}

    #[async_trait]
    impl Repository<Client> for ClientRepo {
        async fn find_by_id(&self, id: &str) -> SlotResult<Option<Client>>;
        async fn list(&self) -> SlotResult<Vec<Client>>;
        async fn create(&self, record: Client) -> SlotResult<Client>;
        async fn update(&self, record: Client) -> SlotResult<Client>;
    }
}

mock! {
    pub ProgramRepo {}

    #[async_trait]
    impl Repository<Program> for ProgramRepo {
        async fn find_by_id(&self, id: &str) -> SlotResult<Option<Program>>;
        async fn list(&self) -> SlotResult<Vec<Program>>;
        async fn create(&self, record: Program) -> SlotResult<Program>;
        async fn update(&self, record: Program) -> SlotResult<Program>;
    }
}

mock! {
    pub FileRepo {}

    #[async_trait]
    impl Repository<UploadedFile> for FileRepo {
        async fn find_by_id(&self, id: &str) -> SlotResult<Option<UploadedFile>>;
        async fn list(&self) -> SlotResult<Vec<UploadedFile>>;
        async fn create(&self, record: UploadedFile) -> SlotResult<UploadedFile>;
        async fn update(&self, record: UploadedFile) -> SlotResult<UploadedFile>;
    }
}
