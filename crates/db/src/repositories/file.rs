use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use adslot_core::{
    errors::{SlotError, SlotResult},
    models::file::UploadedFile,
};

use super::map_sqlx_error;
use crate::{models::DbUploadedFile, repository::Repository};

const COLUMNS: &str =
    "file_id, booking_id, file_name, file_type, folder_path, size_bytes, uploaded_at, text_content";

pub struct PgFileRepository {
    pool: Pool<Postgres>,
}

impl PgFileRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<UploadedFile> for PgFileRepository {
    async fn find_by_id(&self, id: &str) -> SlotResult<Option<UploadedFile>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, DbUploadedFile>(&format!(
            "SELECT {} FROM uploaded_files WHERE file_id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| SlotError::Database(err.into()))?;

        Ok(row.map(UploadedFile::from))
    }

    async fn list(&self) -> SlotResult<Vec<UploadedFile>> {
        let rows = sqlx::query_as::<_, DbUploadedFile>(&format!(
            "SELECT {} FROM uploaded_files ORDER BY uploaded_at",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|err| SlotError::Database(err.into()))?;

        Ok(rows.into_iter().map(UploadedFile::from).collect())
    }

    async fn create(&self, file: UploadedFile) -> SlotResult<UploadedFile> {
        tracing::debug!("Registering file: id={}, folder={}", file.file_id, file.folder_path);

        let row = sqlx::query_as::<_, DbUploadedFile>(&format!(
            r#"
            INSERT INTO uploaded_files ({})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS, COLUMNS
        ))
        .bind(file.file_id)
        .bind(file.booking_id)
        .bind(&file.file_name)
        .bind(&file.file_type)
        .bind(&file.folder_path)
        .bind(i64::try_from(file.size_bytes).unwrap_or(i64::MAX))
        .bind(file.uploaded_at)
        .bind(&file.text_content)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error(err, "File", &file.file_id.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, file: UploadedFile) -> SlotResult<UploadedFile> {
        let row = sqlx::query_as::<_, DbUploadedFile>(&format!(
            r#"
            UPDATE uploaded_files
            SET booking_id = $2, file_name = $3, file_type = $4, folder_path = $5,
                size_bytes = $6, uploaded_at = $7, text_content = $8
            WHERE file_id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(file.file_id)
        .bind(file.booking_id)
        .bind(&file.file_name)
        .bind(&file.file_type)
        .bind(&file.folder_path)
        .bind(i64::try_from(file.size_bytes).unwrap_or(i64::MAX))
        .bind(file.uploaded_at)
        .bind(&file.text_content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| SlotError::Database(err.into()))?
        .ok_or_else(|| SlotError::NotFound(format!("File with ID {} not found", file.file_id)))?;

        Ok(row.into())
    }
}
