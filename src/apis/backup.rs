use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{ApiErrorBody, Backup, CreateBackupRequest, Empty, Page},
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET .../branches/{branch}/backups`
    pub enum ListBackupsResponse {
        200 => Ok(Page<Backup>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../branches/{branch}/backups`
    pub enum CreateBackupResponse {
        201 => Created(Backup),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../backups/{id}`
    pub enum GetBackupResponse {
        200 => Ok(Backup),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `DELETE .../backups/{id}`
    pub enum DeleteBackupResponse {
        204 => NoContent(Empty),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// Backup API operations
pub struct BackupApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> BackupApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    fn backups_path(organization: &str, database: &str, branch: &str) -> String {
        format!(
            "organizations/{}/databases/{}/branches/{}/backups",
            organization, database, branch
        )
    }

    /// List backups of a branch
    pub async fn list_backups(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListBackupsResponse> {
        info!("Listing backups of {}/{}/{}", organization, database, branch);
        let path = Self::backups_path(organization, database, branch);
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Start a manual backup of a branch
    pub async fn create_backup(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        request: &CreateBackupRequest,
    ) -> PsResult<CreateBackupResponse> {
        info!("Creating backup of {}/{}/{}", organization, database, branch);
        let path = Self::backups_path(organization, database, branch);
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }

    /// Get a backup
    pub async fn get_backup(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        id: &str,
    ) -> PsResult<GetBackupResponse> {
        info!("Getting backup {} of {}/{}/{}", id, organization, database, branch);
        let path = format!("{}/{}", Self::backups_path(organization, database, branch), id);
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Delete a backup
    pub async fn delete_backup(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        id: &str,
    ) -> PsResult<DeleteBackupResponse> {
        info!("Deleting backup {} of {}/{}/{}", id, organization, database, branch);
        let path = format!("{}/{}", Self::backups_path(organization, database, branch), id);
        self.client
            .call(Method::DELETE, &path, QueryParams::new())
            .await
    }
}
