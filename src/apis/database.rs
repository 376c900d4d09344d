use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{
        ApiErrorBody, CreateDatabaseRequest, Database, Empty, Page, ReadOnlyRegion, Region,
        UpdateDatabaseSettingsRequest,
    },
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET organizations/{org}/databases`
    pub enum ListDatabasesResponse {
        200 => Ok(Page<Database>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST organizations/{org}/databases`
    pub enum CreateDatabaseResponse {
        201 => Created(Database),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET organizations/{org}/databases/{name}`
    pub enum GetDatabaseResponse {
        200 => Ok(Database),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `PATCH organizations/{org}/databases/{name}`
    pub enum UpdateDatabaseSettingsResponse {
        200 => Ok(Database),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `DELETE organizations/{org}/databases/{name}`
    pub enum DeleteDatabaseResponse {
        204 => NoContent(Empty),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET organizations/{org}/databases/{name}/read-only-regions`
    pub enum ListReadOnlyRegionsResponse {
        200 => Ok(Page<ReadOnlyRegion>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET organizations/{org}/databases/{name}/regions`
    pub enum ListDatabaseRegionsResponse {
        200 => Ok(Page<Region>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// Database API operations
pub struct DatabaseApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> DatabaseApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    fn path(organization: &str, database: &str) -> String {
        format!("organizations/{}/databases/{}", organization, database)
    }

    /// List databases in an organization
    pub async fn list_databases(
        &self,
        organization: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListDatabasesResponse> {
        info!("Listing databases in {}", organization);
        let path = format!("organizations/{}/databases", organization);
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Create a database
    ///
    /// # Arguments
    /// * `organization` - Organization name
    /// * `request` - Name plus optional plan, region, cluster size and notes
    pub async fn create_database(
        &self,
        organization: &str,
        request: &CreateDatabaseRequest,
    ) -> PsResult<CreateDatabaseResponse> {
        info!("Creating database {} in {}", request.name, organization);
        let path = format!("organizations/{}/databases", organization);
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }

    /// Get a database
    pub async fn get_database(
        &self,
        organization: &str,
        name: &str,
    ) -> PsResult<GetDatabaseResponse> {
        info!("Getting database {}/{}", organization, name);
        let path = Self::path(organization, name);
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Change database settings. Only fields set on `request` are sent.
    pub async fn update_database_settings(
        &self,
        organization: &str,
        name: &str,
        request: &UpdateDatabaseSettingsRequest,
    ) -> PsResult<UpdateDatabaseSettingsResponse> {
        info!("Updating settings of database {}/{}", organization, name);
        let path = Self::path(organization, name);
        self.client
            .call_with_body(Method::PATCH, &path, QueryParams::new(), request)
            .await
    }

    /// Delete a database
    pub async fn delete_database(
        &self,
        organization: &str,
        name: &str,
    ) -> PsResult<DeleteDatabaseResponse> {
        info!("Deleting database {}/{}", organization, name);
        let path = Self::path(organization, name);
        self.client
            .call(Method::DELETE, &path, QueryParams::new())
            .await
    }

    /// List read-only regions of a database
    pub async fn list_read_only_regions(
        &self,
        organization: &str,
        name: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListReadOnlyRegionsResponse> {
        info!("Listing read-only regions of {}/{}", organization, name);
        let path = format!("{}/read-only-regions", Self::path(organization, name));
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// List regions a database's branches can be placed in
    pub async fn list_database_regions(
        &self,
        organization: &str,
        name: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListDatabaseRegionsResponse> {
        info!("Listing regions of {}/{}", organization, name);
        let path = format!("{}/regions", Self::path(organization, name));
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }
}
