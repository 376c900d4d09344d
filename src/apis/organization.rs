use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{ApiErrorBody, Organization, Page, Region, UpdateOrganizationRequest},
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET organizations`
    pub enum ListOrganizationsResponse {
        200 => Ok(Page<Organization>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET organizations/{name}`
    pub enum GetOrganizationResponse {
        200 => Ok(Organization),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `PATCH organizations/{name}`
    pub enum UpdateOrganizationResponse {
        200 => Ok(Organization),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET organizations/{name}/region`
    pub enum ListRegionsForOrganizationResponse {
        200 => Ok(Page<Region>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// Organization API operations
pub struct OrganizationApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> OrganizationApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    /// List the organizations the credentials can see
    ///
    /// # Arguments
    /// * `page` - Page number, starting at 1
    /// * `per_page` - Number of organizations per page
    pub async fn list_organizations(
        &self,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListOrganizationsResponse> {
        info!("Listing organizations");
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, "organizations", query).await
    }

    /// Get an organization
    ///
    /// # Arguments
    /// * `name` - Organization name
    pub async fn get_organization(&self, name: &str) -> PsResult<GetOrganizationResponse> {
        info!("Getting organization: {}", name);
        let path = format!("organizations/{}", name);
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Update organization settings. Only fields set on `request` are sent.
    ///
    /// # Arguments
    /// * `name` - Organization name
    /// * `request` - Settings to change
    pub async fn update_organization(
        &self,
        name: &str,
        request: &UpdateOrganizationRequest,
    ) -> PsResult<UpdateOrganizationResponse> {
        info!("Updating organization: {}", name);
        let path = format!("organizations/{}", name);
        self.client
            .call_with_body(Method::PATCH, &path, QueryParams::new(), request)
            .await
    }

    /// List the regions an organization can create databases in
    ///
    /// # Arguments
    /// * `name` - Organization name
    /// * `page` - Page number
    /// * `per_page` - Number of regions per page
    pub async fn list_regions_for_organization(
        &self,
        name: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListRegionsForOrganizationResponse> {
        info!("Listing regions for organization: {}", name);
        let path = format!("organizations/{}/region", name);
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }
}
