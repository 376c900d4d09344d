use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{
        ApiErrorBody, CreatePasswordRequest, Empty, Page, Password, RenewPasswordRequest,
        UpdatePasswordRequest,
    },
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET .../branches/{branch}/passwords`
    pub enum ListPasswordsResponse {
        200 => Ok(Page<Password>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../branches/{branch}/passwords`
    pub enum CreatePasswordResponse {
        201 => Created(Password),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        422 => UnprocessableEntity(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../passwords/{id}`
    pub enum GetPasswordResponse {
        200 => Ok(Password),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `PATCH .../passwords/{id}`
    pub enum UpdatePasswordResponse {
        200 => Ok(Password),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `DELETE .../passwords/{id}`
    pub enum DeletePasswordResponse {
        204 => NoContent(Empty),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../passwords/{id}/renew`
    pub enum RenewPasswordResponse {
        200 => Ok(Password),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// Password API operations
///
/// Passwords are branch credentials. The generated secret is only returned
/// by [`create_password`](Self::create_password) and
/// [`renew_password`](Self::renew_password), in `Password::plain_text`.
pub struct PasswordApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> PasswordApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    fn passwords_path(organization: &str, database: &str, branch: &str) -> String {
        format!(
            "organizations/{}/databases/{}/branches/{}/passwords",
            organization, database, branch
        )
    }

    /// List passwords of a branch
    ///
    /// # Arguments
    /// * `read_only_region_id` - Only passwords for this read-only region
    pub async fn list_passwords(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        read_only_region_id: Option<&str>,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListPasswordsResponse> {
        info!("Listing passwords of {}/{}/{}", organization, database, branch);
        let path = Self::passwords_path(organization, database, branch);
        let query = QueryParams::new()
            .opt_str("read_only_region_id", read_only_region_id)
            .pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Create a password
    pub async fn create_password(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        request: &CreatePasswordRequest,
    ) -> PsResult<CreatePasswordResponse> {
        info!("Creating password on {}/{}/{}", organization, database, branch);
        let path = Self::passwords_path(organization, database, branch);
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }

    /// Get a password
    pub async fn get_password(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        id: &str,
        read_only_region_id: Option<&str>,
    ) -> PsResult<GetPasswordResponse> {
        info!("Getting password {} of {}/{}/{}", id, organization, database, branch);
        let path = format!("{}/{}", Self::passwords_path(organization, database, branch), id);
        let query = QueryParams::new().opt_str("read_only_region_id", read_only_region_id);
        self.client.call(Method::GET, &path, query).await
    }

    /// Rename a password
    pub async fn update_password(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        id: &str,
        request: &UpdatePasswordRequest,
    ) -> PsResult<UpdatePasswordResponse> {
        info!("Updating password {} of {}/{}/{}", id, organization, database, branch);
        let path = format!("{}/{}", Self::passwords_path(organization, database, branch), id);
        self.client
            .call_with_body(Method::PATCH, &path, QueryParams::new(), request)
            .await
    }

    /// Delete a password
    pub async fn delete_password(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        id: &str,
    ) -> PsResult<DeletePasswordResponse> {
        info!("Deleting password {} of {}/{}/{}", id, organization, database, branch);
        let path = format!("{}/{}", Self::passwords_path(organization, database, branch), id);
        self.client
            .call(Method::DELETE, &path, QueryParams::new())
            .await
    }

    /// Renew an expiring password
    pub async fn renew_password(
        &self,
        organization: &str,
        database: &str,
        branch: &str,
        id: &str,
        request: &RenewPasswordRequest,
    ) -> PsResult<RenewPasswordResponse> {
        info!("Renewing password {} of {}/{}/{}", id, organization, database, branch);
        let path = format!(
            "{}/{}/renew",
            Self::passwords_path(organization, database, branch),
            id
        );
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }
}
