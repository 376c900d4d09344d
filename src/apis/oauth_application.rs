use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{
        ApiErrorBody, CreateOrRenewOauthTokenRequest, Empty, OauthApplication, OauthToken,
        OauthTokenGrant, Page,
    },
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET organizations/{org}/oauth-applications`
    pub enum ListOauthApplicationsResponse {
        200 => Ok(Page<OauthApplication>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET organizations/{org}/oauth-applications/{id}`
    pub enum GetOauthApplicationResponse {
        200 => Ok(OauthApplication),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../oauth-applications/{id}/tokens`
    pub enum ListOauthTokensResponse {
        200 => Ok(Page<OauthToken>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../oauth-applications/{id}/tokens/{token_id}`
    pub enum GetOauthTokenResponse {
        200 => Ok(OauthToken),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `DELETE .../oauth-applications/{id}/tokens/{token_id}`
    pub enum DeleteOauthTokenResponse {
        204 => NoContent(Empty),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../oauth-applications/{id}/token`
    pub enum CreateOrRenewOauthTokenResponse {
        200 => Ok(OauthTokenGrant),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        422 => UnprocessableEntity(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// OAuth application API operations
pub struct OauthApplicationApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> OauthApplicationApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    fn application_path(organization: &str, application_id: &str) -> String {
        format!(
            "organizations/{}/oauth-applications/{}",
            organization, application_id
        )
    }

    /// List OAuth applications of an organization
    pub async fn list_oauth_applications(
        &self,
        organization: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListOauthApplicationsResponse> {
        info!("Listing OAuth applications of {}", organization);
        let path = format!("organizations/{}/oauth-applications", organization);
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Get an OAuth application
    pub async fn get_oauth_application(
        &self,
        organization: &str,
        application_id: &str,
    ) -> PsResult<GetOauthApplicationResponse> {
        info!("Getting OAuth application {} of {}", application_id, organization);
        let path = Self::application_path(organization, application_id);
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// List tokens issued through an OAuth application
    pub async fn list_oauth_tokens(
        &self,
        organization: &str,
        application_id: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListOauthTokensResponse> {
        info!("Listing tokens of OAuth application {}", application_id);
        let path = format!("{}/tokens", Self::application_path(organization, application_id));
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Get a token, including the accesses it grants
    pub async fn get_oauth_token(
        &self,
        organization: &str,
        application_id: &str,
        token_id: &str,
    ) -> PsResult<GetOauthTokenResponse> {
        info!("Getting token {} of OAuth application {}", token_id, application_id);
        let path = format!(
            "{}/tokens/{}",
            Self::application_path(organization, application_id),
            token_id
        );
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Revoke a token
    pub async fn delete_oauth_token(
        &self,
        organization: &str,
        application_id: &str,
        token_id: &str,
    ) -> PsResult<DeleteOauthTokenResponse> {
        info!("Deleting token {} of OAuth application {}", token_id, application_id);
        let path = format!(
            "{}/tokens/{}",
            Self::application_path(organization, application_id),
            token_id
        );
        self.client
            .call(Method::DELETE, &path, QueryParams::new())
            .await
    }

    /// Exchange an authorization code or refresh token for an access token
    pub async fn create_or_renew_oauth_token(
        &self,
        organization: &str,
        application_id: &str,
        request: &CreateOrRenewOauthTokenRequest,
    ) -> PsResult<CreateOrRenewOauthTokenResponse> {
        info!(
            "Requesting {} token from OAuth application {}",
            request.grant_type, application_id
        );
        let path = format!("{}/token", Self::application_path(organization, application_id));
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }
}
