use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{ApiErrorBody, CurrentUser},
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET user`
    pub enum GetCurrentUserResponse {
        200 => Ok(CurrentUser),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// User API operations
pub struct UserApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    /// Get the user the credentials belong to
    pub async fn get_current_user(&self) -> PsResult<GetCurrentUserResponse> {
        info!("Getting current user");
        self.client.call(Method::GET, "user", QueryParams::new()).await
    }
}
