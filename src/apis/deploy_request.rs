use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{
        ApiErrorBody, CloseDeployRequestRequest, CreateDeployRequestRequest, DeployOperation,
        DeployRequest, DeployReview, Deployment, ListDeployRequestsQuery, Page, QueuedDeployment,
        ReviewDeployRequestRequest, UpdateAutoApplyRequest,
    },
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET .../databases/{db}/deploy-queue`
    pub enum GetDeployQueueResponse {
        200 => Ok(Page<QueuedDeployment>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../databases/{db}/deploy-requests`
    pub enum ListDeployRequestsResponse {
        200 => Ok(Page<DeployRequest>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../databases/{db}/deploy-requests`
    pub enum CreateDeployRequestResponse {
        201 => Created(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../deploy-requests/{number}`
    pub enum GetDeployRequestResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `PATCH .../deploy-requests/{number}`
    pub enum CloseDeployRequestResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/apply-deploy`
    pub enum CompleteGatedDeployRequestResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `PUT .../deploy-requests/{number}/auto-apply`
    pub enum UpdateAutoApplyResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/cancel`
    pub enum CancelDeployRequestResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/complete-deploy`
    pub enum CompleteErroredDeployResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/deploy`
    pub enum QueueDeployRequestResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../deploy-requests/{number}/deployment`
    pub enum GetDeploymentResponse {
        200 => Ok(Deployment),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../deploy-requests/{number}/operations`
    pub enum ListDeployOperationsResponse {
        200 => Ok(Page<DeployOperation>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/revert`
    pub enum CompleteRevertResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../deploy-requests/{number}/reviews`
    pub enum ListDeployRequestReviewsResponse {
        200 => Ok(Page<DeployReview>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/reviews`
    pub enum ReviewDeployRequestResponse {
        201 => Created(DeployReview),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../deploy-requests/{number}/skip-revert`
    pub enum SkipRevertPeriodResponse {
        200 => Ok(DeployRequest),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// Deploy request API operations
///
/// A deploy request moves the schema of `branch` into `into_branch`. Once
/// queued it advances through the deployment states (`queued`,
/// `ready_to_cutover`, `cutover`, `complete`, and on failure `errored`,
/// `reverted` or `closed`); the operations here drive those transitions.
pub struct DeployRequestApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> DeployRequestApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    fn requests_path(organization: &str, database: &str) -> String {
        format!(
            "organizations/{}/databases/{}/deploy-requests",
            organization, database
        )
    }

    fn request_path(organization: &str, database: &str, number: u64) -> String {
        format!("{}/{}", Self::requests_path(organization, database), number)
    }

    fn action_path(organization: &str, database: &str, number: u64, action: &str) -> String {
        format!(
            "{}/{}",
            Self::request_path(organization, database, number),
            action
        )
    }

    /// Get the queue of deployments waiting to run on a database
    pub async fn get_deploy_queue(
        &self,
        organization: &str,
        database: &str,
    ) -> PsResult<GetDeployQueueResponse> {
        info!("Getting deploy queue of {}/{}", organization, database);
        let path = format!(
            "organizations/{}/databases/{}/deploy-queue",
            organization, database
        );
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// List deploy requests of a database
    ///
    /// # Arguments
    /// * `filter` - Pagination plus optional `state`, `branch` and
    ///   `into_branch` filters
    pub async fn list_deploy_requests(
        &self,
        organization: &str,
        database: &str,
        filter: &ListDeployRequestsQuery,
    ) -> PsResult<ListDeployRequestsResponse> {
        info!("Listing deploy requests of {}/{}", organization, database);
        let path = Self::requests_path(organization, database);
        let query = QueryParams::new()
            .pagination(filter.page, filter.per_page)
            .opt_str("state", filter.state.as_deref())
            .opt_str("branch", filter.branch.as_deref())
            .opt_str("into_branch", filter.into_branch.as_deref());
        self.client.call(Method::GET, &path, query).await
    }

    /// Open a deploy request
    pub async fn create_deploy_request(
        &self,
        organization: &str,
        database: &str,
        request: &CreateDeployRequestRequest,
    ) -> PsResult<CreateDeployRequestResponse> {
        info!("Creating deploy request on {}/{}", organization, database);
        let path = Self::requests_path(organization, database);
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }

    /// Get a deploy request
    pub async fn get_deploy_request(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<GetDeployRequestResponse> {
        info!("Getting deploy request #{} of {}/{}", number, organization, database);
        let path = Self::request_path(organization, database, number);
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Update a deploy request; in practice used to close it
    pub async fn close_deploy_request(
        &self,
        organization: &str,
        database: &str,
        number: u64,
        request: &CloseDeployRequestRequest,
    ) -> PsResult<CloseDeployRequestResponse> {
        info!("Closing deploy request #{} of {}/{}", number, organization, database);
        let path = Self::request_path(organization, database, number);
        self.client
            .call_with_body(Method::PATCH, &path, QueryParams::new(), request)
            .await
    }

    /// Cut over a deployment that is waiting at the gate
    pub async fn complete_gated_deploy_request(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<CompleteGatedDeployRequestResponse> {
        info!("Applying deploy request #{} of {}/{}", number, organization, database);
        let path = Self::action_path(organization, database, number, "apply-deploy");
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    /// Turn automatic cutover on or off
    pub async fn update_auto_apply(
        &self,
        organization: &str,
        database: &str,
        number: u64,
        request: &UpdateAutoApplyRequest,
    ) -> PsResult<UpdateAutoApplyResponse> {
        info!(
            "Updating auto-apply of deploy request #{} of {}/{}",
            number, organization, database
        );
        let path = Self::action_path(organization, database, number, "auto-apply");
        self.client
            .call_with_body(Method::PUT, &path, QueryParams::new(), request)
            .await
    }

    /// Remove a queued deploy request from the deploy queue
    pub async fn cancel_deploy_request(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<CancelDeployRequestResponse> {
        info!("Cancelling deploy request #{} of {}/{}", number, organization, database);
        let path = Self::action_path(organization, database, number, "cancel");
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    /// Mark an errored deployment as complete
    pub async fn complete_errored_deploy(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<CompleteErroredDeployResponse> {
        info!(
            "Completing errored deploy #{} of {}/{}",
            number, organization, database
        );
        let path = Self::action_path(organization, database, number, "complete-deploy");
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    /// Add a deploy request to the deploy queue
    pub async fn queue_deploy_request(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<QueueDeployRequestResponse> {
        info!("Queueing deploy request #{} of {}/{}", number, organization, database);
        let path = Self::action_path(organization, database, number, "deploy");
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    /// Get the deployment behind a deploy request
    pub async fn get_deployment(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<GetDeploymentResponse> {
        info!(
            "Getting deployment of deploy request #{} of {}/{}",
            number, organization, database
        );
        let path = Self::action_path(organization, database, number, "deployment");
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// List the DDL operations of a deploy request
    pub async fn list_deploy_operations(
        &self,
        organization: &str,
        database: &str,
        number: u64,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListDeployOperationsResponse> {
        info!(
            "Listing operations of deploy request #{} of {}/{}",
            number, organization, database
        );
        let path = Self::action_path(organization, database, number, "operations");
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Revert a completed deployment during its revert window
    pub async fn complete_revert(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<CompleteRevertResponse> {
        info!("Reverting deploy request #{} of {}/{}", number, organization, database);
        let path = Self::action_path(organization, database, number, "revert");
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    pub async fn list_deploy_request_reviews(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<ListDeployRequestReviewsResponse> {
        info!(
            "Listing reviews of deploy request #{} of {}/{}",
            number, organization, database
        );
        let path = Self::action_path(organization, database, number, "reviews");
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Approve or comment on a deploy request
    pub async fn review_deploy_request(
        &self,
        organization: &str,
        database: &str,
        number: u64,
        request: &ReviewDeployRequestRequest,
    ) -> PsResult<ReviewDeployRequestResponse> {
        info!("Reviewing deploy request #{} of {}/{}", number, organization, database);
        let path = Self::action_path(organization, database, number, "reviews");
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }

    /// End the revert window of a completed deployment early
    pub async fn skip_revert_period(
        &self,
        organization: &str,
        database: &str,
        number: u64,
    ) -> PsResult<SkipRevertPeriodResponse> {
        info!(
            "Skipping revert period of deploy request #{} of {}/{}",
            number, organization, database
        );
        let path = Self::action_path(organization, database, number, "skip-revert");
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }
}
