use crate::{
    client::PlanetScaleClient,
    error::PsResult,
    models::{ApiErrorBody, Branch, BranchSchema, CreateBranchRequest, Empty, Page, SchemaLintError},
    query::QueryParams,
    response::operation_response,
};
use log::info;
use reqwest::Method;

operation_response! {
    /// Responses of `GET .../databases/{db}/branches`
    pub enum ListBranchesResponse {
        200 => Ok(Page<Branch>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../databases/{db}/branches`
    pub enum CreateBranchResponse {
        201 => Created(Branch),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../branches/{name}`
    pub enum GetBranchResponse {
        200 => Ok(Branch),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `DELETE .../branches/{name}`
    pub enum DeleteBranchResponse {
        204 => NoContent(Empty),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../branches/{name}/demote`
    pub enum DemoteBranchResponse {
        200 => Ok(Branch),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../branches/{name}/promote`
    pub enum PromoteBranchResponse {
        200 => Ok(Branch),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `POST .../branches/{name}/safe-migrations`
    pub enum EnableSafeMigrationsResponse {
        200 => Ok(Branch),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `DELETE .../branches/{name}/safe-migrations`
    pub enum DisableSafeMigrationsResponse {
        200 => Ok(Branch),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../branches/{name}/schema`
    pub enum GetBranchSchemaResponse {
        200 => Ok(BranchSchema),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

operation_response! {
    /// Responses of `GET .../branches/{name}/schema/lint`
    pub enum LintBranchSchemaResponse {
        200 => Ok(Page<SchemaLintError>),
        403 => Forbidden(ApiErrorBody),
        404 => NotFound(ApiErrorBody),
        500 => InternalServerError(ApiErrorBody),
    }
}

/// Branch API operations
pub struct BranchApi<'a> {
    client: &'a PlanetScaleClient,
}

impl<'a> BranchApi<'a> {
    pub fn new(client: &'a PlanetScaleClient) -> Self {
        Self { client }
    }

    fn branches_path(organization: &str, database: &str) -> String {
        format!("organizations/{}/databases/{}/branches", organization, database)
    }

    fn branch_path(organization: &str, database: &str, name: &str) -> String {
        format!("{}/{}", Self::branches_path(organization, database), name)
    }

    /// List branches of a database
    pub async fn list_branches(
        &self,
        organization: &str,
        database: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<ListBranchesResponse> {
        info!("Listing branches of {}/{}", organization, database);
        let path = Self::branches_path(organization, database);
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }

    /// Create a branch off `request.parent_branch`, optionally restoring a
    /// backup into it
    pub async fn create_branch(
        &self,
        organization: &str,
        database: &str,
        request: &CreateBranchRequest,
    ) -> PsResult<CreateBranchResponse> {
        info!(
            "Creating branch {} from {} in {}/{}",
            request.name, request.parent_branch, organization, database
        );
        let path = Self::branches_path(organization, database);
        self.client
            .call_with_body(Method::POST, &path, QueryParams::new(), request)
            .await
    }

    /// Get a branch
    pub async fn get_branch(
        &self,
        organization: &str,
        database: &str,
        name: &str,
    ) -> PsResult<GetBranchResponse> {
        info!("Getting branch {}/{}/{}", organization, database, name);
        let path = Self::branch_path(organization, database, name);
        self.client.call(Method::GET, &path, QueryParams::new()).await
    }

    /// Delete a branch
    pub async fn delete_branch(
        &self,
        organization: &str,
        database: &str,
        name: &str,
    ) -> PsResult<DeleteBranchResponse> {
        info!("Deleting branch {}/{}/{}", organization, database, name);
        let path = Self::branch_path(organization, database, name);
        self.client
            .call(Method::DELETE, &path, QueryParams::new())
            .await
    }

    /// Demote a production branch to development
    pub async fn demote_branch(
        &self,
        organization: &str,
        database: &str,
        name: &str,
    ) -> PsResult<DemoteBranchResponse> {
        info!("Demoting branch {}/{}/{}", organization, database, name);
        let path = format!("{}/demote", Self::branch_path(organization, database, name));
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    /// Promote a development branch to production
    pub async fn promote_branch(
        &self,
        organization: &str,
        database: &str,
        name: &str,
    ) -> PsResult<PromoteBranchResponse> {
        info!("Promoting branch {}/{}/{}", organization, database, name);
        let path = format!("{}/promote", Self::branch_path(organization, database, name));
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    pub async fn enable_safe_migrations(
        &self,
        organization: &str,
        database: &str,
        name: &str,
    ) -> PsResult<EnableSafeMigrationsResponse> {
        info!(
            "Enabling safe migrations on {}/{}/{}",
            organization, database, name
        );
        let path = format!(
            "{}/safe-migrations",
            Self::branch_path(organization, database, name)
        );
        self.client.call(Method::POST, &path, QueryParams::new()).await
    }

    pub async fn disable_safe_migrations(
        &self,
        organization: &str,
        database: &str,
        name: &str,
    ) -> PsResult<DisableSafeMigrationsResponse> {
        info!(
            "Disabling safe migrations on {}/{}/{}",
            organization, database, name
        );
        let path = format!(
            "{}/safe-migrations",
            Self::branch_path(organization, database, name)
        );
        self.client
            .call(Method::DELETE, &path, QueryParams::new())
            .await
    }

    /// Get the schema of a branch
    ///
    /// # Arguments
    /// * `keyspace` - Restrict to one keyspace of a sharded branch
    pub async fn get_branch_schema(
        &self,
        organization: &str,
        database: &str,
        name: &str,
        keyspace: Option<&str>,
    ) -> PsResult<GetBranchSchemaResponse> {
        info!("Getting schema of {}/{}/{}", organization, database, name);
        let path = format!("{}/schema", Self::branch_path(organization, database, name));
        let query = QueryParams::new().opt_str("keyspace", keyspace);
        self.client.call(Method::GET, &path, query).await
    }

    /// Lint the schema of a branch
    pub async fn lint_branch_schema(
        &self,
        organization: &str,
        database: &str,
        name: &str,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> PsResult<LintBranchSchemaResponse> {
        info!("Linting schema of {}/{}/{}", organization, database, name);
        let path = format!(
            "{}/schema/lint",
            Self::branch_path(organization, database, name)
        );
        let query = QueryParams::new().pagination(page, per_page);
        self.client.call(Method::GET, &path, query).await
    }
}
