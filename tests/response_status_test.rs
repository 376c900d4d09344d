use planetscale_client::*;
use std::any::Any;

const ERROR_BODY: &[u8] = br#"{"code":"not_found","message":"Not Found"}"#;

/// Statuses no operation documents
const UNDOCUMENTED: [u16; 3] = [301, 418, 502];

/// Every code that some operation documents
const KNOWN: [u16; 7] = [200, 201, 204, 403, 404, 422, 500];

fn error_code(payload: &dyn Any) -> Option<&str> {
    payload
        .downcast_ref::<ApiErrorBody>()
        .map(|body| body.code.as_str())
}

/// Assert each response enum maps exactly its documented statuses onto the
/// listed variants, with empty and JSON bodies, and rejects every other code.
macro_rules! assert_statuses {
    ($( $name:ident { $( $status:literal => $variant:ident ),+ $(,)? } )+) => {$(
        $(
            for body in [&b""[..], ERROR_BODY] {
                let resp = $name::from_response($status, body).unwrap_or_else(|e| {
                    panic!("{} {}: {}", stringify!($name), $status, e)
                });
                assert_eq!(resp.status(), $status, "{}", stringify!($name));
                match &resp {
                    $name::$variant(payload) => {
                        if $status >= 400 && !body.is_empty() {
                            assert_eq!(
                                error_code(payload),
                                Some("not_found"),
                                "{} {} should carry the error body",
                                stringify!($name),
                                $status
                            );
                        }
                    }
                    #[allow(unreachable_patterns)]
                    other => panic!(
                        "{} {}: expected {}, got {:?}",
                        stringify!($name),
                        $status,
                        stringify!($variant),
                        other
                    ),
                }
            }
        )+

        let documented: &[u16] = &[$($status),+];
        for status in KNOWN.iter().chain(UNDOCUMENTED.iter()).copied() {
            if documented.contains(&status) {
                continue;
            }
            match $name::from_response(status, ERROR_BODY) {
                Err(PsError::UnexpectedStatus { status: got, body }) => {
                    assert_eq!(got, status);
                    assert!(body.contains("not_found"));
                }
                other => panic!(
                    "{} {}: expected an unexpected-status error, got {:?}",
                    stringify!($name),
                    status,
                    other
                ),
            }
        }
    )+};
}

/// Test organization response statuses
#[test]
fn test_organization_statuses() {
    assert_statuses! {
        ListOrganizationsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetOrganizationResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        UpdateOrganizationResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListRegionsForOrganizationResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}

/// Test database response statuses
#[test]
fn test_database_statuses() {
    assert_statuses! {
        ListDatabasesResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CreateDatabaseResponse { 201 => Created, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetDatabaseResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        UpdateDatabaseSettingsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DeleteDatabaseResponse { 204 => NoContent, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListReadOnlyRegionsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListDatabaseRegionsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}

/// Test branch response statuses
#[test]
fn test_branch_statuses() {
    assert_statuses! {
        ListBranchesResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CreateBranchResponse { 201 => Created, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetBranchResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DeleteBranchResponse { 204 => NoContent, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DemoteBranchResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        PromoteBranchResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        EnableSafeMigrationsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DisableSafeMigrationsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetBranchSchemaResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        LintBranchSchemaResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}

/// Test backup response statuses
#[test]
fn test_backup_statuses() {
    assert_statuses! {
        ListBackupsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CreateBackupResponse { 201 => Created, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetBackupResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DeleteBackupResponse { 204 => NoContent, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}

/// Test password response statuses
#[test]
fn test_password_statuses() {
    assert_statuses! {
        ListPasswordsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CreatePasswordResponse {
            201 => Created,
            403 => Forbidden,
            404 => NotFound,
            422 => UnprocessableEntity,
            500 => InternalServerError,
        }
        GetPasswordResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        UpdatePasswordResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DeletePasswordResponse { 204 => NoContent, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        RenewPasswordResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}

/// Test deploy request response statuses
#[test]
fn test_deploy_request_statuses() {
    assert_statuses! {
        GetDeployQueueResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListDeployRequestsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CreateDeployRequestResponse { 201 => Created, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetDeployRequestResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CloseDeployRequestResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CompleteGatedDeployRequestResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        UpdateAutoApplyResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CancelDeployRequestResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CompleteErroredDeployResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        QueueDeployRequestResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetDeploymentResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListDeployOperationsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CompleteRevertResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListDeployRequestReviewsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ReviewDeployRequestResponse { 201 => Created, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        SkipRevertPeriodResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}

/// Test OAuth application response statuses
#[test]
fn test_oauth_statuses() {
    assert_statuses! {
        ListOauthApplicationsResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetOauthApplicationResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        ListOauthTokensResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        GetOauthTokenResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        DeleteOauthTokenResponse { 204 => NoContent, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
        CreateOrRenewOauthTokenResponse {
            200 => Ok,
            403 => Forbidden,
            404 => NotFound,
            422 => UnprocessableEntity,
            500 => InternalServerError,
        }
    }
}

/// Test current user response statuses
#[test]
fn test_user_statuses() {
    assert_statuses! {
        GetCurrentUserResponse { 200 => Ok, 403 => Forbidden, 404 => NotFound, 500 => InternalServerError }
    }
}
