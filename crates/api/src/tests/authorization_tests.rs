// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::tests::helpers::{
    create_test_admin, create_test_employee, create_test_hr, create_test_manager,
};
use crate::{
    AccessDecision, ApiError, AuthError, Authenticator, AuthorizationService, Capability,
    ConsoleCapabilities, LoginRequest, LoginResponse, Page, Principal, UserRole,
    compute_capabilities, gate, login,
};

#[test]
fn test_authenticate_trims_and_lowercases_email() {
    let authenticator: Authenticator = Authenticator::with_seed_accounts();

    let principal: Principal = authenticator
        .authenticate("  ARIA@Astrion.io ", "admin123")
        .unwrap();

    assert_eq!(principal.id, "user-admin");
    assert_eq!(principal.role, UserRole::Admin);
    assert_eq!(principal.department, "People Operations");
}

#[test]
fn test_authenticate_rejects_wrong_password() {
    let authenticator: Authenticator = Authenticator::with_seed_accounts();

    let result: Result<Principal, AuthError> = authenticator.authenticate("nia@astrion.io", "nope");

    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "Invalid email or password"
    );
}

#[test]
fn test_password_comparison_is_case_sensitive() {
    let authenticator: Authenticator = Authenticator::with_seed_accounts();

    assert!(authenticator.authenticate("priya@astrion.io", "TEAMWORK").is_err());
    assert!(authenticator.authenticate("priya@astrion.io", "teamwork").is_ok());
}

#[test]
fn test_login_returns_principal_and_capabilities() {
    let request: LoginRequest = LoginRequest {
        email: String::from("marcus@astrion.io"),
        password: String::from("lead123"),
    };

    let response: LoginResponse = login(&Authenticator::with_seed_accounts(), &request).unwrap();

    assert_eq!(response.principal.role, UserRole::Manager);
    assert_eq!(response.capabilities.can_view_employees, Capability::Allowed);
    assert_eq!(response.capabilities.can_edit_employee, Capability::Denied);
}

#[test]
fn test_login_failure_maps_to_authentication_failed() {
    let request: LoginRequest = LoginRequest {
        email: String::from("unknown@astrion.io"),
        password: String::from("admin123"),
    };

    let result: Result<LoginResponse, ApiError> =
        login(&Authenticator::with_seed_accounts(), &request);

    assert!(matches!(
        result,
        Err(ApiError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_resolve_requires_matching_role() {
    let authenticator: Authenticator = Authenticator::with_seed_accounts();

    assert!(authenticator.resolve("user-hr", UserRole::Hr).is_ok());
    assert!(matches!(
        authenticator.resolve("user-hr", UserRole::Admin),
        Err(AuthError::AuthenticationFailed { .. })
    ));
    assert!(matches!(
        authenticator.resolve("user-ghost", UserRole::Admin),
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_user_role_string_forms() {
    for role in UserRole::ALL {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
    assert!(UserRole::from_str("Admin").is_err());
}

#[test]
fn test_gate_without_principal_redirects_to_login() {
    assert_eq!(gate(None, Page::Dashboard), AccessDecision::RedirectToLogin);
    assert_eq!(gate(None, Page::Departments), AccessDecision::RedirectToLogin);
}

#[test]
fn test_gate_follows_page_table() {
    let admin: Principal = create_test_admin();
    let hr: Principal = create_test_hr();
    let manager: Principal = create_test_manager();
    let employee: Principal = create_test_employee();

    for page in [
        Page::Dashboard,
        Page::Employees,
        Page::NewEmployee,
        Page::EmployeeProfile,
        Page::EditEmployee,
        Page::Departments,
        Page::Operations,
    ] {
        assert_eq!(gate(Some(&admin), page), AccessDecision::Allowed);
        assert_eq!(gate(Some(&hr), page), AccessDecision::Allowed);
    }

    assert_eq!(gate(Some(&manager), Page::Employees), AccessDecision::Allowed);
    assert_eq!(gate(Some(&manager), Page::NewEmployee), AccessDecision::Allowed);
    assert_eq!(gate(Some(&manager), Page::Operations), AccessDecision::Allowed);
    assert_eq!(
        gate(Some(&manager), Page::EditEmployee),
        AccessDecision::RedirectToHome
    );
    assert_eq!(
        gate(Some(&manager), Page::Departments),
        AccessDecision::RedirectToHome
    );

    assert_eq!(gate(Some(&employee), Page::Dashboard), AccessDecision::Allowed);
    assert_eq!(
        gate(Some(&employee), Page::Employees),
        AccessDecision::RedirectToHome
    );
    assert_eq!(
        gate(Some(&employee), Page::Operations),
        AccessDecision::RedirectToHome
    );
}

#[test]
fn test_unauthorized_error_lists_required_roles() {
    let result: Result<(), AuthError> =
        AuthorizationService::authorize_manage_departments(&create_test_manager());

    assert_eq!(
        result,
        Err(AuthError::Unauthorized {
            action: String::from("manage_departments"),
            required_roles: String::from("admin, hr"),
        })
    );
}

#[test]
fn test_leave_decisions_exclude_employee_role() {
    assert!(AuthorizationService::authorize_decide_leave(&create_test_manager()).is_ok());
    assert!(AuthorizationService::authorize_decide_leave(&create_test_employee()).is_err());
}

#[test]
fn test_employee_capabilities_are_all_denied() {
    let capabilities: ConsoleCapabilities = compute_capabilities(&create_test_employee());

    assert_eq!(
        capabilities,
        ConsoleCapabilities {
            can_view_employees: Capability::Denied,
            can_create_employee: Capability::Denied,
            can_edit_employee: Capability::Denied,
            can_manage_departments: Capability::Denied,
            can_view_operations: Capability::Denied,
            can_decide_leave: Capability::Denied,
        }
    );
}

#[test]
fn test_capabilities_serialize_as_booleans() {
    let capabilities: ConsoleCapabilities = compute_capabilities(&create_test_manager());

    let json: serde_json::Value = serde_json::to_value(capabilities).unwrap();

    assert_eq!(json["can_view_employees"], serde_json::Value::Bool(true));
    assert_eq!(json["can_manage_departments"], serde_json::Value::Bool(false));
    assert_eq!(json["can_decide_leave"], serde_json::Value::Bool(true));
}
