//! Reference table of the API's endpoints, as shown on the documentation page.
//!
//! Authentication requirements are documentation only: nothing in the
//! service enforces them, and the auth endpoints listed here are not routed.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::{response::ApiResponse, state::AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthRequirement {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Required")]
    Required,
    #[serde(rename = "Admin only")]
    AdminOnly,
    #[serde(rename = "Admin or Owner")]
    AdminOrOwner,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub endpoint: &'static str,
    pub description: &'static str,
    pub authentication: AuthRequirement,
}

pub const ENDPOINTS: [EndpointDoc; 7] = [
    EndpointDoc {
        method: "GET",
        endpoint: "/api/users",
        description: "Retrieve all users",
        authentication: AuthRequirement::Required,
    },
    EndpointDoc {
        method: "GET",
        endpoint: "/api/users/:id",
        description: "Retrieve user by ID",
        authentication: AuthRequirement::Required,
    },
    EndpointDoc {
        method: "POST",
        endpoint: "/api/users",
        description: "Create new user with password hashing",
        authentication: AuthRequirement::AdminOnly,
    },
    EndpointDoc {
        method: "PUT",
        endpoint: "/api/users/:id",
        description: "Update existing user",
        authentication: AuthRequirement::AdminOrOwner,
    },
    EndpointDoc {
        method: "DELETE",
        endpoint: "/api/users/:id",
        description: "Delete user",
        authentication: AuthRequirement::AdminOnly,
    },
    EndpointDoc {
        method: "POST",
        endpoint: "/api/auth/login",
        description: "User login with credential validation",
        authentication: AuthRequirement::None,
    },
    EndpointDoc {
        method: "POST",
        endpoint: "/api/auth/logout",
        description: "User logout",
        authentication: AuthRequirement::Required,
    },
];

pub fn router() -> Router<AppState> {
    Router::new().route("/docs", get(list_endpoints))
}

pub async fn list_endpoints() -> Json<ApiResponse<&'static [EndpointDoc]>> {
    Json(ApiResponse::ok(
        &ENDPOINTS[..],
        format!("{} endpoints documented", ENDPOINTS.len()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_reference_table() {
        let rows: Vec<(&str, &str)> = ENDPOINTS.iter().map(|e| (e.method, e.endpoint)).collect();
        assert_eq!(
            rows,
            vec![
                ("GET", "/api/users"),
                ("GET", "/api/users/:id"),
                ("POST", "/api/users"),
                ("PUT", "/api/users/:id"),
                ("DELETE", "/api/users/:id"),
                ("POST", "/api/auth/login"),
                ("POST", "/api/auth/logout"),
            ]
        );
    }

    #[test]
    fn auth_column_serializes_as_display_text() {
        let json = serde_json::to_value(ENDPOINTS[3]).unwrap();
        assert_eq!(json["authentication"], "Admin or Owner");
        let json = serde_json::to_value(ENDPOINTS[5]).unwrap();
        assert_eq!(json["authentication"], "None");
    }

    #[tokio::test]
    async fn handler_wraps_catalog() {
        let Json(res) = list_endpoints().await;
        assert!(res.success);
        assert_eq!(res.data.map(|d| d.len()), Some(7));
        assert_eq!(res.message.as_deref(), Some("7 endpoints documented"));
    }
}
