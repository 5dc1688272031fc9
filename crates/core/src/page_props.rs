//! Data contract between server-rendered routes and client views.
//!
//! Every view receives a [`PageProps`]: the authenticated user, an optional
//! one-time flash message and the routing table the client uses to build
//! URLs. The types derive `ts_rs::TS`, so `cargo test` writes matching
//! TypeScript declarations to `bindings/`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{DbId, Timestamp};

/// Props shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageProps {
    pub auth: Auth,
    pub flash: Option<Flash>,
    pub routes: RouteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Auth {
    pub user: PageUser,
}

/// Identity of the signed-in user as seen by views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageUser {
    #[ts(type = "number")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_verified_at: Option<Timestamp>,
    /// Preferred notification category, if the user picked one.
    pub notification_type: Option<String>,
}

/// A message shown once on the next rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Flash {
    pub message: String,
    pub kind: FlashKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FlashKind {
    Success,
    Error,
    Warning,
    Info,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FlashKind::Success,
        }
    }
}

/// Named routes the client may link to, plus where the client currently is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteConfig {
    /// Absolute base URL of the application.
    pub url: String,
    pub port: Option<u16>,
    /// Default values for route parameters.
    pub defaults: BTreeMap<String, serde_json::Value>,
    pub routes: BTreeMap<String, RouteDefinition>,
    /// Path the client is rendering, e.g. `/customers/12`.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteDefinition {
    /// Path template such as `/api/v1/customers/{id}`.
    pub uri: String,
    pub methods: Vec<String>,
    /// Placeholder names appearing in `uri`, in order.
    pub parameters: Vec<String>,
}

impl RouteDefinition {
    pub fn new(uri: &str, methods: &[&str]) -> Self {
        Self {
            uri: uri.to_string(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
            parameters: path_parameters(uri),
        }
    }
}

impl RouteConfig {
    pub fn new(url: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            url: url.into(),
            port,
            defaults: BTreeMap::new(),
            routes: BTreeMap::new(),
            location: "/".to_string(),
        }
    }

    pub fn route(mut self, name: &str, uri: &str, methods: &[&str]) -> Self {
        self.routes
            .insert(name.to_string(), RouteDefinition::new(uri, methods));
        self
    }

    /// Copy of this config positioned at `location`.
    pub fn at(&self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self.clone()
        }
    }
}

/// Extract `{name}` placeholders from a path template.
fn path_parameters(uri: &str) -> Vec<String> {
    uri.split('/')
        .filter_map(|seg| seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
        .map(str::to_string)
        .collect()
}
