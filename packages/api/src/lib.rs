//! # API crate — Supabase client bindings for the BalkanX landing page
//!
//! A thin typed client for the hosted backend-as-a-service. The landing page
//! only reads three tables and issues two auth calls; everything else
//! (validation, aggregation, lifecycle) lives on the hosted side.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Sign-in / sign-up request and response types, role tag |
//! | [`config`] | Project URL and anon key, compile-time overridable |
//! | [`models`] | Row types for `categories`, `projects`, `profiles` |
//! | [`query`] | Read-only PostgREST query builder |
//!
//! ## Entry points
//!
//! [`client`] returns the process-wide [`Client`] (lazy singleton). The three
//! canned fetches — [`fetch_categories`], [`fetch_open_projects`],
//! [`fetch_top_freelancers`] — encode the fixed filter/sort/limit contract of
//! each landing section.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod auth;
pub mod config;
mod error;
pub mod models;
pub mod query;

pub use auth::{AuthUser, Role, Session, SignUpMetadata, SignUpParams};
pub use config::Config;
pub use error::Error;
pub use models::{BudgetType, Category, ClientProfile, FreelancerProfile, Project};
pub use query::{Order, Query};

/// HTTP client bound to one Supabase project.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Execute a read query, deserializing the JSON array of rows.
    pub async fn rows<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, Error> {
        let url = format!(
            "{}/{}",
            self.config.url.trim_end_matches('/'),
            query.to_path()
        );
        tracing::debug!(%url, "rest query");

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Password sign-in. The service's failure message comes back verbatim as
    /// [`Error::Backend`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let url = format!("{}/token?grant_type=password", self.config.auth_url());
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Register a new account. On success the service sends a confirmation
    /// email with a link targeting `params.redirect_to`; no session is
    /// established here.
    pub async fn sign_up(&self, params: &SignUpParams) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
            data: &'a SignUpMetadata,
        }

        let url = format!("{}/signup", self.config.auth_url());
        let response = self
            .http
            .post(&url)
            .query(&[("redirect_to", params.redirect_to.as_str())])
            .header("apikey", &self.config.anon_key)
            .json(&Body {
                email: &params.email,
                password: &params.password,
                data: &params.metadata,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        Ok(())
    }
}

async fn backend_error(response: reqwest::Response) -> Error {
    let status = response.status();
    let body: auth::ErrorBody = response.json().await.unwrap_or_default();
    Error::Backend(body.into_message(status))
}

static CLIENT: OnceLock<Client> = OnceLock::new();

/// The process-wide client for the configured project.
pub fn client() -> &'static Client {
    CLIENT.get_or_init(|| Client::new(Config::default()))
}

/// All categories, alphabetical.
pub async fn fetch_categories() -> Result<Vec<Category>, Error> {
    client()
        .rows(&Query::table("categories").order("name", Order::Asc))
        .await
}

/// The five most recently posted open projects, with the client columns
/// embedded for display.
pub async fn fetch_open_projects() -> Result<Vec<Project>, Error> {
    client()
        .rows(
            &Query::table("projects")
                .select(
                    "*,profiles!projects_client_id_fkey(first_name,last_name,company_name,location)",
                )
                .eq("status", "open")
                .order("created_at", Order::Desc)
                .limit(5),
        )
        .await
}

/// Top freelancers: best rated first, completed-project count as tiebreaker.
/// Profiles with no completed projects never rank.
pub async fn fetch_top_freelancers() -> Result<Vec<FreelancerProfile>, Error> {
    client()
        .rows(
            &Query::table("profiles")
                .eq("role", Role::Freelancer.as_str())
                .gt("projects_completed", 0)
                .order("rating", Order::Desc)
                .order("projects_completed", Order::Desc)
                .limit(8),
        )
        .await
}
