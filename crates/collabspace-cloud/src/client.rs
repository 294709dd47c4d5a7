use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::backend_api_url;
use crate::space::CollabSpace;
use crate::validate::SignInForm;

/// HTTP client for the Collabspace backend.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new() -> Self {
        Self::with_base_url(backend_api_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Password sign-in. The server mails a one-time password; the session
    /// token only arrives after [`Self::verify_otp`].
    pub async fn sign_in(&self, form: &SignInForm) -> Result<SignInResponse> {
        if let Err(errors) = form.validate() {
            anyhow::bail!("invalid sign-in form: {}", errors[0].message);
        }
        let url = format!("{}/users/signin", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await?
            .error_for_status()?
            .json::<SignInResponse>()
            .await?;
        Ok(resp)
    }

    /// Confirm the emailed one-time password and obtain a session.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<AuthSession> {
        if let Some(err) = crate::validate::validate_otp(code) {
            anyhow::bail!("{}", err.message);
        }
        let url = format!("{}/users/verify-otp", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "otp": code }))
            .send()
            .await?
            .error_for_status()?
            .json::<OtpResponse>()
            .await?;
        Ok(AuthSession {
            email: email.to_string(),
            token: resp.token,
        })
    }

    /// Fetch the metadata for one collab space.
    pub async fn fetch_space(&self, session: &AuthSession, id: Uuid) -> Result<CollabSpace> {
        let url = format!("{}/collab/space/{}", self.base_url, id);
        let space = self
            .http
            .get(&url)
            .bearer_auth(&session.token)
            .send()
            .await?
            .error_for_status()?
            .json::<CollabSpace>()
            .await?;
        Ok(space)
    }

    /// Create a collab space. `language` accepts loose aliases ("js", "py")
    /// and is normalized before it reaches the backend.
    pub async fn create_space(
        &self,
        session: &AuthSession,
        name: &str,
        language: &str,
    ) -> Result<CollabSpace> {
        let language = collabspace_core::language::normalize(language);
        let url = format!("{}/collab/create", self.base_url);
        let space = self
            .http
            .post(&url)
            .bearer_auth(&session.token)
            .json(&serde_json::json!({ "name": name, "language": language }))
            .send()
            .await?
            .error_for_status()?
            .json::<CollabSpace>()
            .await?;
        Ok(space)
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SignInResponse {
    pub email: String,
    /// True when the server mailed a one-time password that still needs
    /// confirmation before a session token is issued.
    pub otp_required: bool,
}

#[derive(Debug, Deserialize)]
struct OtpResponse {
    token: String,
}
