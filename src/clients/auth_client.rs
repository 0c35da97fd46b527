use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::FrameworkError;
use crate::transport::{Ack, HttpTransport, Route};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Answer of the admin login endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginReply {
    pub valid: bool,
    pub token: Option<String>,
    pub role: Option<String>,
    pub message: Option<String>,
}

/// Talks to the authentication endpoints directly. Login and logout carry no
/// resource identity, so they bypass the resource services.
#[derive(Clone)]
pub struct AuthClient {
    transport: HttpTransport,
}

impl AuthClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginReply, FrameworkError> {
        debug!("Sending request");
        let credentials = Credentials { email, password };
        let reply = self
            .transport
            .send(&Route::post("authen/adminLogin"), Some(&credentials))
            .await?;
        let login: LoginReply =
            serde_json::from_value(reply.body).map_err(|e| FrameworkError::Decode(e.to_string()))?;
        if login.valid {
            info!(role = ?login.role, "Login accepted");
        } else {
            warn!(message = ?login.message, "Login refused");
        }
        Ok(login)
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<Ack, FrameworkError> {
        debug!("Sending request");
        let reply = self.transport.send::<()>(&Route::get("logout"), None).await?;
        info!("Logged out");
        Ok(Ack::from_body(&reply.body))
    }
}
