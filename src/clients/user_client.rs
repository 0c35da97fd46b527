use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Registration, User, ROLE_PROJECT_MANAGER, ROLE_VENDOR};
use crate::transport::Ack;
use crate::user_actor::UserError;

/// Client for interacting with the User resource service.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

fn require(value: &str, field: &str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        Err(UserError::ValidationError(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

/// Checks a registration before it is sent. Vendors must carry their
/// company name, address and phone number.
pub fn validate_registration(registration: &Registration) -> Result<(), UserError> {
    require(&registration.username, "Username")?;
    require(&registration.email, "Email")?;
    require(&registration.password, "Password")?;

    match registration.role.as_str() {
        ROLE_VENDOR => {
            require(registration.vendor_name.as_deref().unwrap_or(""), "Vendor name")?;
            require(registration.address.as_deref().unwrap_or(""), "Address")?;
            require(registration.phone_number.as_deref().unwrap_or(""), "Phone number")?;
            Ok(())
        }
        ROLE_PROJECT_MANAGER => Ok(()),
        other => Err(UserError::ValidationError(format!("Role {:?} cannot be registered here", other))),
    }
}

impl UserClient {
    /// Registers a new vendor or project manager account.
    #[instrument(skip(self, registration), fields(username = %registration.username, role = %registration.role))]
    pub async fn register_user(&self, registration: Registration) -> Result<Ack, UserError> {
        debug!("Sending request");
        validate_registration(&registration)?;
        Ok(self.inner.create(registration).await?)
    }
}
