use tracing::{error, info, instrument};

use crate::clients::UserClient;
use crate::domain::{Registration, User, UserId, VendorProfile};
use crate::notice::Notice;
use crate::search;
use crate::user_actor::UserError;

/// Vendor and project-manager accounts. Administrators are never listed.
pub struct UserManager {
    client: UserClient,
    users: Vec<User>,
    query: String,
}

impl UserManager {
    pub fn new(client: UserClient) -> Self {
        Self { client, users: Vec::new(), query: String::new() }
    }

    pub async fn load(&mut self) {
        match self.client.list_users().await {
            Ok(users) => {
                self.users = users.into_iter().filter(|user| !user.is_admin()).collect();
                info!(count = self.users.len(), "Users loaded");
            }
            Err(e) => {
                error!(error = %e, "Failed to load users");
                self.users.clear();
            }
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&User> {
        search::filter(&self.users, &self.query)
    }

    /// Fetches one user fresh from the backend and returns its vendor profile.
    pub async fn vendor_details(&self, id: UserId) -> Result<VendorProfile, UserError> {
        let user = self.client.get_user(id).await?.ok_or(UserError::NotFound(id))?;
        user.vendor_details.ok_or(UserError::NotAVendor(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&mut self, id: UserId) -> Notice {
        let result = self.client.delete_user(id).await;
        if result.is_ok() {
            self.load().await;
        }
        Notice::outcome(&result, "User deleted.", "Failed to delete user.")
    }

    #[instrument(skip(self, registration))]
    pub async fn create_user(&mut self, registration: Registration) -> Notice {
        let result = self.client.register_user(registration).await;
        if result.is_ok() {
            self.load().await;
        }
        Notice::outcome(&result, "User created.", "Failed to create user.")
    }
}
