use serde_json::Value;

use crate::actor_framework::{FrameworkError, Resource};
use crate::domain::{Registration, User, UserId};
use crate::transport::Route;

impl Resource for User {
    type Id = UserId;
    type CreatePayload = Registration;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    const NAME: &'static str = "user";
    const LIST_KEY: Option<&'static str> = Some("users");
    const ITEM_KEY: Option<&'static str> = Some("user");

    fn list_route() -> Option<Route> {
        Some(Route::get("user/get-users"))
    }

    fn get_route(id: &UserId) -> Option<Route> {
        Some(Route::get(format!("user/get-user/{}", id)))
    }

    /// New accounts go through the auth service's register endpoint.
    fn create_route() -> Option<Route> {
        Some(Route::post("authen/register"))
    }

    fn delete_route(id: &UserId) -> Option<Route> {
        Some(Route::delete(format!("user/delete-user/{}", id)))
    }

    /// Currently, no custom actions are defined for users.
    fn action_route(_id: &UserId, _action: &()) -> Option<Route> {
        None
    }

    fn decode_action(_action: &(), _body: Value) -> Result<(), FrameworkError> {
        Ok(())
    }
}
