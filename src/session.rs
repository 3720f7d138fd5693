/// Identity the bridge acts for.
///
/// Passed explicitly into every feature service and the location tracker;
/// there is no ambient "current user" in this crate. Created once after
/// sign-in and cloned into whatever holds the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Backend user id of the signed-in user.
    pub user_id: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
