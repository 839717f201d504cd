use std::sync::Arc;

use actix_web::Error;

use crate::helpers::JsonResponse;
use crate::models::User;

/// Who is behind a request. The authentication middleware inserts exactly
/// one per request.
#[derive(Debug, Clone)]
pub enum Viewer {
    Anonymous,
    User(Arc<User>),
}

impl Viewer {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::User(user) => Some(user.as_ref()),
        }
    }

    /// The signed-in user, or a 401 for anonymous requests
    pub fn require(&self) -> Result<Arc<User>, Error> {
        match self {
            Self::Anonymous => Err(JsonResponse::<()>::build().unauthorized("Sign in required")),
            Self::User(user) => Ok(user.clone()),
        }
    }
}
