use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::ProductId;
use crate::session_actor::{ActionOutcome, Credentials, Session, SessionAction, SessionError, SessionSnapshot};

/// Client for interacting with the Session actor.
///
/// Cheap to clone; every clone talks to the same session.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }

    /// Sends any session action and waits for its outcome.
    #[instrument(skip(self))]
    pub async fn perform(&self, action: SessionAction) -> Result<ActionOutcome, SessionError> {
        debug!("Sending request");
        self.inner.perform_action(action).await.map_err(SessionError::from)
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        debug!("Sending request");
        self.inner.get().await.map_err(SessionError::from)
    }
}

session_action!(SessionClient => fn submit_login(credentials: Credentials) as SessionAction::SubmitLogin(credentials));
session_action!(SessionClient => fn select_product(id: ProductId) as SessionAction::SelectProduct(id));
session_action!(SessionClient => fn increment_row(id: ProductId) as SessionAction::IncrementRow(id));
session_action!(SessionClient => fn decrement_row(id: ProductId) as SessionAction::DecrementRow(id));
session_action!(SessionClient => fn increment_quantity() as SessionAction::IncrementQuantity);
session_action!(SessionClient => fn decrement_quantity() as SessionAction::DecrementQuantity);
session_action!(SessionClient => fn clear_selection() as SessionAction::ClearSelection);
session_action!(SessionClient => fn confirm() as SessionAction::Confirm);
session_action!(SessionClient => fn back() as SessionAction::Back);
