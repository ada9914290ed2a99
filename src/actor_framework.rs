use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (State owned by one actor, changed only through actions)
// =============================================================================

/// Trait for state that is owned by a single [`ResourceActor`].
///
/// All mutation goes through [`Entity::handle_action`], one action at a time,
/// in the order the actions were sent.
pub trait Entity: Send + 'static {
    type Action: Send + Debug;
    type ActionResult: Send + Debug;
    /// Read-only view handed out to clients.
    type Snapshot: Send + Debug;

    fn snapshot(&self) -> Self::Snapshot;

    // --- Lifecycle Hooks ---

    fn on_start(&mut self) {}
    fn on_stop(&mut self) {}

    // --- Action Handler ---

    fn handle_action(&mut self, action: Self::Action) -> Self::ActionResult;
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the reply")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        respond_to: Response<T::Snapshot>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    resource: T,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, resource: T) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, resource };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client has been dropped, then returns the final state.
    pub async fn run(mut self) -> T {
        info!(entity = std::any::type_name::<T>(), "Actor starting");
        self.resource.on_start();
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { respond_to } => {
                    let _ = respond_to.send(self.resource.snapshot());
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(?action, "Handling action");
                    let result = self.resource.handle_action(action);
                    let _ = respond_to.send(result);
                }
            }
        }
        self.resource.on_stop();
        info!(entity = std::any::type_name::<T>(), "Actor stopped");
        self.resource
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would require `T: Clone`.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Tally {
        count: u32,
        started: bool,
    }

    #[derive(Debug)]
    enum TallyAction {
        Add(u32),
        Reset,
    }

    impl Entity for Tally {
        type Action = TallyAction;
        type ActionResult = u32;
        type Snapshot = u32;

        fn snapshot(&self) -> u32 {
            self.count
        }

        fn on_start(&mut self) {
            self.started = true;
        }

        fn handle_action(&mut self, action: TallyAction) -> u32 {
            match action {
                TallyAction::Add(n) => self.count += n,
                TallyAction::Reset => self.count = 0,
            }
            self.count
        }
    }

    #[tokio::test]
    async fn test_actions_apply_in_order() {
        let (actor, client) = ResourceActor::new(4, Tally::default());
        let handle = tokio::spawn(actor.run());

        assert_eq!(client.perform_action(TallyAction::Add(2)).await, Ok(2));
        assert_eq!(client.perform_action(TallyAction::Add(3)).await, Ok(5));
        assert_eq!(client.get().await, Ok(5));
        assert_eq!(client.perform_action(TallyAction::Reset).await, Ok(0));

        drop(client);
        let final_state = handle.await.unwrap();
        assert!(final_state.started);
        assert_eq!(final_state.count, 0);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::new(4, Tally::default());
        drop(actor);
        assert_eq!(client.get().await, Err(FrameworkError::ActorClosed));
    }
}
