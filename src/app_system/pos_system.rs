use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::{AppError, Config};
use crate::actor_framework::ResourceActor;
use crate::catalog::Catalog;
use crate::clients::SessionClient;
use crate::permissions::{request_missing, PermissionNotice, PermissionProvider, StaticPermissions};
use crate::session_actor::Session;

/// The running application: the session actor plus the startup permission
/// request.
///
/// Responsible for starting the actor, wiring the client, and shutdown.
pub struct PosSystem {
    pub session_client: SessionClient,
    pub notices: mpsc::Receiver<PermissionNotice>,
    session_handle: JoinHandle<Session>,
    permission_handle: JoinHandle<()>,
}

impl PosSystem {
    pub fn new(config: &Config) -> Self {
        let provider = StaticPermissions::new(config.permissions_granted);
        Self::with_permissions(config, Catalog::furniture(), Arc::new(provider))
    }

    pub fn with_permissions(
        config: &Config,
        catalog: Catalog,
        permissions: Arc<dyn PermissionProvider>,
    ) -> Self {
        info!(products = catalog.len(), tax_rate = %config.tax_rate, "Starting POS system");

        // 1. Session actor owns all navigation and selection state
        let session = Session::new(catalog, config.calculator());
        let (session_actor, session_resource_client) = ResourceActor::new(config.mailbox_size, session);
        let session_client = SessionClient::new(session_resource_client);
        let session_handle = tokio::spawn(session_actor.run());

        // 2. Permission request runs on its own and only ever produces a notice
        let (notice_tx, notices) = mpsc::channel(1);
        let api_level = config.platform_api_level;
        let permission_handle = tokio::spawn(async move {
            let answer = tokio::task::spawn_blocking(move || request_missing(permissions.as_ref(), api_level)).await;
            match answer {
                Ok(Some(notice)) => {
                    let _ = notice_tx.send(notice).await;
                }
                Ok(None) => {}
                Err(e) => error!(error = %e, "Permission request failed"),
            }
        });

        Self {
            session_client,
            notices,
            session_handle,
            permission_handle,
        }
    }

    /// Closes the session and waits for the actor to finish.
    ///
    /// Returns the final session state.
    pub async fn shutdown(self) -> Result<Session, AppError> {
        info!("Shutting down system...");
        // The actor stops once its last client is gone.
        drop(self.session_client);
        drop(self.notices);

        if let Err(e) = self.permission_handle.await {
            error!("Permission task failed: {:?}", e);
        }
        let session = self.session_handle.await.map_err(|e| {
            error!("Actor task failed: {:?}", e);
            AppError::ActorTask(e)
        })?;

        info!("System shutdown complete.");
        Ok(session)
    }
}
