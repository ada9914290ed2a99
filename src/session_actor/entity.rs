use tracing::info;

use crate::actor_framework::Entity;

use super::{ActionOutcome, Session, SessionAction, SessionSnapshot};

impl Entity for Session {
    type Action = SessionAction;
    type ActionResult = ActionOutcome;
    type Snapshot = SessionSnapshot;

    fn snapshot(&self) -> SessionSnapshot {
        Session::snapshot(self)
    }

    fn on_start(&mut self) {
        info!(screen = %self.current_screen(), "Session started");
    }

    fn on_stop(&mut self) {
        info!(screen = %self.current_screen(), "Session ended");
    }

    /// Routes each interaction to the matching session operation.
    fn handle_action(&mut self, action: SessionAction) -> ActionOutcome {
        match action {
            SessionAction::SubmitLogin(credentials) => self.submit_login(credentials),
            SessionAction::SelectProduct(id) => self.select_product(id),
            SessionAction::IncrementRow(id) => self.adjust_row(id, true),
            SessionAction::DecrementRow(id) => self.adjust_row(id, false),
            SessionAction::IncrementQuantity => self.adjust_selected(true),
            SessionAction::DecrementQuantity => self.adjust_selected(false),
            SessionAction::ClearSelection => self.clear_selection(),
            SessionAction::Confirm => self.confirm(),
            SessionAction::Back => self.back(),
        }
    }
}
