/// Generates a typed shortcut for one session action on top of `perform`.
macro_rules! session_action {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) as $action:expr) => {
        #[allow(dead_code)]
        impl $client {
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$crate::session_actor::ActionOutcome, $crate::session_actor::SessionError> {
                self.perform($action).await
            }
        }
    };
}
