use crate::responder::ErrorResponder;

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) responder: ErrorResponder,
}

impl AppState {
    pub fn new(responder: ErrorResponder) -> Self {
        Self { responder }
    }
}
