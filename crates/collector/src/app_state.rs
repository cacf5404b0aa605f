use crate::event_log::EventLog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) events: EventLog,
}
