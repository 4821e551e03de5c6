/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,
    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Log an error, the same way every failed action is reported.
    pub fn add_error(&mut self, err: impl std::fmt::Display) {
        tracing::warn!("{err}");
        self.add_log(format!("ERROR: {err}"));
    }
}
