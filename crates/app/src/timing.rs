use dioxus::prelude::*;

/// Wait `ms` milliseconds on the renderer's event loop.
///
/// Goes through the JS bridge, which every renderer provides.
pub async fn sleep_ms(ms: u64) {
    let js = format!("await new Promise(resolve => setTimeout(resolve, {ms})); return true;");
    if let Err(e) = document::eval(&js).await {
        tracing::debug!(error = ?e, ms, "timer eval failed");
    }
}

/// Ticket counter for debounced work: each new edit takes a ticket, and only
/// the holder of the latest one may apply its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    latest: u64,
}

impl Debounce {
    pub fn next_ticket(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}
