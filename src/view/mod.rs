pub mod render;
pub mod state;

pub use state::{OptionSlot, SubmitAttempt, ViewPhase, ViewState, VALIDATION_MESSAGE};

use crate::core::client::ComparisonClient;
use crate::domain::ports::GenerativeModel;
use std::time::Duration;

/// Form state bound to the client that answers its submissions.
pub struct ComparisonView<M: GenerativeModel> {
    state: ViewState,
    client: ComparisonClient<M>,
}

impl<M: GenerativeModel> ComparisonView<M> {
    pub fn new(client: ComparisonClient<M>) -> Self {
        Self {
            state: ViewState::new(),
            client,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn client(&self) -> &ComparisonClient<M> {
        &self.client
    }

    pub fn edit(&mut self, slot: OptionSlot, text: impl Into<String>) -> bool {
        self.state.set_option(slot, text)
    }

    pub fn reset(&mut self) -> bool {
        self.state.reset()
    }

    pub fn render(&self) -> String {
        render::render(&self.state, 0)
    }

    pub async fn submit(&mut self) -> ViewPhase {
        self.submit_with_progress(Duration::from_millis(100), |_, _| {})
            .await
    }

    /// Submits the form and calls `on_tick` with the loading state every
    /// `tick` until the comparison resolves.
    pub async fn submit_with_progress<F>(&mut self, tick: Duration, mut on_tick: F) -> ViewPhase
    where
        F: FnMut(&ViewState, usize),
    {
        let request = match self.state.begin_submit() {
            SubmitAttempt::Started(request) => request,
            SubmitAttempt::Invalid => {
                tracing::debug!("Submit rejected: an option is blank");
                return self.state.phase();
            }
            SubmitAttempt::Busy => return self.state.phase(),
        };

        let comparison = self.client.compare_request(request);
        tokio::pin!(comparison);

        let mut ticker = tokio::time::interval(tick);
        let mut frame = 0usize;
        let outcome = loop {
            tokio::select! {
                outcome = &mut comparison => break outcome,
                _ = ticker.tick() => {
                    on_tick(&self.state, frame);
                    frame = frame.wrapping_add(1);
                }
            }
        };

        self.state.resolve(outcome);
        self.state.phase()
    }
}
