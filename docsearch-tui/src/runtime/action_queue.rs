use docsearch::{DebounceToken, SearchOutcome};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub(super) enum Action {
    Navigate { path: String },
    RunSearch { token: DebounceToken },
    ApplySearch { outcome: SearchOutcome },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
