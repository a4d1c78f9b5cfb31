use std::rc::Rc;

use stats_core::{Dashboard, FetchError, VideoStat};
use yew::prelude::*;

/// Everything the page renders from, behind one reducer so the interval
/// callback and fetch completions always act on current state.
#[derive(Clone, PartialEq)]
pub struct CompareStore {
    pub dashboard: Dashboard,
    /// Bumped whenever a fetch cycle becomes due; the fetch effect keys on it.
    pub request_seq: u64,
    pub request_ids: Vec<String>,
    /// Bumped whenever a transient notice is raised, so repeated identical
    /// notices still restart the dismiss timer.
    pub notice_seq: u64,
    pub notice: Option<String>,
}

impl Default for CompareStore {
    fn default() -> Self {
        Self {
            dashboard: Dashboard::new(),
            request_seq: 0,
            request_ids: Vec::new(),
            notice_seq: 0,
            notice: None,
        }
    }
}

pub enum CompareAction {
    SetInput(usize, String),
    AddSlot,
    RemoveSlot(usize),
    Submit,
    Tick,
    Outcomes(Vec<Result<VideoStat, FetchError>>),
    StopAutoRefresh,
    DismissNotice,
}

impl Reducible for CompareStore {
    type Action = CompareAction;

    fn reduce(self: Rc<Self>, action: CompareAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CompareAction::SetInput(index, value) => next.dashboard.set_input(index, value),
            CompareAction::AddSlot => next.dashboard.add_slot(),
            CompareAction::RemoveSlot(index) => next.dashboard.remove_slot(index),
            CompareAction::Submit => match next.dashboard.submit() {
                Ok(ids) => next.queue_fetch(ids),
                Err(e) => next.raise_notice(e.to_string()),
            },
            CompareAction::Tick => {
                if let Some(ids) = next.dashboard.tick() {
                    next.queue_fetch(ids);
                }
            }
            CompareAction::Outcomes(outcomes) => next.dashboard.apply_results(outcomes),
            CompareAction::StopAutoRefresh => next.dashboard.stop_auto_refresh(),
            CompareAction::DismissNotice => next.notice = None,
        }
        next.into()
    }
}

impl CompareStore {
    fn queue_fetch(&mut self, ids: Vec<String>) {
        self.request_seq += 1;
        self.request_ids = ids;
    }

    fn raise_notice(&mut self, message: String) {
        self.notice_seq += 1;
        self.notice = Some(message);
    }
}
