use crate::error::{FetchError, SubmitError};
use crate::models::{RankedStat, VideoStat};
use crate::rank::rank;
use crate::refresh::{RefreshCycle, DEFAULT_REFRESH_INTERVAL};

/// One identifier slot in the submission form, with the result or error of
/// its latest lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdSlot {
    pub input: String,
    pub stat: Option<VideoStat>,
    pub error: Option<FetchError>,
}

impl IdSlot {
    fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }
}

/// Owns everything the page mutates: the identifier slots and the
/// auto-refresh cycle. The rendering layer only calls transitions and reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    slots: Vec<IdSlot>,
    refresh: RefreshCycle,
}

impl Dashboard {
    /// Starts with a single blank slot, like the form renders initially.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_interval(interval: u32) -> Self {
        Self {
            slots: vec![IdSlot::default()],
            refresh: RefreshCycle::new(interval),
        }
    }

    pub fn slots(&self) -> &[IdSlot] {
        &self.slots
    }

    pub fn refresh(&self) -> &RefreshCycle {
        &self.refresh
    }

    pub fn set_input(&mut self, index: usize, value: String) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.input = value;
        }
    }

    pub fn add_slot(&mut self) {
        self.slots.push(IdSlot::default());
    }

    /// Removes slot `index` together with its result and error. Unrelated
    /// slots keep their entries. Removing the last slot stops auto-refresh.
    pub fn remove_slot(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
        if self.slots.is_empty() {
            self.refresh.stop();
        }
    }

    /// Starts a fetch cycle by hand: drops blank slots, clears previous
    /// results, and returns the identifiers to look up. With nothing but
    /// blank slots the state is left untouched and no lookup happens.
    pub fn submit(&mut self) -> Result<Vec<String>, SubmitError> {
        self.begin_cycle()
    }

    /// Advances the auto-refresh countdown. `Some(ids)` when a new fetch
    /// cycle is due. A due cycle that finds no non-blank identifiers stops
    /// auto-refresh instead of looping on notifications.
    pub fn tick(&mut self) -> Option<Vec<String>> {
        if !self.refresh.tick() {
            return None;
        }
        match self.begin_cycle() {
            Ok(ids) => Some(ids),
            Err(SubmitError::NoIdentifiers) => {
                self.refresh.stop();
                None
            }
        }
    }

    /// Writes batch outcomes back to the slots by position and completes the
    /// refresh cycle. Surplus outcomes (slots removed mid-flight) are
    /// discarded.
    pub fn apply_results(&mut self, outcomes: Vec<Result<VideoStat, FetchError>>) {
        for (slot, outcome) in self.slots.iter_mut().zip(outcomes) {
            match outcome {
                Ok(stat) => {
                    slot.stat = Some(stat);
                    slot.error = None;
                }
                Err(error) => {
                    slot.stat = None;
                    slot.error = Some(error);
                }
            }
        }
        self.refresh.fetch_finished();
    }

    /// Successful slots through the ranker, highest total first.
    pub fn ranked(&self) -> Vec<RankedStat> {
        rank(self
            .slots
            .iter()
            .filter_map(|slot| slot.stat.clone())
            .collect())
    }

    pub fn stop_auto_refresh(&mut self) {
        self.refresh.stop();
    }

    fn begin_cycle(&mut self) -> Result<Vec<String>, SubmitError> {
        let kept: Vec<IdSlot> = self
            .slots
            .iter()
            .filter(|slot| !slot.is_blank())
            .map(|slot| IdSlot {
                input: slot.input.clone(),
                ..IdSlot::default()
            })
            .collect();
        if kept.is_empty() {
            return Err(SubmitError::NoIdentifiers);
        }
        let ids = kept.iter().map(|slot| slot.input.clone()).collect();
        self.slots = kept;
        self.refresh.begin_fetch();
        Ok(ids)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
