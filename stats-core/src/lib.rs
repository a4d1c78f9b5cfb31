//! Fetch/rank pipeline behind the video comparison page.
//!
//! Everything here is renderer-agnostic: the orchestrator is generic over its
//! lookup, the ranker is pure, and the [`Dashboard`] controller owns all page
//! state through explicit transitions. The `frontend` crate binds this to the
//! YouTube Data API and a Yew view.

pub mod error;
pub mod fetch;
pub mod models;
pub mod rank;
pub mod refresh;
pub mod state;

pub use error::{FetchError, SubmitError};
pub use fetch::fetch_all;
pub use models::{RankedStat, VideoListing, VideoStat};
pub use rank::rank;
pub use refresh::{RefreshCycle, RefreshPhase, DEFAULT_REFRESH_INTERVAL};
pub use state::{Dashboard, IdSlot};
