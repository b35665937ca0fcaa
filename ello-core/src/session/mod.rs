//! The home page session: one-shot catalog load plus the browsing state
//! layered on top of it.

mod home;
mod load;

pub use home::{BookCard, HomePage, PageView};
pub use load::{spawn_fetch, FetchOutcome, LiveToken, LoadState, LoadStatus, Liveness, PendingFetch};
