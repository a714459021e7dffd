//! HTTP surface for Marquee.
//!
//! A thin axum layer over the movie registry, the research entity and the
//! poster store. Handlers translate requests into entity operations and return
//! the resulting state as JSON; no state lives here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod routes;
mod server;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
