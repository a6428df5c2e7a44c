//! # tgkit-dispatch
//!
//! The update dispatch loop: long polling with offset tracking, sequential
//! handler-chain execution, exponential retry backoff, and cooperative
//! cancellation. Consumes tgkit-api through the [`UpdateSource`] seam; the
//! getUpdates binding is the only one the loop itself calls.

pub mod backoff;
pub mod chain;
pub mod poller;
pub mod source;

pub use backoff::{Backoff, BackoffConfig};
pub use chain::{HandlerChain, NoOpHandler};
pub use poller::{Dispatcher, PollerConfig};
pub use source::UpdateSource;
