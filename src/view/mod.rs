// caller-owned presentation state over a generated mapping

pub mod state;

pub use state::{sorted_by_source, sorted_by_target, ViewState};
