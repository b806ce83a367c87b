//! Value shapes mirroring the Jira REST API.
//!
//! All entities are immutable snapshots of remote JSON, built fresh per
//! request and discarded once the response is emitted. Only the fields the
//! tools and the epic roll-up depend on are typed; everything else the
//! remote returns is preserved through `extra` pass-through maps so that
//! re-serialized tool output stays faithful to the API.

mod issue;
mod project;
mod search;

pub use issue::*;
pub use project::*;
pub use search::*;
