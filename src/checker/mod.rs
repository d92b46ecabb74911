mod checklist;
mod result;

pub use checklist::{CheckSpec, Checklist, CompiledCheck, Tier, builtin_checks};
pub use result::{CheckOutcome, ChecklistReport};
