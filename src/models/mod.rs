//! Simulation domain models.
//!
//! Provides the passive data types shared by every policy: the process
//! record and the timeline of run segments.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Gantt chart |
//! |------------|-------------|-------------|
//! | Process | PCB / job | Row label |
//! | Segment | Dispatch | Bar |
//! | Timeline | Execution trace | Chart |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Segment, Timeline, IDLE_LABEL};
