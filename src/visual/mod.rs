//! Frame-mood verification
//!
//! Lets the host read back the canvas and check, programmatically, that the
//! scene still looks like the exhibition piece: near-black background,
//! emerald body, warm gold/red accents.

pub mod metrics;

pub use metrics::{analyze_frame, FrameAnalyzer, FrameMetrics, MoodCriteria};
