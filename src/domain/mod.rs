//! Domain layer - Timestamps, naming templates and retention rules

pub mod retention;
pub mod template;
pub mod timestamp;

pub use retention::{keep_count, select_retained, select_tier, KeepTier, RetentionPolicy};
pub use template::{NamingTemplate, PLACEHOLDER};
pub use timestamp::{FieldMask, Timestamp, TIMESTAMP_WIDTH};
