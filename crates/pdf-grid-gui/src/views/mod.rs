pub mod merge;

pub use merge::{MergeState, NoticeKind, show_merge};
