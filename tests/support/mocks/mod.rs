// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
pub mod content;
pub mod storage;
pub mod time;

pub use content::ScriptedSource;
pub use storage::{FailingStore, SlowStore};
pub use time::{FixedClock, fixed_now};
