pub mod card_selector;
pub mod progress;
pub mod weak_set;

pub use card_selector::{CardSelector, EmptyReason, Selection, StudySession, StudyStatus, StudyView};
pub use weak_set::WeakSetTracker;
