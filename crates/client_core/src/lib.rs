//! Stateful core of the portfolio: the locally persisted profile, page and
//! modal navigation, and the contact form submission.

pub mod editor;
pub mod navigation;
pub mod profile;
pub mod submission;

pub use editor::ProfileEditor;
pub use navigation::{
    reduce, ModalKind, NavAction, NavigationController, NavigationError, NavigationState, Page,
};
pub use profile::{ProfileStore, StoreError, PROFILE_SLOT_KEY, SNAPSHOT_FILE_NAME};
pub use submission::{
    SubmissionClient, SubmissionError, SubmissionEvent, SubmissionState,
    CONNECTIVITY_FAILURE_MESSAGE, DEFAULT_SENT_RESET_DELAY,
};

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod profile_tests;

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod navigation_tests;

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod submission_tests;
