//! Intents for the search state machine.

use crate::api::SearchPage;
use crate::fetch::{FetchOutcome, RequestTag};
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum SearchIntent {
    /// Append a character to the live input.
    InsertChar(char),
    /// Remove the last character of the live input.
    DeleteChar,
    /// Replace the live input (paste).
    SetInput(String),
    ClearInput,

    /// User requested a search for the current input.
    ///
    /// Resets the gallery and issues page 1 in the same transition.
    Commit,

    /// Scroll sentinel saw the last card. Ignored while a request is in flight
    /// or after the last page.
    NextPage,

    FetchSucceeded { tag: RequestTag, page: SearchPage },
    FetchFailed { tag: RequestTag },
}

impl Intent for SearchIntent {}

impl From<FetchOutcome> for SearchIntent {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Succeeded { tag, page } => SearchIntent::FetchSucceeded { tag, page },
            FetchOutcome::Failed { tag, .. } => SearchIntent::FetchFailed { tag },
        }
    }
}
