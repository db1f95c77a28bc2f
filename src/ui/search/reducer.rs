//! Reducer for the search state machine.
//!
//! | state            | intent          | next                                      |
//! |------------------|-----------------|-------------------------------------------|
//! | any              | Commit          | images cleared, page 1, fetching page 1   |
//! | idle, has more   | NextPage        | page + 1, fetching that page              |
//! | fetching         | NextPage        | unchanged                                 |
//! | fetching tag T   | FetchSucceeded T| results appended, idle                    |
//! | fetching tag T   | FetchFailed T   | images untouched, idle                    |
//! | any other tag    | Fetch*          | unchanged (stale response)                |

use crate::fetch::RequestTag;
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::SearchState;

/// Pure transition function. The caller starts the request named by
/// `in_flight` whenever it changes.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::InsertChar(ch) => {
                state.input.push(ch);
                state
            }
            SearchIntent::DeleteChar => {
                state.input.pop();
                state
            }
            SearchIntent::SetInput(text) => {
                state.input = text;
                state
            }
            SearchIntent::ClearInput => {
                state.input.clear();
                state
            }

            SearchIntent::Commit => {
                let query = state.input.clone();
                state.generation += 1;
                state.committed = Some(query.clone());
                state.images.clear();
                state.page = 1;
                state.total = 0;
                state.total_pages = None;
                // A request still running for the previous generation is
                // superseded here; its outcome will not match.
                state.in_flight = Some(RequestTag {
                    generation: state.generation,
                    query,
                    page: 1,
                });
                state
            }

            SearchIntent::NextPage => {
                if state.in_flight.is_some() || !state.has_more() {
                    return state;
                }
                let Some(query) = state.committed.clone() else {
                    return state;
                };
                state.page = state.page.saturating_add(1);
                state.in_flight = Some(RequestTag {
                    generation: state.generation,
                    query,
                    page: state.page,
                });
                state
            }

            SearchIntent::FetchSucceeded { tag, page } => {
                if state.in_flight.as_ref() != Some(&tag) {
                    return state;
                }
                state.images.extend(page.results);
                state.total = page.total;
                state.total_pages = page.total_pages;
                state.in_flight = None;
                state
            }

            SearchIntent::FetchFailed { tag } => {
                if state.in_flight.as_ref() == Some(&tag) {
                    state.in_flight = None;
                }
                state
            }
        }
    }
}
