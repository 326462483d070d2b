pub mod api_client;
pub mod suggestions;

pub use api_client::ApiClient;
pub use suggestions::{
    should_fetch_suggestions, Sequencer, MIN_SUGGESTION_QUERY_LEN, SUGGESTIONS_DEBOUNCE_MS,
};
