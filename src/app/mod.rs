mod root;
mod state;

pub(crate) use state::{FetchState, can_submit};

pub use root::App;
