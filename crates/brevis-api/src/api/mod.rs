//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_summaries, liveness, post_save_summary, post_summarize};
pub use routes::{create_router, run_server, shutdown_signal};
pub use state::AppState;
