mod app_state;
mod routes;

pub use app_state::AppState;
pub use routes::routes;
