//! # Runtime Config Service
//!
//! Publishes the frontend's [`ClientConfig`] so the compiled WASM bundle can
//! be pointed at a different universities API without rebuilding it.
//!
//! ## Registered Routes:
//!
//! *   **`GET /config.json`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns `{ "api_base": "..." }` built from
//!       `UNIVERSITIES_API_BASE`.

mod get;

use actix_web::web::{get, resource};
use actix_web::Resource;

/// Path the frontend requests on startup.
const CONFIG_PATH: &str = "/config.json";

pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(get::process))
}
