//! API Module
//!
//! HTTP handlers and routing for the service.
//!
//! # Endpoints
//! - `POST /api/export/csv` - Records to a `;`-delimited CSV attachment
//! - `POST /api/export/txt` - Text to a TXT attachment
//! - `POST /api/validate` - Email / matricula / positive value checks
//! - `PUT /api/cache`, `DELETE /api/cache` - Store a value, clear everything
//! - `GET /api/cache/:key`, `DELETE /api/cache/:key` - Read or remove a key
//! - `GET /api/cache/stats` - Cache statistics
//! - `POST /api/charts/:kind` - Chart.js configuration for pie/bar/line
//! - `POST /api/widgets/scan` - Tooltip/popover widgets declared by an HTML page
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
