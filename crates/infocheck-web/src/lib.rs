//! infocheck-web — server-rendered front-end for InfoCheck.
//! Renders the home, Q&A and inference pages, and forwards submitted text to
//! the external search/answering/inference backends.

pub mod config;
pub mod handlers;
pub mod nav;
pub mod router;
pub mod state;
pub mod templates;
pub mod view;
