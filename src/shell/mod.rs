// Composition root.
//
// Responsibilities
// - Read settings from the environment.
// - Instantiate the in-memory document database and the system clock.
// - Wire them into the entry store, timers and editor shared by the HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
