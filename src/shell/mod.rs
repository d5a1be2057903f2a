// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the configured storage backend.
// - Wire the backend into use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
