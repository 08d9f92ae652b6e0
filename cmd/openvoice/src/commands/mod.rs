mod fetch;
mod inputs;
mod schema;

pub use fetch::FetchCommand;
pub use inputs::InputsCommand;
pub use schema::SchemaCommand;
