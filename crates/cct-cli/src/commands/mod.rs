//! Command implementations.

pub mod analyze;
pub mod schema;

pub use self::analyze::execute_analyze;
pub use self::schema::execute_schema;
