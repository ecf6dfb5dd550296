//! Typed, table-scoped access to DynamoDB.
//!
//! [`TableClient`] is bound to a single table. It adds that table's name to
//! every request and decodes response items into the caller's record type.
//! Everything else is left to the wrapped `aws_sdk_dynamodb::Client`.

pub mod logging;
pub mod table;

pub use aws_sdk_dynamodb::types::AttributeValue;
pub use table::*;
