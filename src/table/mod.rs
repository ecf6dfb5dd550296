//! # Table Module
//!
//! A typed, table-scoped layer over the DynamoDB client.
//!
//! ## Components
//!
//! - `TableClient`: forwards get/put/delete/update/query/scan, transactional
//!   reads and writes, and batch reads and writes to the store, adding its
//!   table name to each request.
//! - `DocumentStore`: the store contract the client forwards to, implemented
//!   for `aws_sdk_dynamodb::Client`.
//! - Request descriptors (`GetRequest`, `PutRequest`, ...): operation
//!   parameters with no table name.
//! - Typed outputs (`GetOutput<T>`, `QueryOutput<T>`, ...): store responses
//!   with items decoded into the caller's record type.
//! - `Item`: a builder for keys, items and expression values.
//! - `TableClientOptions`: the table name plus the store configuration.
//!
//! ## Usage
//!
//! Store configuration comes from the usual AWS sources when using
//! `TableClient::from_env`:
//!
//! - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` (and optionally `AWS_SESSION_TOKEN`)
//! - `AWS_REGION`
//! - `AWS_ENDPOINT_URL` for DynamoDB Local or another custom endpoint
//!
//! These are read by `aws-config`; this module reads no environment itself.

mod client;
mod config;
mod error;
mod item;
mod request;
mod response;
mod store;

pub use client::TableClient;
pub use config::TableClientOptions;
pub use error::{AppliedWrite, Result, TableError};
pub use item::{AttributeMap, Item};
pub use request::{
    BatchGetRequest, BatchWriteRequest, ConditionCheckClause, DeleteClause, DeleteRequest,
    GetRequest, PutClause, PutRequest, QueryRequest, ScanRequest, TransactGet,
    TransactGetRequest, TransactWrite, TransactWriteRequest, UpdateClause, UpdateRequest,
    WriteRequest,
};
pub use response::{
    AttributesOutput, BatchGetOutput, BatchWriteOutput, DeleteOutput, GetOutput, ItemsOutput,
    PutOutput, QueryOutput, ScanOutput, TransactGetOutput, UpdateOutput,
};
pub use store::DocumentStore;
