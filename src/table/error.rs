//! Errors surfaced by [`TableClient`](super::TableClient) operations.
//!
//! Store failures are carried as the store's own `SdkError`, one variant per
//! operation, and display exactly as the store reports them.

use aws_sdk_dynamodb::error::{BuildError, SdkError};
use aws_sdk_dynamodb::operation::{
    batch_get_item::BatchGetItemError,
    batch_write_item::{BatchWriteItemError, BatchWriteItemOutput},
    delete_item::{DeleteItemError, DeleteItemOutput},
    get_item::GetItemError,
    put_item::{PutItemError, PutItemOutput},
    query::QueryError,
    scan::ScanError,
    transact_get_items::TransactGetItemsError,
    transact_write_items::TransactWriteItemsError,
    update_item::{UpdateItemError, UpdateItemOutput},
};
use thiserror::Error;

/// Result type for table client operations
pub type Result<T, E = TableError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Get(#[from] SdkError<GetItemError>),

    #[error(transparent)]
    Put(#[from] SdkError<PutItemError>),

    #[error(transparent)]
    Delete(#[from] SdkError<DeleteItemError>),

    #[error(transparent)]
    Update(#[from] SdkError<UpdateItemError>),

    #[error(transparent)]
    Query(#[from] SdkError<QueryError>),

    #[error(transparent)]
    Scan(#[from] SdkError<ScanError>),

    #[error(transparent)]
    TransactGet(#[from] SdkError<TransactGetItemsError>),

    #[error(transparent)]
    TransactWrite(#[from] SdkError<TransactWriteItemsError>),

    #[error(transparent)]
    BatchGet(#[from] SdkError<BatchGetItemError>),

    #[error(transparent)]
    BatchWrite(#[from] SdkError<BatchWriteItemError>),

    /// A request was missing a member the store requires.
    #[error("Invalid request: {0}")]
    Build(#[from] BuildError),

    /// An item could not be converted to or from the caller's record type.
    #[error("Document conversion error: {0}")]
    Document(#[from] serde_dynamo::Error),

    /// The store applied a write, but what it returned could not be decoded
    /// into the caller's record type. `output` is the store's response.
    #[error("Write was applied but its response could not be decoded: {source}")]
    UndecodedWrite {
        source: serde_dynamo::Error,
        output: Box<AppliedWrite>,
    },
}

/// Store response of a write that succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedWrite {
    Put(PutItemOutput),
    Delete(DeleteItemOutput),
    Update(UpdateItemOutput),
    BatchWrite(BatchWriteItemOutput),
}

impl TableError {
    /// Returns true when the store rejected a put, delete or update because
    /// its condition expression evaluated to false.
    pub fn is_conditional_check_failed(&self) -> bool {
        match self {
            Self::Put(err) => err
                .as_service_error()
                .is_some_and(PutItemError::is_conditional_check_failed_exception),
            Self::Delete(err) => err
                .as_service_error()
                .is_some_and(DeleteItemError::is_conditional_check_failed_exception),
            Self::Update(err) => err
                .as_service_error()
                .is_some_and(UpdateItemError::is_conditional_check_failed_exception),
            _ => false,
        }
    }

    /// The store's response when the write itself succeeded and only
    /// decoding it failed.
    pub fn applied_write(&self) -> Option<&AppliedWrite> {
        match self {
            Self::UndecodedWrite { output, .. } => Some(&**output),
            _ => None,
        }
    }
}
