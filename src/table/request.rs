//! Request descriptors.
//!
//! Each descriptor holds one operation's parameters without a table name.
//! [`TableClient`](super::TableClient) turns a descriptor into the store's
//! native input by placing its own table name where that operation expects it.
//! Unset optional fields stay unset on the outgoing input.

use aws_sdk_dynamodb::operation::{
    batch_get_item::BatchGetItemInput, batch_write_item::BatchWriteItemInput,
    delete_item::DeleteItemInput, get_item::GetItemInput, put_item::PutItemInput,
    query::QueryInput, scan::ScanInput, transact_get_items::TransactGetItemsInput,
    transact_write_items::TransactWriteItemsInput, update_item::UpdateItemInput,
};
use aws_sdk_dynamodb::types::{
    AttributeValue, ConditionCheck, Delete, DeleteRequest as StoreDeleteRequest, Get,
    KeysAndAttributes, Put, PutRequest as StorePutRequest, ReturnConsumedCapacity,
    ReturnItemCollectionMetrics, ReturnValue, ReturnValuesOnConditionCheckFailure, Select,
    TransactGetItem, TransactWriteItem, Update, WriteRequest as StoreWriteRequest,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::table::{AttributeMap, Result};

fn insert_entry<V>(map: &mut Option<HashMap<String, V>>, key: impl Into<String>, value: V) {
    map.get_or_insert_with(HashMap::new).insert(key.into(), value);
}

// --- Single-item operations ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRequest {
    pub key: AttributeMap,
    pub consistent_read: Option<bool>,
    pub projection_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl GetRequest {
    pub fn new(key: impl Into<AttributeMap>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = Some(consistent_read);
        self
    }

    pub fn projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.projection_expression = Some(expression.into());
        self
    }

    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_names, placeholder, name.into());
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<GetItemInput> {
        GetItemInput::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .set_consistent_read(self.consistent_read)
            .set_projection_expression(self.projection_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutRequest {
    pub item: AttributeMap,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values: Option<ReturnValue>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl PutRequest {
    pub fn new(item: impl Into<AttributeMap>) -> Self {
        Self {
            item: item.into(),
            ..Self::default()
        }
    }

    /// Builds a put of a serializable record.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        Ok(Self::new(serde_dynamo::to_item::<_, AttributeMap>(record)?))
    }

    pub fn condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_names, placeholder, name.into());
        self
    }

    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_values, placeholder, value);
        self
    }

    pub fn return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<PutItemInput> {
        PutItemInput::builder()
            .table_name(table_name)
            .set_item(Some(self.item))
            .set_condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values(self.return_values)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .set_return_item_collection_metrics(self.return_item_collection_metrics)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteRequest {
    pub key: AttributeMap,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values: Option<ReturnValue>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl DeleteRequest {
    pub fn new(key: impl Into<AttributeMap>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_names, placeholder, name.into());
        self
    }

    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_values, placeholder, value);
        self
    }

    pub fn return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<DeleteItemInput> {
        DeleteItemInput::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .set_condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values(self.return_values)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .set_return_item_collection_metrics(self.return_item_collection_metrics)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequest {
    pub key: AttributeMap,
    pub update_expression: Option<String>,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values: Option<ReturnValue>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl UpdateRequest {
    pub fn new(key: impl Into<AttributeMap>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn update_expression(mut self, expression: impl Into<String>) -> Self {
        self.update_expression = Some(expression.into());
        self
    }

    pub fn condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_names, placeholder, name.into());
        self
    }

    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_values, placeholder, value);
        self
    }

    pub fn return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<UpdateItemInput> {
        UpdateItemInput::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .set_update_expression(self.update_expression)
            .set_condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values(self.return_values)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .set_return_item_collection_metrics(self.return_item_collection_metrics)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

// --- Query and Scan ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRequest {
    pub index_name: Option<String>,
    pub key_condition_expression: Option<String>,
    pub filter_expression: Option<String>,
    pub projection_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub select: Option<Select>,
    pub limit: Option<i32>,
    pub consistent_read: Option<bool>,
    pub scan_index_forward: Option<bool>,
    pub exclusive_start_key: Option<AttributeMap>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl QueryRequest {
    pub fn new(key_condition_expression: impl Into<String>) -> Self {
        Self {
            key_condition_expression: Some(key_condition_expression.into()),
            ..Self::default()
        }
    }

    pub fn index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    pub fn filter_expression(mut self, expression: impl Into<String>) -> Self {
        self.filter_expression = Some(expression.into());
        self
    }

    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_names, placeholder, name.into());
        self
    }

    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_values, placeholder, value);
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resumes from a previous page's `last_evaluated_key`.
    pub fn exclusive_start_key(mut self, key: impl Into<AttributeMap>) -> Self {
        self.exclusive_start_key = Some(key.into());
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<QueryInput> {
        QueryInput::builder()
            .table_name(table_name)
            .set_index_name(self.index_name)
            .set_key_condition_expression(self.key_condition_expression)
            .set_filter_expression(self.filter_expression)
            .set_projection_expression(self.projection_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_select(self.select)
            .set_limit(self.limit)
            .set_consistent_read(self.consistent_read)
            .set_scan_index_forward(self.scan_index_forward)
            .set_exclusive_start_key(self.exclusive_start_key)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanRequest {
    pub index_name: Option<String>,
    pub filter_expression: Option<String>,
    pub projection_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub select: Option<Select>,
    pub limit: Option<i32>,
    pub consistent_read: Option<bool>,
    pub exclusive_start_key: Option<AttributeMap>,
    /// Parallel scan segment, used together with `total_segments`.
    pub segment: Option<i32>,
    pub total_segments: Option<i32>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl ScanRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_expression(mut self, expression: impl Into<String>) -> Self {
        self.filter_expression = Some(expression.into());
        self
    }

    pub fn projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.projection_expression = Some(expression.into());
        self
    }

    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_names, placeholder, name.into());
        self
    }

    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        insert_entry(&mut self.expression_attribute_values, placeholder, value);
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn exclusive_start_key(mut self, key: impl Into<AttributeMap>) -> Self {
        self.exclusive_start_key = Some(key.into());
        self
    }

    pub fn segment(mut self, segment: i32, total_segments: i32) -> Self {
        self.segment = Some(segment);
        self.total_segments = Some(total_segments);
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<ScanInput> {
        ScanInput::builder()
            .table_name(table_name)
            .set_index_name(self.index_name)
            .set_filter_expression(self.filter_expression)
            .set_projection_expression(self.projection_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_select(self.select)
            .set_limit(self.limit)
            .set_consistent_read(self.consistent_read)
            .set_exclusive_start_key(self.exclusive_start_key)
            .set_segment(self.segment)
            .set_total_segments(self.total_segments)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .build()
            .map_err(Into::into)
    }
}

// --- Transactions ---

/// One read inside a transactional get.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactGet {
    pub key: AttributeMap,
    pub projection_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
}

impl TransactGet {
    pub fn new(key: impl Into<AttributeMap>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    fn into_item(self, table_name: &str) -> Result<TransactGetItem> {
        let get = Get::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .set_projection_expression(self.projection_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .build()?;
        Ok(TransactGetItem::builder().get(get).build())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactGetRequest {
    pub items: Vec<TransactGet>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl From<Vec<TransactGet>> for TransactGetRequest {
    fn from(items: Vec<TransactGet>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

impl TransactGetRequest {
    pub(crate) fn into_input(self, table_name: &str) -> Result<TransactGetItemsInput> {
        let items = self
            .items
            .into_iter()
            .map(|get| get.into_item(table_name))
            .collect::<Result<Vec<_>>>()?;

        TransactGetItemsInput::builder()
            .set_transact_items(Some(items))
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionCheckClause {
    pub key: AttributeMap,
    pub condition_expression: String,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl ConditionCheckClause {
    fn into_clause(self, table_name: &str) -> Result<ConditionCheck> {
        ConditionCheck::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutClause {
    pub item: AttributeMap,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl PutClause {
    fn into_clause(self, table_name: &str) -> Result<Put> {
        Put::builder()
            .table_name(table_name)
            .set_item(Some(self.item))
            .set_condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteClause {
    pub key: AttributeMap,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl DeleteClause {
    fn into_clause(self, table_name: &str) -> Result<Delete> {
        Delete::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .set_condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateClause {
    pub key: AttributeMap,
    pub update_expression: String,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<AttributeMap>,
    pub return_values_on_condition_check_failure: Option<ReturnValuesOnConditionCheckFailure>,
}

impl UpdateClause {
    fn into_clause(self, table_name: &str) -> Result<Update> {
        Update::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .update_expression(self.update_expression)
            .set_condition_expression(self.condition_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                self.return_values_on_condition_check_failure,
            )
            .build()
            .map_err(Into::into)
    }
}

/// One write inside a transactional write.
///
/// Only the clauses that are set are sent, and each of them gets the table
/// name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactWrite {
    pub condition_check: Option<ConditionCheckClause>,
    pub put: Option<PutClause>,
    pub delete: Option<DeleteClause>,
    pub update: Option<UpdateClause>,
}

impl TransactWrite {
    pub fn condition_check(clause: ConditionCheckClause) -> Self {
        Self {
            condition_check: Some(clause),
            ..Self::default()
        }
    }

    pub fn put(clause: PutClause) -> Self {
        Self {
            put: Some(clause),
            ..Self::default()
        }
    }

    pub fn delete(clause: DeleteClause) -> Self {
        Self {
            delete: Some(clause),
            ..Self::default()
        }
    }

    pub fn update(clause: UpdateClause) -> Self {
        Self {
            update: Some(clause),
            ..Self::default()
        }
    }

    fn into_item(self, table_name: &str) -> Result<TransactWriteItem> {
        Ok(TransactWriteItem::builder()
            .set_condition_check(
                self.condition_check
                    .map(|clause| clause.into_clause(table_name))
                    .transpose()?,
            )
            .set_put(
                self.put
                    .map(|clause| clause.into_clause(table_name))
                    .transpose()?,
            )
            .set_delete(
                self.delete
                    .map(|clause| clause.into_clause(table_name))
                    .transpose()?,
            )
            .set_update(
                self.update
                    .map(|clause| clause.into_clause(table_name))
                    .transpose()?,
            )
            .build())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactWriteRequest {
    pub items: Vec<TransactWrite>,
    /// Idempotency token passed through to the store.
    pub client_request_token: Option<String>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl From<Vec<TransactWrite>> for TransactWriteRequest {
    fn from(items: Vec<TransactWrite>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

impl TransactWriteRequest {
    pub(crate) fn into_input(self, table_name: &str) -> Result<TransactWriteItemsInput> {
        let items = self
            .items
            .into_iter()
            .map(|write| write.into_item(table_name))
            .collect::<Result<Vec<_>>>()?;

        TransactWriteItemsInput::builder()
            .set_transact_items(Some(items))
            .set_client_request_token(self.client_request_token)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .set_return_item_collection_metrics(self.return_item_collection_metrics)
            .build()
            .map_err(Into::into)
    }
}

// --- Batches ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchGetRequest {
    pub keys: Vec<AttributeMap>,
    pub consistent_read: Option<bool>,
    pub projection_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl BatchGetRequest {
    pub fn new<K: Into<AttributeMap>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = Some(consistent_read);
        self
    }

    pub fn projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.projection_expression = Some(expression.into());
        self
    }

    pub(crate) fn into_input(self, table_name: &str) -> Result<BatchGetItemInput> {
        let keys_and_attributes = KeysAndAttributes::builder()
            .set_keys(Some(self.keys))
            .set_consistent_read(self.consistent_read)
            .set_projection_expression(self.projection_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .build()?;

        BatchGetItemInput::builder()
            .request_items(table_name, keys_and_attributes)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .build()
            .map_err(Into::into)
    }
}

/// A put or delete inside a batch write, with puts carrying a typed record.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRequest<T> {
    Put { item: T },
    Delete { key: AttributeMap },
}

impl<T> WriteRequest<T> {
    pub fn put(item: T) -> Self {
        Self::Put { item }
    }

    pub fn delete(key: impl Into<AttributeMap>) -> Self {
        Self::Delete { key: key.into() }
    }
}

impl<T: Serialize> WriteRequest<T> {
    fn into_store_request(self) -> Result<StoreWriteRequest> {
        let request = match self {
            Self::Put { item } => {
                let put = StorePutRequest::builder()
                    .set_item(Some(serde_dynamo::to_item::<_, AttributeMap>(&item)?))
                    .build()?;
                StoreWriteRequest::builder().put_request(put).build()
            }
            Self::Delete { key } => {
                let delete = StoreDeleteRequest::builder().set_key(Some(key)).build()?;
                StoreWriteRequest::builder().delete_request(delete).build()
            }
        };
        Ok(request)
    }
}

impl<T: DeserializeOwned> WriteRequest<T> {
    /// Converts a store write request back into a typed one.
    ///
    /// Returns `None` for a request that carries neither a put nor a delete.
    /// A request carrying both is read as its put.
    pub(crate) fn from_store_request(request: StoreWriteRequest) -> Result<Option<Self>> {
        match (request.put_request, request.delete_request) {
            (Some(put), delete) => {
                if delete.is_some() {
                    warn!("Write request carries both a put and a delete; keeping the put");
                }
                Ok(Some(Self::Put {
                    item: serde_dynamo::from_item(put.item)?,
                }))
            }
            (None, Some(delete)) => Ok(Some(Self::Delete { key: delete.key })),
            (None, None) => {
                warn!("Dropping write request with neither a put nor a delete");
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchWriteRequest<T> {
    pub request_items: Vec<WriteRequest<T>>,
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl<T> BatchWriteRequest<T> {
    pub fn new(request_items: impl IntoIterator<Item = WriteRequest<T>>) -> Self {
        Self {
            request_items: request_items.into_iter().collect(),
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
        }
    }
}

impl<T: Serialize> BatchWriteRequest<T> {
    pub(crate) fn into_input(self, table_name: &str) -> Result<BatchWriteItemInput> {
        let requests = self
            .request_items
            .into_iter()
            .map(WriteRequest::into_store_request)
            .collect::<Result<Vec<_>>>()?;

        BatchWriteItemInput::builder()
            .request_items(table_name, requests)
            .set_return_consumed_capacity(self.return_consumed_capacity)
            .set_return_item_collection_metrics(self.return_item_collection_metrics)
            .build()
            .map_err(Into::into)
    }
}
