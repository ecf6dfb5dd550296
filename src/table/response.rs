//! Typed views over the store's responses.
//!
//! Only the item-bearing field of each response changes type: it is decoded
//! into the caller's record type with `serde_dynamo`. Every other field is the
//! store's own value, passed through as is.

use aws_sdk_dynamodb::operation::{
    batch_get_item::BatchGetItemOutput as StoreBatchGetOutput,
    batch_write_item::BatchWriteItemOutput as StoreBatchWriteOutput,
    delete_item::DeleteItemOutput, get_item::GetItemOutput as StoreGetOutput,
    put_item::PutItemOutput, query::QueryOutput as StoreQueryOutput,
    scan::ScanOutput as StoreScanOutput,
    transact_get_items::TransactGetItemsOutput as StoreTransactGetOutput,
    update_item::UpdateItemOutput,
};
use aws_sdk_dynamodb::types::{ConsumedCapacity, ItemCollectionMetrics, KeysAndAttributes};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::table::{AttributeMap, Result, WriteRequest};

fn decode<T: DeserializeOwned>(item: Option<AttributeMap>) -> Result<Option<T>> {
    item.map(|item| serde_dynamo::from_item(item))
        .transpose()
        .map_err(Into::into)
}

fn decode_all<T: DeserializeOwned>(items: Option<Vec<AttributeMap>>) -> Result<Option<Vec<T>>> {
    items
        .map(|items| serde_dynamo::from_items(items))
        .transpose()
        .map_err(Into::into)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetOutput<T> {
    pub item: Option<T>,
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl<T: DeserializeOwned> TryFrom<StoreGetOutput> for GetOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: StoreGetOutput) -> Result<Self> {
        Ok(Self {
            item: decode(output.item)?,
            consumed_capacity: output.consumed_capacity,
        })
    }
}

/// Response of a put, delete or update, with the returned attributes typed.
///
/// `attributes` is only populated when the request asked for return values.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributesOutput<T> {
    pub attributes: Option<T>,
    pub consumed_capacity: Option<ConsumedCapacity>,
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

pub type PutOutput<T> = AttributesOutput<T>;
pub type DeleteOutput<T> = AttributesOutput<T>;
pub type UpdateOutput<T> = AttributesOutput<T>;

impl<T: DeserializeOwned> AttributesOutput<T> {
    fn decode(
        attributes: Option<AttributeMap>,
        consumed_capacity: Option<ConsumedCapacity>,
        item_collection_metrics: Option<ItemCollectionMetrics>,
    ) -> Result<Self> {
        Ok(Self {
            attributes: decode(attributes)?,
            consumed_capacity,
            item_collection_metrics,
        })
    }
}

impl<T: DeserializeOwned> TryFrom<PutItemOutput> for AttributesOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: PutItemOutput) -> Result<Self> {
        Self::decode(
            output.attributes,
            output.consumed_capacity,
            output.item_collection_metrics,
        )
    }
}

impl<T: DeserializeOwned> TryFrom<DeleteItemOutput> for AttributesOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: DeleteItemOutput) -> Result<Self> {
        Self::decode(
            output.attributes,
            output.consumed_capacity,
            output.item_collection_metrics,
        )
    }
}

impl<T: DeserializeOwned> TryFrom<UpdateItemOutput> for AttributesOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: UpdateItemOutput) -> Result<Self> {
        Self::decode(
            output.attributes,
            output.consumed_capacity,
            output.item_collection_metrics,
        )
    }
}

/// One page of a query or scan.
///
/// A present `last_evaluated_key` means the caller may ask for another page;
/// nothing here follows it automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsOutput<T> {
    pub items: Option<Vec<T>>,
    pub count: i32,
    pub scanned_count: i32,
    pub last_evaluated_key: Option<AttributeMap>,
    pub consumed_capacity: Option<ConsumedCapacity>,
}

pub type QueryOutput<T> = ItemsOutput<T>;
pub type ScanOutput<T> = ItemsOutput<T>;

impl<T: DeserializeOwned> TryFrom<StoreQueryOutput> for ItemsOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: StoreQueryOutput) -> Result<Self> {
        Ok(Self {
            items: decode_all(output.items)?,
            count: output.count,
            scanned_count: output.scanned_count,
            last_evaluated_key: output.last_evaluated_key,
            consumed_capacity: output.consumed_capacity,
        })
    }
}

impl<T: DeserializeOwned> TryFrom<StoreScanOutput> for ItemsOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: StoreScanOutput) -> Result<Self> {
        Ok(Self {
            items: decode_all(output.items)?,
            count: output.count,
            scanned_count: output.scanned_count,
            last_evaluated_key: output.last_evaluated_key,
            consumed_capacity: output.consumed_capacity,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactGetOutput<T> {
    /// One entry per requested key, in request order. An entry is `None`
    /// when the key had no item.
    pub responses: Option<Vec<Option<T>>>,
    pub consumed_capacity: Option<Vec<ConsumedCapacity>>,
}

impl<T: DeserializeOwned> TryFrom<StoreTransactGetOutput> for TransactGetOutput<T> {
    type Error = crate::table::TableError;

    fn try_from(output: StoreTransactGetOutput) -> Result<Self> {
        let responses = output
            .responses
            .map(|responses| {
                responses
                    .into_iter()
                    .map(|response| decode(response.item))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(Self {
            responses,
            consumed_capacity: output.consumed_capacity,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchGetOutput<T> {
    /// Items found for this client's table.
    pub items: Option<Vec<T>>,
    pub unprocessed_keys: Option<HashMap<String, KeysAndAttributes>>,
    pub consumed_capacity: Option<Vec<ConsumedCapacity>>,
}

impl<T: DeserializeOwned> BatchGetOutput<T> {
    pub(crate) fn from_store(output: StoreBatchGetOutput, table_name: &str) -> Result<Self> {
        let items = output
            .responses
            .and_then(|mut responses| responses.remove(table_name));

        Ok(Self {
            items: decode_all(items)?,
            unprocessed_keys: output.unprocessed_keys,
            consumed_capacity: output.consumed_capacity,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchWriteOutput<T> {
    /// Writes for this client's table that the store did not apply.
    ///
    /// Store requests with neither a put nor a delete are left out, so this
    /// can be shorter than the store's own list.
    pub unprocessed_items: Option<Vec<WriteRequest<T>>>,
    pub item_collection_metrics: Option<HashMap<String, Vec<ItemCollectionMetrics>>>,
    pub consumed_capacity: Option<Vec<ConsumedCapacity>>,
}

impl<T: DeserializeOwned> BatchWriteOutput<T> {
    pub(crate) fn from_store(output: StoreBatchWriteOutput, table_name: &str) -> Result<Self> {
        let unprocessed_items = output
            .unprocessed_items
            .and_then(|mut unprocessed| unprocessed.remove(table_name))
            .map(|requests| {
                requests
                    .into_iter()
                    .filter_map(|request| WriteRequest::from_store_request(request).transpose())
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(Self {
            unprocessed_items,
            item_collection_metrics: output.item_collection_metrics,
            consumed_capacity: output.consumed_capacity,
        })
    }
}
