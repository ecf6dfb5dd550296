use aws_sdk_dynamodb::operation::transact_write_items::TransactWriteItemsOutput;
use aws_sdk_dynamodb::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};

use crate::table::{
    AppliedWrite, BatchGetOutput, BatchGetRequest, BatchWriteOutput, BatchWriteRequest,
    DeleteOutput, DeleteRequest, DocumentStore, GetOutput, GetRequest, PutOutput, PutRequest,
    QueryOutput, QueryRequest, Result, ScanOutput, ScanRequest, TableClientOptions, TableError,
    TransactGetOutput, TransactGetRequest, TransactWriteRequest, UpdateOutput, UpdateRequest,
};

/// Typed client bound to a single DynamoDB table.
///
/// Every operation takes a request without a table name, fills in the
/// client's table name where the store expects it, makes exactly one store
/// call and returns the store's response with its item payload decoded into
/// the caller's `T`.
///
/// # Tables and items
///
/// A table is a collection of items, and each item is a collection of
/// attributes. Tables are schema-less apart from the primary key, so the
/// record type `T` is chosen per call rather than per client. `T` is decoded
/// with `serde_dynamo` and is not otherwise checked against the table.
///
/// # Batches and transactions
///
/// Batch and transactional calls only ever touch this client's table. Every
/// sub-request of a `transact_get`, `transact_write`, `batch_get` or
/// `batch_write` is addressed to the same table name.
///
/// # Errors
///
/// Store failures come back unchanged inside [`TableError`], one variant per
/// operation. Nothing is retried here; retry and timeout behaviour is whatever
/// the store client was configured with.
///
/// A write whose response does not decode into `T` still happened. It fails
/// with [`TableError::UndecodedWrite`], which keeps the store's response.
///
/// # Example
///
/// ```no_run
/// use dynamodb_table_client::{GetRequest, Item, PutRequest, TableClient};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Product {
///     category: String,
///     product_name: String,
///     price: f64,
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let products = TableClient::from_env("products").await;
///
/// let phone = Product {
///     category: "Electronics".into(),
///     product_name: "Smartphone".into(),
///     price: 599.99,
/// };
/// products.put::<Product>(PutRequest::from_record(&phone)?).await?;
///
/// let key = Item::new()
///     .set_string("category", "Electronics")
///     .set_string("product_name", "Smartphone");
/// let found = products.get::<Product>(GetRequest::new(key)).await?;
/// assert!(found.item.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TableClient<S = Client> {
    table_name: String,
    store: S,
}

impl TableClient<Client> {
    /// Creates a client for `table_name` from a shared SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig, table_name: impl Into<String>) -> Self {
        Self::with_store(Client::new(sdk_config), table_name)
    }

    /// Creates a client whose store is built from `options.client_config`
    /// exactly as given.
    pub fn from_options(options: TableClientOptions) -> Self {
        let (table_name, client_config) = options.into_parts();
        Self::with_store(Client::from_conf(client_config), table_name)
    }

    /// Creates a client using the standard AWS environment and profile
    /// configuration chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self::new(&sdk_config, table_name)
    }
}

impl<S: DocumentStore> TableClient<S> {
    pub fn with_store(store: S, table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            store,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The underlying store client.
    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Item Operations ---

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn get<T: DeserializeOwned>(&self, request: GetRequest) -> Result<GetOutput<T>> {
        let input = request.into_input(&self.table_name)?;
        debug!("Dispatching GetItem");
        let output = self.store.get_item(input).await.map_err(log_failure)?;
        GetOutput::try_from(output)
    }

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn put<T: DeserializeOwned>(&self, request: PutRequest) -> Result<PutOutput<T>> {
        let input = request.into_input(&self.table_name)?;
        debug!("Dispatching PutItem");
        let output = self.store.put_item(input).await.map_err(log_failure)?;
        decode_applied(output, PutOutput::try_from, AppliedWrite::Put)
    }

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn delete<T: DeserializeOwned>(
        &self,
        request: DeleteRequest,
    ) -> Result<DeleteOutput<T>> {
        let input = request.into_input(&self.table_name)?;
        debug!("Dispatching DeleteItem");
        let output = self.store.delete_item(input).await.map_err(log_failure)?;
        decode_applied(output, DeleteOutput::try_from, AppliedWrite::Delete)
    }

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn update<T: DeserializeOwned>(
        &self,
        request: UpdateRequest,
    ) -> Result<UpdateOutput<T>> {
        let input = request.into_input(&self.table_name)?;
        debug!("Dispatching UpdateItem");
        let output = self.store.update_item(input).await.map_err(log_failure)?;
        decode_applied(output, UpdateOutput::try_from, AppliedWrite::Update)
    }

    // --- Query and Scan Operations ---

    /// Fetches one page of query results.
    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn query<T: DeserializeOwned>(&self, request: QueryRequest) -> Result<QueryOutput<T>> {
        let input = request.into_input(&self.table_name)?;
        debug!(index = ?input.index_name, "Dispatching Query");
        let output = self.store.query(input).await.map_err(log_failure)?;
        QueryOutput::try_from(output)
    }

    /// Fetches one page of scan results.
    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn scan<T: DeserializeOwned>(&self, request: ScanRequest) -> Result<ScanOutput<T>> {
        let input = request.into_input(&self.table_name)?;
        debug!(index = ?input.index_name, "Dispatching Scan");
        let output = self.store.scan(input).await.map_err(log_failure)?;
        ScanOutput::try_from(output)
    }

    // --- Transactions ---

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn transact_get<T: DeserializeOwned>(
        &self,
        request: impl Into<TransactGetRequest>,
    ) -> Result<TransactGetOutput<T>> {
        let input = request.into().into_input(&self.table_name)?;
        debug!(
            items = input.transact_items.as_ref().map_or(0, Vec::len),
            "Dispatching TransactGetItems"
        );
        let output = self
            .store
            .transact_get_items(input)
            .await
            .map_err(log_failure)?;
        TransactGetOutput::try_from(output)
    }

    /// Applies the writes atomically. The store's response is returned as is.
    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn transact_write(
        &self,
        request: impl Into<TransactWriteRequest>,
    ) -> Result<TransactWriteItemsOutput> {
        let input = request.into().into_input(&self.table_name)?;
        debug!(
            items = input.transact_items.as_ref().map_or(0, Vec::len),
            "Dispatching TransactWriteItems"
        );
        let output = self
            .store
            .transact_write_items(input)
            .await
            .map_err(log_failure)?;
        Ok(output)
    }

    // --- Batch Operations ---

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn batch_get<T: DeserializeOwned>(
        &self,
        request: BatchGetRequest,
    ) -> Result<BatchGetOutput<T>> {
        debug!(keys = request.keys.len(), "Dispatching BatchGetItem");
        let input = request.into_input(&self.table_name)?;
        let output = self
            .store
            .batch_get_item(input)
            .await
            .map_err(log_failure)?;
        BatchGetOutput::from_store(output, &self.table_name)
    }

    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn batch_write<T: Serialize + DeserializeOwned>(
        &self,
        request: BatchWriteRequest<T>,
    ) -> Result<BatchWriteOutput<T>> {
        debug!(
            requests = request.request_items.len(),
            "Dispatching BatchWriteItem"
        );
        let input = request.into_input(&self.table_name)?;
        let output = self
            .store
            .batch_write_item(input)
            .await
            .map_err(log_failure)?;
        decode_applied(
            output,
            |output| BatchWriteOutput::from_store(output, &self.table_name),
            AppliedWrite::BatchWrite,
        )
    }
}

/// Decodes the response of a write the store has already applied. A decode
/// failure keeps the response so the caller can still see the write landed.
fn decode_applied<O: Clone, R>(
    output: O,
    decode: impl FnOnce(O) -> Result<R>,
    applied: fn(O) -> AppliedWrite,
) -> Result<R> {
    decode(output.clone()).map_err(|err| match err {
        TableError::Document(source) => {
            warn!("Write applied but response could not be decoded: {}", source);
            TableError::UndecodedWrite {
                source,
                output: Box::new(applied(output)),
            }
        }
        other => other,
    })
}

fn log_failure<E: Into<TableError>>(err: E) -> TableError {
    let err = err.into();
    warn!("Store call failed: {}", err);
    err
}
