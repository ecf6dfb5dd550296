//! Tests against a real DynamoDB endpoint
//!
//! These tests are ignored by default. They need AWS credentials and a region
//! in the environment or in a `.env` file:
//!
//! ```text
//! AWS_ACCESS_KEY_ID=your_access_key
//! AWS_SECRET_ACCESS_KEY=your_secret_key
//! AWS_REGION=your_preferred_region
//! ```
//!
//! For DynamoDB Local, dummy credentials work together with:
//!
//! ```text
//! AWS_ENDPOINT_URL=http://localhost:8000
//! ```
//!
//! The table "test-products" (partition key "category", sort key
//! "product_name") is created on first use. Run with:
//!
//! ```text
//! cargo test -- --ignored
//! ```
//!
//! Note: these tests may incur AWS charges if run against a real DynamoDB instance.

use crate::table::{
    BatchGetRequest, BatchWriteRequest, DeleteRequest, GetRequest, Item, PutRequest,
    QueryRequest, TableClient, TransactGet, TransactWrite, UpdateClause, UpdateRequest,
    WriteRequest,
};
use anyhow::{anyhow, Result};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType, ReturnValue,
    ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Duration};
use tracing::{info, instrument};

const TEST_TABLE_NAME: &str = "test-products";
const CATEGORY_PARTITION_KEY: &str = "category";
const PRODUCT_NAME_SORT_KEY: &str = "product_name";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Product {
    category: String,
    product_name: String,
    price: f64,
}

impl Product {
    fn new(category: &str, product_name: &str, price: f64) -> Self {
        Self {
            category: category.to_string(),
            product_name: product_name.to_string(),
            price,
        }
    }

    fn key(&self) -> Item {
        Item::new()
            .set_string(CATEGORY_PARTITION_KEY, &self.category)
            .set_string(PRODUCT_NAME_SORT_KEY, &self.product_name)
    }
}

async fn table_client() -> Result<TableClient> {
    dotenv::dotenv().ok();
    let _ = crate::logging::init_logging();

    let sdk_config = aws_config::load_from_env().await;
    let client = TableClient::new(&sdk_config, TEST_TABLE_NAME);
    setup_test_table(client.store()).await?;
    Ok(client)
}

#[instrument(skip(ddb))]
async fn setup_test_table(ddb: &Client) -> Result<()> {
    let tables = ddb.list_tables().send().await?;
    if tables.table_names().contains(&TEST_TABLE_NAME.to_string()) {
        info!("Table already exists");
        return Ok(());
    }

    ddb.create_table()
        .table_name(TEST_TABLE_NAME)
        .billing_mode(BillingMode::PayPerRequest)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(CATEGORY_PARTITION_KEY)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(PRODUCT_NAME_SORT_KEY)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(CATEGORY_PARTITION_KEY)
                .key_type(KeyType::Hash)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(PRODUCT_NAME_SORT_KEY)
                .key_type(KeyType::Range)
                .build()?,
        )
        .send()
        .await?;

    for _ in 0..10 {
        let description = ddb
            .describe_table()
            .table_name(TEST_TABLE_NAME)
            .send()
            .await?;
        if description.table().and_then(|table| table.table_status()) == Some(&TableStatus::Active)
        {
            info!("Table created successfully");
            return Ok(());
        }
        sleep(Duration::from_secs(3)).await;
    }
    Err(anyhow!("Table '{TEST_TABLE_NAME}' did not become active"))
}

#[tokio::test]
#[ignore]
async fn test_item_lifecycle() -> Result<()> {
    let products = table_client().await?;
    let phone = Product::new("Electronics", "Smartphone", 599.99);

    info!("Testing put");
    products
        .put::<Product>(PutRequest::from_record(&phone)?)
        .await?;

    info!("Testing get");
    let found = products
        .get::<Product>(GetRequest::new(phone.key()).consistent_read(true))
        .await?;
    assert_eq!(found.item, Some(phone.clone()));

    info!("Testing update");
    let updated = products
        .update::<Product>(
            UpdateRequest::new(phone.key())
                .update_expression("SET #price = :price")
                .expression_attribute_name("#price", "price")
                .expression_attribute_value(":price", AttributeValue::N("649.99".into()))
                .return_values(ReturnValue::AllNew),
        )
        .await?;
    assert_eq!(updated.attributes.map(|p| p.price), Some(649.99));

    info!("Testing query");
    let page = products
        .query::<Product>(
            QueryRequest::new("#pk = :pk")
                .expression_attribute_name("#pk", CATEGORY_PARTITION_KEY)
                .expression_attribute_value(":pk", AttributeValue::S("Electronics".into())),
        )
        .await?;
    assert_eq!(page.items.map(|items| items.len()), Some(1));

    info!("Testing delete");
    let deleted = products
        .delete::<Product>(DeleteRequest::new(phone.key()).return_values(ReturnValue::AllOld))
        .await?;
    assert_eq!(deleted.attributes.map(|p| p.product_name), Some(phone.product_name));
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_conditional_put_reports_check_failure() -> Result<()> {
    let products = table_client().await?;
    let book = Product::new("Books", "The Rust Programming Language", 39.99);
    products
        .put::<Product>(PutRequest::from_record(&book)?)
        .await?;

    let err = products
        .put::<Product>(
            PutRequest::from_record(&book)?
                .condition_expression("attribute_not_exists(#pk)")
                .expression_attribute_name("#pk", CATEGORY_PARTITION_KEY),
        )
        .await
        .unwrap_err();
    assert!(err.is_conditional_check_failed());

    products
        .delete::<Product>(DeleteRequest::new(book.key()))
        .await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_batch_and_transactions() -> Result<()> {
    let products = table_client().await?;
    let items: Vec<Product> = (1..=3)
        .map(|i| Product::new("Garden", &format!("Product{i}"), f64::from(i) * 10.0))
        .collect();

    let written = products
        .batch_write(BatchWriteRequest::new(
            items.iter().cloned().map(WriteRequest::put),
        ))
        .await?;
    assert!(written.unprocessed_items.unwrap_or_default().is_empty());

    let fetched = products
        .batch_get::<Product>(BatchGetRequest::new(items.iter().map(Product::key)))
        .await?;
    assert_eq!(fetched.items.map(|items| items.len()), Some(3));

    let read = products
        .transact_get::<Product>(items.iter().map(|p| TransactGet::new(p.key())).collect::<Vec<_>>())
        .await?;
    assert_eq!(read.responses.map(|responses| responses.len()), Some(3));

    products
        .transact_write(vec![TransactWrite::update(UpdateClause {
            key: items[0].key().into(),
            update_expression: "SET price = :price".into(),
            expression_attribute_values: Some(
                [(":price".to_string(), AttributeValue::N("1".into()))].into(),
            ),
            ..UpdateClause::default()
        })])
        .await?;

    products
        .batch_write(BatchWriteRequest::<Product>::new(
            items.iter().map(|p| WriteRequest::delete(p.key())),
        ))
        .await?;
    Ok(())
}
