//! MongoDB Gateway Tests
//!
//! Require a running MongoDB server, so they are ignored by default:
//!
//! ```text
//! MONGODB_URI=mongodb://localhost:27017/ cargo test --test mongo_gateway -- --ignored
//! ```
//!
//! Each test works in its own throwaway collection, dropped at the end.

use mongodb::bson::oid::ObjectId;
use mongodb::Client;

use itemstore::model::{Item, ItemCreate};
use itemstore::store::{ItemGateway, MongoItemGateway, StoreError};

const TEST_DATABASE: &str = "store_test";

fn mongo_uri() -> String {
    std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017/".to_string())
}

async fn fresh_gateway() -> (MongoItemGateway, Client, String) {
    let client = Client::with_uri_str(mongo_uri()).await.unwrap();
    let collection = format!("items_{}", ObjectId::new().to_hex());
    let gateway = MongoItemGateway::with_client(client.clone(), TEST_DATABASE, &collection);
    (gateway, client, collection)
}

async fn drop_collection(client: &Client, name: &str) {
    client
        .database(TEST_DATABASE)
        .collection::<mongodb::bson::Document>(name)
        .drop()
        .await
        .unwrap();
}

fn widget(price: f64) -> ItemCreate {
    ItemCreate {
        name: "Widget".to_string(),
        price,
    }
}

#[tokio::test]
#[ignore]
async fn test_ping() {
    let (gateway, _client, _) = fresh_gateway().await;
    assert!(gateway.ping().await.is_ok());
}

/// insert then find returns the payload plus the assigned id.
#[tokio::test]
#[ignore]
async fn test_insert_then_find() {
    let (gateway, client, collection) = fresh_gateway().await;

    let created = gateway.insert(widget(9.99)).await.unwrap();
    assert!(ObjectId::parse_str(&created.id).is_ok());
    assert_eq!(created.name, "Widget");
    assert_eq!(created.price, 9.99);

    let found = gateway.find_by_id(&created.id).await.unwrap();
    assert_eq!(found, created);

    drop_collection(&client, &collection).await;
}

#[tokio::test]
#[ignore]
async fn test_list_after_insert() {
    let (gateway, client, collection) = fresh_gateway().await;
    assert!(gateway.list_all().await.unwrap().is_empty());

    let created = gateway.insert(widget(1.0)).await.unwrap();
    let items = gateway.list_all().await.unwrap();
    assert_eq!(items, vec![created]);

    drop_collection(&client, &collection).await;
}

#[tokio::test]
#[ignore]
async fn test_update_is_not_upsert() {
    let (gateway, client, collection) = fresh_gateway().await;
    let absent = ObjectId::new().to_hex();

    let body = Item::from_create(absent.clone(), widget(1.0));
    assert_eq!(
        gateway.update_by_id(&absent, body).await,
        Err(StoreError::NotFound)
    );
    assert!(gateway.list_all().await.unwrap().is_empty());

    drop_collection(&client, &collection).await;
}

#[tokio::test]
#[ignore]
async fn test_update_then_find() {
    let (gateway, client, collection) = fresh_gateway().await;
    let created = gateway.insert(widget(9.99)).await.unwrap();

    // unchanged values still count as a match
    let same = gateway
        .update_by_id(&created.id, created.clone())
        .await
        .unwrap();
    assert_eq!(same, created);

    let body = Item {
        id: "ignored".to_string(),
        name: "Widget".to_string(),
        price: 12.5,
    };
    let updated = gateway.update_by_id(&created.id, body).await.unwrap();
    assert_eq!(updated.id, created.id);

    let found = gateway.find_by_id(&created.id).await.unwrap();
    assert_eq!(found.price, 12.5);

    drop_collection(&client, &collection).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_then_find_and_delete_again() {
    let (gateway, client, collection) = fresh_gateway().await;
    let created = gateway.insert(widget(9.99)).await.unwrap();

    assert_eq!(gateway.delete_by_id(&created.id).await, Ok(()));
    assert_eq!(
        gateway.find_by_id(&created.id).await,
        Err(StoreError::NotFound)
    );
    assert_eq!(
        gateway.delete_by_id(&created.id).await,
        Err(StoreError::NotFound)
    );

    drop_collection(&client, &collection).await;
}

#[tokio::test]
#[ignore]
async fn test_malformed_id_is_not_found() {
    let (gateway, _client, _) = fresh_gateway().await;

    assert_eq!(gateway.find_by_id("xyz").await, Err(StoreError::NotFound));
    assert_eq!(gateway.delete_by_id("xyz").await, Err(StoreError::NotFound));
    let body = Item::from_create("xyz", widget(1.0));
    assert_eq!(
        gateway.update_by_id("xyz", body).await,
        Err(StoreError::NotFound)
    );
}
