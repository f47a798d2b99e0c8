use actor_store::ActorClient;
use helpershop::draft_actor::DraftError;
use helpershop::intake::validate_product_input;
use helpershop::lifecycle::ShopSystem;
use helpershop::model::{DraftUpdate, ImageRef, ProductCreate};
use helpershop::picker::{CannedPicker, GrantAll, ImageSource};
use helpershop::screens::{HomeScreen, StockScreen};
use rust_decimal::Decimal;
use std::sync::Arc;

fn price(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn caneta_params() -> ProductCreate {
    validate_product_input(
        "Caneta",
        "2.50",
        "100",
        Some(&ImageRef::from("file:///photos/caneta.jpg")),
    )
    .unwrap()
}

/// Full end-to-end test with all real actors: stock a product, compose an
/// order, finalize it, read it back from the log.
#[tokio::test]
async fn test_full_shop_flow() {
    let system = ShopSystem::new();

    // Stock: Caneta at R$2.50, 100 on hand.
    let product_id = system
        .catalog_client
        .create_product(caneta_params())
        .await
        .expect("Failed to create product");

    let products = system.catalog_client.list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, product_id);
    assert_eq!(products[0].price, price("2.50"));
    assert_eq!(products[0].quantity, 100);

    // Compose: three Canetas.
    let draft_id = system.draft_client.open_draft().await.unwrap();
    let item = system
        .draft_client
        .add_line_item(draft_id, "Caneta", "3")
        .await
        .expect("Failed to add line item");
    assert_eq!(item.quantity, 3);
    assert_eq!(item.unit_price, price("2.50"));
    assert_eq!(item.line_total, price("7.50"));

    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.total, price("7.50"));

    // Finalize and verify the log.
    let order_id = system
        .draft_client
        .finalize(draft_id, "Ana", "Bia", "Pix")
        .await
        .expect("Failed to finalize");

    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.id, order_id);
    assert_eq!(order.seller_name, "Ana");
    assert_eq!(order.customer_name, "Bia");
    assert_eq!(order.payment_method, "Pix");
    assert_eq!(order.total, price("7.50"));
    assert_eq!(order.items.len(), 1);

    // The draft is back at its initial state.
    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert!(draft.is_empty());

    // Stock was NOT decremented: finalizing does not touch the catalog.
    let products = system.catalog_client.list().await.unwrap();
    assert_eq!(products[0].quantity, 100);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_total_tracks_adds_and_removes_exactly() {
    let system = ShopSystem::new();

    system
        .catalog_client
        .create_product(caneta_params())
        .await
        .unwrap();
    system
        .catalog_client
        .create_product(
            validate_product_input(
                "Caderno",
                "15.00",
                "10",
                Some(&ImageRef::from("file:///photos/caderno.jpg")),
            )
            .unwrap(),
        )
        .await
        .unwrap();

    let draft_id = system.draft_client.open_draft().await.unwrap();
    system
        .draft_client
        .add_line_item(draft_id, "Caneta", "3")
        .await
        .unwrap();
    let caderno_line = system
        .draft_client
        .add_line_item(draft_id, "Caderno", "2")
        .await
        .unwrap();

    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.total, price("37.50"));
    let sum: Decimal = draft.items.iter().map(|item| item.line_total).sum();
    assert_eq!(draft.total, sum);

    // Remove, then re-add an identical line: total returns to its prior
    // value at each step.
    let removed = system
        .draft_client
        .remove_line_item(draft_id, caderno_line.id)
        .await
        .unwrap();
    assert!(removed);
    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.total, price("7.50"));

    system
        .draft_client
        .add_line_item(draft_id, "Caderno", "2")
        .await
        .unwrap();
    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.total, price("37.50"));

    // Removing an id that no longer exists is a no-op.
    let removed = system
        .draft_client
        .remove_line_item(draft_id, caderno_line.id)
        .await
        .unwrap();
    assert!(!removed);
    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.total, price("37.50"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejections_leave_log_and_draft_unchanged() {
    let system = ShopSystem::new();

    system
        .catalog_client
        .create_product(caneta_params())
        .await
        .unwrap();

    let draft_id = system.draft_client.open_draft().await.unwrap();

    // Unknown product.
    let result = system
        .draft_client
        .add_line_item(draft_id, "Unknown Product", "2")
        .await;
    assert!(matches!(result, Err(DraftError::ProductNotFound(_))));

    // Finalize with nothing filled in.
    let result = system.draft_client.finalize(draft_id, "", "", "").await;
    assert!(matches!(result, Err(DraftError::IncompleteOrder)));

    let draft = system.draft_client.get(draft_id).await.unwrap().unwrap();
    assert!(draft.items.is_empty());
    assert_eq!(draft.total, Decimal::ZERO);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_ids_are_unique_and_listing_keeps_order() {
    let system = ShopSystem::new();

    let first = system
        .catalog_client
        .create_product(caneta_params())
        .await
        .unwrap();
    let second = system
        .catalog_client
        .create_product(
            validate_product_input(
                "Caderno",
                "15.0",
                "10",
                Some(&ImageRef::from("file:///photos/caderno.jpg")),
            )
            .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(first, second);
    assert!(!first.to_string().is_empty());

    let products = system.catalog_client.list().await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Caneta", "Caderno"]);

    system.shutdown().await.unwrap();
}

/// The same flow driven through the screen adapters, the way the views
/// wire user events to the clients.
#[tokio::test]
async fn test_screens_drive_the_same_flow() {
    let system = ShopSystem::new();

    // Stock screen: form, picker, add.
    let picker = Arc::new(CannedPicker::with_asset("file:///photos/caneta.jpg"));
    let mut stock =
        StockScreen::open(system.catalog_client.clone(), picker, &GrantAll).await;
    stock.set_name("Caneta");
    stock.set_price("2.50");
    stock.set_quantity("100");
    stock.select_image(ImageSource::Library).await;
    stock.add_product().await.expect("Failed to add product");

    // Home screen: dialog, fields, line, finalize.
    let mut home = HomeScreen::new(system.draft_client.clone(), system.order_client.clone());
    home.open_order_dialog().await.unwrap();
    home.set_order_fields(DraftUpdate {
        seller_name: Some("Ana".to_string()),
        customer_name: Some("Bia".to_string()),
        payment_method: Some("Pix".to_string()),
    })
    .await
    .unwrap();
    home.add_product_to_order("Caneta", "3").await.unwrap();

    let draft = home.current_draft().await.unwrap();
    assert_eq!(draft.total, price("7.50"));
    assert_eq!(draft.seller_name, "Ana");

    home.create_order("Ana", "Bia", "Pix").await.unwrap();

    // The dialog is closed: composing again without reopening fails.
    let result = home.add_product_to_order("Caneta", "1").await;
    assert!(matches!(result, Err(DraftError::DialogClosed)));

    // Orders view receives the log by value but renders nothing yet.
    let orders_view = home.view_orders().await.unwrap();
    assert_eq!(orders_view.orders().len(), 1);
    assert_eq!(orders_view.orders()[0].total, price("7.50"));
    assert!(orders_view.rendered_lines().is_empty());

    // The screens hold client clones; drop them so shutdown can complete.
    drop(stock);
    drop(home);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_closing_the_dialog_discards_the_draft() {
    let system = ShopSystem::new();

    system
        .catalog_client
        .create_product(caneta_params())
        .await
        .unwrap();

    let mut home = HomeScreen::new(system.draft_client.clone(), system.order_client.clone());
    let draft_id = home.open_order_dialog().await.unwrap();
    home.add_product_to_order("Caneta", "2").await.unwrap();

    home.close_order_dialog().await.unwrap();

    // The draft entity is gone, and nothing reached the log.
    let gone = system.draft_client.get(draft_id).await.unwrap();
    assert!(gone.is_none());
    assert!(system.order_client.list().await.unwrap().is_empty());

    drop(home);
    system.shutdown().await.unwrap();
}
