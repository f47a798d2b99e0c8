//! Demo walk-through of the shop: stock a product, compose an order,
//! finalize it, glance at the orders view, shut down.

use helpershop::lifecycle::{setup_tracing, ShopSystem};
use helpershop::model::{money, DraftUpdate, PAYMENT_METHODS};
use helpershop::picker::{CannedPicker, GrantAll, ImageSource};
use helpershop::screens::{HomeScreen, Route, StockScreen};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting HelperShop");
    let system = ShopSystem::new();

    // Stock screen: fill the form, pick a photo, add the product.
    info!(route = ?Route::Stock, "Navigating");
    let picker = Arc::new(CannedPicker::with_asset("file:///photos/caneta.jpg"));
    let span = tracing::info_span!("stock_intake");
    async {
        let mut stock = StockScreen::open(system.catalog_client.clone(), picker, &GrantAll).await;
        stock.set_name("Caneta");
        stock.set_price("2.50");
        stock.set_quantity("100");
        stock.select_image(ImageSource::Library).await;
        stock
            .add_product()
            .await
            .map_err(|e| e.to_string())
            .map(|id| info!(product_id = %id, "Product added to stock"))
    }
    .instrument(span)
    .await?;

    // Home screen: compose and finalize an order.
    info!(route = ?Route::Home, "Navigating");
    let mut home = HomeScreen::new(system.draft_client.clone(), system.order_client.clone());

    // The picker in the dialog offers the fixed payment methods; the demo
    // picks Pix.
    let payment = PAYMENT_METHODS[2];

    let span = tracing::info_span!("order_composition");
    let order_result = async {
        home.open_order_dialog().await?;
        home.set_order_fields(DraftUpdate {
            seller_name: Some("Ana".to_string()),
            customer_name: Some("Bia".to_string()),
            payment_method: Some(payment.to_string()),
        })
        .await?;

        let item = home.add_product_to_order("Caneta", "3").await?;
        info!(
            item = %item.id,
            line_total = %money::format_brl(item.line_total),
            "Line added"
        );

        let draft = home.current_draft().await?;
        info!(total = %money::format_brl(draft.total), "Running total");

        home.create_order("Ana", "Bia", payment).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => info!(order_id = %order_id, "Order created"),
        Err(e) => error!(error = %e, "Order composition failed"),
    }

    // Orders view: receives the log by value, renders nothing yet.
    info!(route = ?Route::Orders, "Navigating");
    let orders_view = home.view_orders().await.map_err(|e| e.to_string())?;
    info!(
        orders = orders_view.orders().len(),
        rendered = orders_view.rendered_lines().len(),
        "Orders view"
    );

    // The screens hold client clones; drop them so the channels close.
    drop(home);
    system.shutdown().await?;
    info!("Done");
    Ok(())
}
