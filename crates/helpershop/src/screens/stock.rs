//! The stock screen: product intake form plus the catalog listing.

use crate::catalog_actor::CatalogError;
use crate::clients::CatalogClient;
use crate::intake::{validate_product_input, IntakeError};
use crate::model::{ImageRef, Product, ProductId};
use crate::picker::{ensure_permissions, ImagePicker, ImageSource, PermissionGate, PickerResponse};
use actor_store::ActorClient;
use std::sync::Arc;
use tracing::{debug, error};

/// Adapter for the stock view: four form fields, an image picker hook and
/// the add-product button.
pub struct StockScreen {
    catalog: CatalogClient,
    picker: Arc<dyn ImagePicker>,
    name: String,
    price_text: String,
    quantity_text: String,
    image: Option<ImageRef>,
}

impl StockScreen {
    /// Opens the screen. Runs the advisory permission sweep the way the
    /// view does on mount; a denial only warns.
    pub async fn open(
        catalog: CatalogClient,
        picker: Arc<dyn ImagePicker>,
        permissions: &dyn PermissionGate,
    ) -> Self {
        ensure_permissions(permissions).await;
        Self {
            catalog,
            picker,
            name: String::new(),
            price_text: String::new(),
            quantity_text: String::new(),
            image: None,
        }
    }

    // Text-change handlers.

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price_text = text.into();
    }

    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.quantity_text = text.into();
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Launches the picker and stores the first returned asset. A cancel
    /// leaves the current image untouched; a failure is logged and
    /// otherwise ignored.
    pub async fn select_image(&mut self, source: ImageSource) {
        match self.picker.pick_image(source, 1.0).await {
            PickerResponse::Cancelled => {
                debug!("Image selection cancelled");
            }
            PickerResponse::Failed(message) => {
                error!(%message, "Image selection failed");
            }
            PickerResponse::Assets(assets) => {
                if let Some(asset) = assets.into_iter().next() {
                    self.image = Some(asset.location);
                }
            }
        }
    }

    /// The add-product button: validate the form, create the product,
    /// clear the form. On rejection nothing is created and the form keeps
    /// its contents so the user can fix them.
    pub async fn add_product(&mut self) -> Result<ProductId, IntakeError> {
        let params = validate_product_input(
            &self.name,
            &self.price_text,
            &self.quantity_text,
            self.image.as_ref(),
        )?;
        let id = self.catalog.create_product(params).await?;

        self.name.clear();
        self.price_text.clear();
        self.quantity_text.clear();
        self.image = None;
        Ok(id)
    }

    /// The catalog listing shown under the form, insertion order.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.catalog.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor;
    use crate::picker::{CannedPicker, GrantAll, PickedAsset};

    async fn screen_with(picker: CannedPicker) -> StockScreen {
        let (actor, catalog) = catalog_actor::new();
        tokio::spawn(actor.run(()));
        StockScreen::open(catalog, Arc::new(picker), &GrantAll).await
    }

    #[tokio::test]
    async fn test_cancelled_pick_leaves_image_unchanged() {
        let mut screen = screen_with(CannedPicker::new(PickerResponse::Cancelled)).await;
        assert!(screen.image().is_none());

        screen.select_image(ImageSource::Camera).await;
        assert!(screen.image().is_none());
    }

    #[tokio::test]
    async fn test_failed_pick_leaves_image_unchanged() {
        let mut screen =
            screen_with(CannedPicker::new(PickerResponse::Failed("no camera".into()))).await;
        screen.select_image(ImageSource::Camera).await;
        assert!(screen.image().is_none());
    }

    #[tokio::test]
    async fn test_pick_takes_first_asset() {
        let response = PickerResponse::Assets(vec![
            PickedAsset {
                location: ImageRef::from("file:///photos/first.jpg"),
            },
            PickedAsset {
                location: ImageRef::from("file:///photos/second.jpg"),
            },
        ]);
        let mut screen = screen_with(CannedPicker::new(response)).await;
        screen.select_image(ImageSource::Library).await;
        assert_eq!(
            screen.image(),
            Some(&ImageRef::from("file:///photos/first.jpg"))
        );
    }

    #[tokio::test]
    async fn test_add_product_clears_form() {
        let mut screen = screen_with(CannedPicker::with_asset("file:///photos/caneta.jpg")).await;
        screen.set_name("Caneta");
        screen.set_price("2.50");
        screen.set_quantity("100");
        screen.select_image(ImageSource::Library).await;

        screen.add_product().await.unwrap();

        assert!(screen.image().is_none());
        let products = screen.products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Caneta");

        // Adding again immediately fails validation: the form is empty.
        assert!(matches!(
            screen.add_product().await,
            Err(IntakeError::InvalidInput)
        ));
    }

    #[tokio::test]
    async fn test_invalid_form_creates_nothing() {
        let mut screen = screen_with(CannedPicker::with_asset("file:///photos/caneta.jpg")).await;
        screen.set_name("Caneta");
        screen.set_price("free");
        screen.set_quantity("100");
        screen.select_image(ImageSource::Library).await;

        assert!(matches!(
            screen.add_product().await,
            Err(IntakeError::InvalidInput)
        ));
        assert!(screen.products().await.unwrap().is_empty());
        // The form keeps its contents for correction.
        assert!(screen.image().is_some());
    }
}
