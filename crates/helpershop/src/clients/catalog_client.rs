//! Client for the product catalog.

use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
///
/// The catalog is append-only: `create_product` and the inherited read
/// operations are the entire surface. No update or remove exists.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Appends a product and returns its freshly generated id. Inputs are
    /// expected to have passed the stock intake gate already.
    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!(?params, "create_product called");
        self.inner
            .create(params)
            .await
            .map_err(CatalogError::from_framework)
    }

    /// First product whose name matches exactly, if any. This is the
    /// lookup the composition dialog's product picker performs.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError> {
        debug!("Sending request");
        let products = self
            .inner
            .list()
            .await
            .map_err(CatalogError::from_framework)?;
        Ok(products.into_iter().find(|product| product.name == name))
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from_framework(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageRef;
    use actor_store::mock::{create_mock_client, expect_list};

    fn product(id: u32, name: &str) -> Product {
        Product::new(
            ProductId(id),
            name,
            "2.50".parse().unwrap(),
            100,
            ImageRef::from("file:///photos/p.jpg"),
        )
    }

    #[tokio::test]
    async fn test_find_by_name_matches_exactly() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(client);

        let find_task = tokio::spawn(async move { catalog.find_by_name("Caderno").await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder
            .send(Ok(vec![product(1, "Caneta"), product(2, "Caderno")]))
            .unwrap();

        let found = find_task.await.unwrap().unwrap();
        assert_eq!(found.unwrap().id, ProductId(2));
    }

    #[tokio::test]
    async fn test_find_by_name_misses_unknown_products() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(client);

        let find_task = tokio::spawn(async move { catalog.find_by_name("Borracha").await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![product(1, "Caneta")])).unwrap();

        let found = find_task.await.unwrap().unwrap();
        assert!(found.is_none());
    }
}
