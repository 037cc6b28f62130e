use async_trait::async_trait;
use catalog_core::{CategoryId, Price, Product, ProductDraft, ProductId, ValidationErrors};
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use super::messages::{
    CreateProductRequest, DeleteProductRequest, DeleteProductResponse, ListProductsRequest,
    ListProductsResponse, ProductReply, ProductRequest, UpdateProductRequest,
};
use super::status::{invalid_argument, to_status};
use crate::application::CatalogService;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Product RPC service
#[async_trait]
pub trait ProductRpc: Send + Sync + 'static {
    async fn get_product(
        &self,
        request: Request<ProductRequest>,
    ) -> Result<Response<ProductReply>, Status>;

    async fn list_products(
        &self,
        request: Request<ListProductsRequest>,
    ) -> Result<Response<ListProductsResponse>, Status>;

    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductReply>, Status>;

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ProductReply>, Status>;

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status>;
}

/// Product RPC front-end over the catalog service
pub struct ProductRpcService {
    catalog: Arc<dyn CatalogService>,
}

impl ProductRpcService {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }
}

/// Reported under the same field name as the domain validation uses
fn price_from_wire(value: f64) -> Result<Price, Status> {
    if !value.is_finite() {
        return Err(invalid_argument(ValidationErrors::single(
            "price",
            "must be a finite number",
        )));
    }
    Price::try_from(value).map(|p| p.normalize()).map_err(|_| {
        invalid_argument(ValidationErrors::single(
            "price",
            "must be within the supported decimal range",
        ))
    })
}

fn draft_from_wire(
    name: String,
    description: Option<String>,
    price: f64,
    stock_quantity: i32,
    category_id: Option<i64>,
) -> Result<ProductDraft, Status> {
    Ok(ProductDraft {
        name,
        description,
        price: price_from_wire(price)?,
        stock_quantity,
        category_id: category_id.map(CategoryId),
    })
}

fn reply(product: Product) -> ProductReply {
    let in_stock = product.in_stock();
    let enrichment = product.enrichment;
    ProductReply {
        id: product.id.value(),
        product_name: product.name,
        description: product.description,
        product_price: product.price.to_f64().unwrap_or_default(),
        stock_quantity: product.stock_quantity,
        is_in_stock: in_stock,
        category_id: product.category_id.map(CategoryId::value),
        created_at: product.created_at.format(TIMESTAMP_FORMAT).to_string(),
        updated_at: product.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        external_id: enrichment.as_ref().map(|e| e.external_id.clone()),
        rating: enrichment.as_ref().and_then(|e| e.rating),
        rating_count: enrichment.as_ref().and_then(|e| e.rating_count),
        image_url: enrichment.and_then(|e| e.image_url),
    }
}

#[async_trait]
impl ProductRpc for ProductRpcService {
    async fn get_product(
        &self,
        request: Request<ProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let id = ProductId(request.into_inner().id);
        let product = self.catalog.get_product(id).await.map_err(to_status)?;
        Ok(Response::new(reply(product)))
    }

    async fn list_products(
        &self,
        request: Request<ListProductsRequest>,
    ) -> Result<Response<ListProductsResponse>, Status> {
        let refresh = request.into_inner().refresh;
        let products = self
            .catalog
            .list_products(refresh)
            .await
            .map_err(to_status)?;
        Ok(Response::new(ListProductsResponse {
            products: products.into_iter().map(reply).collect(),
        }))
    }

    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let req = request.into_inner();
        let draft = draft_from_wire(
            req.product_name,
            req.description,
            req.product_price,
            req.stock_quantity,
            req.category_id,
        )?;
        let product = self.catalog.create_product(draft).await.map_err(to_status)?;
        Ok(Response::new(reply(product)))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let req = request.into_inner();
        let draft = draft_from_wire(
            req.product_name,
            req.description,
            req.product_price,
            req.stock_quantity,
            req.category_id,
        )?;
        let product = self
            .catalog
            .update_product(ProductId(req.id), draft)
            .await
            .map_err(to_status)?;
        Ok(Response::new(reply(product)))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let id = ProductId(request.into_inner().id);
        self.catalog.delete_product(id).await.map_err(to_status)?;
        Ok(Response::new(DeleteProductResponse { success: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::rpc::error_details;
    use rust_decimal_macros::dec;
    use tonic::Code;

    fn violation(status: &Status) -> (String, String) {
        let details = error_details(status).unwrap();
        let v = &details.field_violations[0];
        (v.field.clone(), v.description.clone())
    }

    #[test]
    fn test_wire_price_conversion() {
        assert_eq!(price_from_wire(7.25).unwrap(), dec!(7.25));
        assert_eq!(price_from_wire(0.0).unwrap(), dec!(0));
    }

    #[test]
    fn test_non_finite_wire_price_is_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let status = price_from_wire(value).unwrap_err();
            assert_eq!(status.code(), Code::InvalidArgument);
            assert_eq!(
                violation(&status),
                ("price".to_string(), "must be a finite number".to_string())
            );
        }
    }

    #[test]
    fn test_out_of_range_wire_price_is_rejected() {
        let status = price_from_wire(1e30).unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(
            violation(&status),
            (
                "price".to_string(),
                "must be within the supported decimal range".to_string()
            )
        );
    }
}
