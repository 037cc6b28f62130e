use async_trait::async_trait;
use catalog_core::{Category, CategoryDraft, CategoryId};
use std::sync::Arc;
use tonic::{Request, Response, Status};

use super::messages::{
    AddCategoryRequest, CategoriesList, CategoryData, Empty, FetchCategoryRequest,
    FindByNameRequest, ModifyCategoryRequest, RemoveCategoryRequest, RemoveResponse,
};
use super::status::to_status;
use crate::application::CatalogService;

/// Category RPC service
#[async_trait]
pub trait CategoryRpc: Send + Sync + 'static {
    async fn fetch_category(
        &self,
        request: Request<FetchCategoryRequest>,
    ) -> Result<Response<CategoryData>, Status>;

    async fn list_categories(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<CategoriesList>, Status>;

    async fn add_category(
        &self,
        request: Request<AddCategoryRequest>,
    ) -> Result<Response<CategoryData>, Status>;

    async fn modify_category(
        &self,
        request: Request<ModifyCategoryRequest>,
    ) -> Result<Response<CategoryData>, Status>;

    async fn remove_category(
        &self,
        request: Request<RemoveCategoryRequest>,
    ) -> Result<Response<RemoveResponse>, Status>;

    async fn find_category_by_name(
        &self,
        request: Request<FindByNameRequest>,
    ) -> Result<Response<CategoryData>, Status>;
}

/// Category RPC front-end over the catalog service
pub struct CategoryRpcService {
    catalog: Arc<dyn CatalogService>,
}

impl CategoryRpcService {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }
}

impl From<Category> for CategoryData {
    fn from(category: Category) -> Self {
        CategoryData {
            category_id: category.id.value(),
            name: category.name,
            description: category.description,
            product_ids: category.product_ids.iter().map(|id| id.value()).collect(),
        }
    }
}

#[async_trait]
impl CategoryRpc for CategoryRpcService {
    async fn fetch_category(
        &self,
        request: Request<FetchCategoryRequest>,
    ) -> Result<Response<CategoryData>, Status> {
        let id = CategoryId(request.into_inner().category_id);
        let category = self.catalog.get_category(id).await.map_err(to_status)?;
        Ok(Response::new(category.into()))
    }

    async fn list_categories(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<CategoriesList>, Status> {
        let categories = self.catalog.list_categories().await.map_err(to_status)?;
        Ok(Response::new(CategoriesList {
            categories: categories.into_iter().map(CategoryData::from).collect(),
        }))
    }

    async fn add_category(
        &self,
        request: Request<AddCategoryRequest>,
    ) -> Result<Response<CategoryData>, Status> {
        let req = request.into_inner();
        let category = self
            .catalog
            .create_category(CategoryDraft::new(req.name, req.description))
            .await
            .map_err(to_status)?;
        Ok(Response::new(category.into()))
    }

    async fn modify_category(
        &self,
        request: Request<ModifyCategoryRequest>,
    ) -> Result<Response<CategoryData>, Status> {
        let req = request.into_inner();
        let category = self
            .catalog
            .update_category(
                CategoryId(req.category_id),
                CategoryDraft::new(req.name, req.description),
            )
            .await
            .map_err(to_status)?;
        Ok(Response::new(category.into()))
    }

    async fn remove_category(
        &self,
        request: Request<RemoveCategoryRequest>,
    ) -> Result<Response<RemoveResponse>, Status> {
        let id = CategoryId(request.into_inner().category_id);
        self.catalog.delete_category(id).await.map_err(to_status)?;
        Ok(Response::new(RemoveResponse { success: true }))
    }

    async fn find_category_by_name(
        &self,
        request: Request<FindByNameRequest>,
    ) -> Result<Response<CategoryData>, Status> {
        let name = request.into_inner().name;
        let category = self
            .catalog
            .find_category_by_name(&name)
            .await
            .map_err(to_status)?;
        Ok(Response::new(category.into()))
    }
}
