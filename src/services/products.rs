//! Stock products service (legacy stock page)

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateProduct, Product, UpdateProduct},
    repository::Repository,
};

use super::required;

#[derive(Clone)]
pub struct ProductsService {
    repository: Repository,
}

impl ProductsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.repository.products.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        self.repository.products.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        let name = required(data.name, "name")?;
        let quantity = data
            .quantity
            .ok_or_else(|| AppError::Validation("quantity is required".to_string()))?;
        let price = data
            .price
            .ok_or_else(|| AppError::Validation("price is required".to_string()))?;

        self.repository.products.create(&name, quantity, price).await
    }

    pub async fn update(&self, id: i32, mut data: UpdateProduct) -> AppResult<Product> {
        if let Some(name) = data.name.take() {
            data.name = Some(required(Some(name), "name")?);
        }

        self.repository.products.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.products.delete(id).await
    }
}
