//! Repository layer for database operations

pub mod chips;
pub mod locations;
pub mod machines;
pub mod products;
pub mod telsystems;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub machines: machines::MachinesRepository,
    pub chips: chips::ChipsRepository,
    pub telsystems: telsystems::TelSystemsRepository,
    pub locations: locations::LocationsRepository,
    pub users: users::UsersRepository,
    pub products: products::ProductsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            machines: machines::MachinesRepository::new(pool.clone()),
            chips: chips::ChipsRepository::new(pool.clone()),
            telsystems: telsystems::TelSystemsRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            products: products::ProductsRepository::new(pool.clone()),
            pool,
        }
    }
}
