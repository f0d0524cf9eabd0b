//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{chips, health, locations, machines, products, telsystems, users, wol};
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventário API",
        version = "1.0.0",
        description = "Office Inventory Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Machines
        machines::list_machines,
        machines::get_machine,
        machines::create_machine,
        machines::update_machine,
        machines::delete_machine,
        // Chips
        chips::list_chips,
        chips::get_chip,
        chips::create_chip,
        chips::update_chip,
        chips::delete_chip,
        // Phone lines
        telsystems::list_telsystems,
        telsystems::get_telsystem,
        telsystems::create_telsystem,
        telsystems::assign_telsystem,
        telsystems::update_telsystem,
        telsystems::delete_telsystem,
        // Locations
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::migrate_from_machines,
        // Products
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        // Wake-on-LAN
        wol::wake,
    ),
    components(schemas(
        crate::api::DeleteResponse,
        crate::error::ErrorResponse,
        health::HealthResponse,
        wol::WakeRequest,
        wol::WakeResponse,
        models::machine::Machine,
        models::machine::CreateMachine,
        models::machine::UpdateMachine,
        models::chip::Chip,
        models::chip::CreateChip,
        models::chip::UpdateChip,
        models::telsystem::TelSystem,
        models::telsystem::CreateTelSystem,
        models::telsystem::UpdateTelSystem,
        models::telsystem::AssignTelSystem,
        models::location::Location,
        models::location::CreateLocation,
        models::location::UpdateLocation,
        models::user::User,
        models::user::CreateUser,
        models::user::UpdateUser,
        models::user::MigrationReport,
        models::product::Product,
        models::product::CreateProduct,
        models::product::UpdateProduct,
    ))
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
