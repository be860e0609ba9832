pub mod modules;
pub use modules::catalog;
pub use modules::email;
pub use modules::identity;
pub mod api;
pub mod health;
pub mod shared;

use crate::catalog::adapter::outgoing::{ProductQueryPostgres, ProductRepositoryPostgres};
use crate::catalog::application::use_cases::{
    create_product::{CreateProductUseCase, ICreateProductUseCase},
    delete_product::{DeleteProductUseCase, IDeleteProductUseCase},
    get_product::{GetProductUseCase, IGetProductUseCase},
    list_products::{IListProductsUseCase, ListProductsUseCase},
    search_products::{ISearchProductsUseCase, SearchProductsUseCase},
    update_product::{IUpdateProductUseCase, UpdateProductUseCase},
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::{AccountNotifier, EmailSender};
use crate::email::application::services::AccountEmailService;
use crate::identity::adapter::outgoing::{AccountQueryPostgres, AccountRepositoryPostgres};
use crate::identity::application::ports::outgoing::token_provider::TokenProvider;
use crate::identity::application::services::hash::{BcryptHasher, PasswordHashingService};
use crate::identity::application::services::token::{TokenConfig, TokenService};
use crate::identity::application::use_cases::{
    authenticate::{AuthenticateUseCase, IAuthenticateUseCase},
    confirm_email::{ConfirmEmailUseCase, IConfirmEmailUseCase},
    fetch_account::{FetchAccountUseCase, IFetchAccountUseCase},
    register_account::{IRegisterAccountUseCase, RegisterAccountUseCase},
    soft_delete_account::{ISoftDeleteAccountUseCase, SoftDeleteAccountUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_account_use_case: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    pub confirm_email_use_case: Arc<dyn IConfirmEmailUseCase + Send + Sync>,
    pub authenticate_use_case: Arc<dyn IAuthenticateUseCase + Send + Sync>,
    pub fetch_account_use_case: Arc<dyn IFetchAccountUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub soft_delete_account_use_case: Arc<dyn ISoftDeleteAccountUseCase + Send + Sync>,
    pub create_product_use_case: Arc<dyn ICreateProductUseCase + Send + Sync>,
    pub get_product_use_case: Arc<dyn IGetProductUseCase + Send + Sync>,
    pub list_products_use_case: Arc<dyn IListProductsUseCase + Send + Sync>,
    pub search_products_use_case: Arc<dyn ISearchProductsUseCase + Send + Sync>,
    pub update_product_use_case: Arc<dyn IUpdateProductUseCase + Send + Sync>,
    pub delete_product_use_case: Arc<dyn IDeleteProductUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    // Public base URL used in confirmation links
    let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{server_url}"));

    // SMTP SETUP
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if environment == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP configuration")
    };

    info!("Server will run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Signing key is loaded exactly once; a missing key dies here.
    let token_service = TokenService::new(TokenConfig::from_env());

    let password_hasher = if environment == "production" {
        PasswordHashingService::new(BcryptHasher::new())
    } else {
        PasswordHashingService::new(BcryptHasher::fast())
    };

    // Identity wiring
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));

    let email_sender_arc: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let account_notifier: Arc<dyn AccountNotifier + Send + Sync> =
        Arc::new(AccountEmailService::new(email_sender_arc, app_url));

    let register_account_use_case = RegisterAccountUseCase::new(
        account_query.clone(),
        account_repo.clone(),
        password_hasher.clone(),
        token_service.clone(),
        account_notifier,
    );
    let confirm_email_use_case =
        ConfirmEmailUseCase::new(account_query.clone(), account_repo.clone());
    let authenticate_use_case = AuthenticateUseCase::new(
        account_query.clone(),
        password_hasher.clone(),
        token_service.clone(),
    );
    let fetch_account_use_case = FetchAccountUseCase::new(account_query.clone());
    let update_profile_use_case =
        UpdateProfileUseCase::new(account_query.clone(), account_repo.clone());
    let soft_delete_account_use_case = SoftDeleteAccountUseCase::new(account_repo);

    // Catalog wiring
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_query = ProductQueryPostgres::new(Arc::clone(&db_arc));

    let create_product_use_case = CreateProductUseCase::new(product_repo.clone());
    let get_product_use_case = GetProductUseCase::new(product_query.clone());
    let list_products_use_case = ListProductsUseCase::new(product_query.clone());
    let search_products_use_case = SearchProductsUseCase::new(product_query.clone());
    let update_product_use_case =
        UpdateProductUseCase::new(product_query.clone(), product_repo.clone());
    let delete_product_use_case = DeleteProductUseCase::new(product_query, product_repo);

    let state = AppState {
        register_account_use_case: Arc::new(register_account_use_case),
        confirm_email_use_case: Arc::new(confirm_email_use_case),
        authenticate_use_case: Arc::new(authenticate_use_case),
        fetch_account_use_case: Arc::new(fetch_account_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        soft_delete_account_use_case: Arc::new(soft_delete_account_use_case),
        create_product_use_case: Arc::new(create_product_use_case),
        get_product_use_case: Arc::new(get_product_use_case),
        list_products_use_case: Arc::new(list_products_use_case),
        search_products_use_case: Arc::new(search_products_use_case),
        update_product_use_case: Arc::new(update_product_use_case),
        delete_product_use_case: Arc::new(delete_product_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(token_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(crate::identity::adapter::incoming::web::routes::register_account_handler);
    cfg.service(crate::identity::adapter::incoming::web::routes::confirm_email_handler);
    cfg.service(crate::identity::adapter::incoming::web::routes::login_account_handler);
    cfg.service(crate::identity::adapter::incoming::web::routes::fetch_account_handler);
    cfg.service(crate::identity::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::identity::adapter::incoming::web::routes::delete_account_handler);
    // Products - /search must be registered before /{id}
    cfg.service(crate::catalog::adapter::incoming::web::routes::search_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_product_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
