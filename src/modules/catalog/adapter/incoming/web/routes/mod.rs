mod create_product;
mod delete_product;
mod get_product;
mod list_products;
mod search_products;
mod update_product;

pub use create_product::{create_product_handler, CreateProductRequest, ProductResponse};
pub use delete_product::delete_product_handler;
pub use get_product::get_product_handler;
pub use list_products::list_products_handler;
pub use search_products::{search_products_handler, SearchProductsParams};
pub use update_product::{update_product_handler, UpdateProductRequest};
