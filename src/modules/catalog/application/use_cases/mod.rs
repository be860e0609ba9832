pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod search_products;
pub mod update_product;
