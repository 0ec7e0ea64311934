pub mod admin_product_table;
pub mod product_card;
pub mod product_detail_modal;
pub mod user_sidebar;
