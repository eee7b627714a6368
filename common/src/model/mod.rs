pub mod pagination;
pub mod user;
pub mod user_form;
pub mod user_list;
