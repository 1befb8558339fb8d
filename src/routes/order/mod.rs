pub mod delete;
pub mod get_by_id;
pub mod get_mine;
pub mod list_all;
pub mod list_mine;
pub mod place;
pub mod update;
pub mod update_status;
