pub mod ledger_error;
pub mod ledger_service;
pub mod store_error;
pub mod user_store;
