mod fake_store;
mod ledger_service;
