// Library for tests to access modules

pub mod backend_repo;
pub mod config;
pub mod diff;
pub mod locale;
pub mod models;
pub mod panel;
pub mod routes;
pub mod table;
pub mod version;
pub mod worker;
