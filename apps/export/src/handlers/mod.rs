pub mod export;
pub mod routes;
