// Infrastructure layer - External dependencies and adapters
pub mod azure_identity;
pub mod config;
pub mod http_response;
pub mod powerbi_client;
pub mod powerbi_mapper;

#[cfg(test)]
pub mod test_server;
