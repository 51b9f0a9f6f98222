// Application layer - Use cases and the seams they depend on
pub mod errors;
pub mod identity_client;
pub mod powerbi_gateway;
pub mod powerbi_service;
pub mod token_cache;

#[cfg(test)]
pub mod testing;
