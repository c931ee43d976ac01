pub mod export_service;
pub mod extractor;
pub mod generation_client;
pub mod http_helpers;
pub mod prompt_builder;
pub mod session_store;
pub mod study_service;
