pub mod flow_service;
pub mod grading_service;
pub mod llm_client;
pub mod pipeline_service;
pub mod prompts;
pub mod session_store;
