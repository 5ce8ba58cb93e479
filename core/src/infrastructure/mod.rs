pub mod conversations;
pub mod drug_info;
pub mod llm;
pub mod user;
