pub mod chat;
pub mod common;
pub mod drug_info;
pub mod medication;
pub mod recommendation;
pub mod symptom;
pub mod user;
