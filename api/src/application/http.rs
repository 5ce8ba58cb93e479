pub mod chat;
pub mod completions;
pub mod conversations;
pub mod health;
pub mod medication_info;
pub mod profile;
pub mod server;
