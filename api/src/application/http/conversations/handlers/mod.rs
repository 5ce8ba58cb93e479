pub mod get_conversations;
