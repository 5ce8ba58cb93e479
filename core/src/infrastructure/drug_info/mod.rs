pub mod data_go_client;
