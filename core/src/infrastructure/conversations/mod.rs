pub mod proxy_client;
