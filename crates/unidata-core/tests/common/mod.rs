pub mod data_server;
