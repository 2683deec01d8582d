pub mod connect_service;
