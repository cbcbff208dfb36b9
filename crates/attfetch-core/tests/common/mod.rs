pub mod attempt_server;
