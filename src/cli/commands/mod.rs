pub mod add;
pub mod backup;
pub mod commit;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod players;
pub mod results;
