pub mod check;
mod helper;
pub mod init;
pub mod keys;
pub mod lookup;
