pub mod password;
pub mod token;
pub mod webutils;
