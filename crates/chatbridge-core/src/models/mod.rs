pub mod chat;
pub mod turn;
