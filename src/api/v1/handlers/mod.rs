pub mod health;
pub mod inner;
pub mod security;
