pub mod entity;
pub mod lex;
