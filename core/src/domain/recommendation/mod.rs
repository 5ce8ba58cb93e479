pub mod entities;
pub mod scorer;
