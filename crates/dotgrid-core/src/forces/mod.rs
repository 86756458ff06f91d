pub mod proximity;
pub mod shock;
