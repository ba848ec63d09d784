pub mod health;
pub mod home;
pub mod mission;
pub mod planet;
pub mod scientist;
