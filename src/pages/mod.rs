pub mod home;
pub mod package;
pub mod privacy;
