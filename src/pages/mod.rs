pub mod admin;
pub mod confirm;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
