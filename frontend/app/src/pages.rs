pub mod gallery;
pub mod login;
pub mod profile;
pub mod settings;
pub mod signup;
pub mod upload;
