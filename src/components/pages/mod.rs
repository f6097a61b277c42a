pub mod about;
pub mod analytics;
pub mod clients;
pub mod feedback;
pub mod home;
pub mod notifications;
pub mod profile;
pub mod settings;
pub mod tasks;
pub mod volunteers;
