pub mod layout;
pub mod marketing;
pub mod pages;
pub mod sign_in;
