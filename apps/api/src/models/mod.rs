pub mod locale;
pub mod profile;
pub mod scheme;
