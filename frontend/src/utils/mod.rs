pub mod browser;
pub mod locale;
