pub mod dataset;
pub mod question;
