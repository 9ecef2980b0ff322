pub mod ballistics;
pub mod error;
pub mod plot;
pub mod report;
pub mod window;
