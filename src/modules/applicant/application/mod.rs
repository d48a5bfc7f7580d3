pub mod applicant_use_cases;
pub mod ports;
pub mod service;
