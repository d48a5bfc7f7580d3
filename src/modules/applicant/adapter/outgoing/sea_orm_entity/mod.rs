pub mod applicants;
pub mod skills;
