pub mod answer;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod response;
pub mod submission;
