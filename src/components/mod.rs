pub mod dashboard;
pub mod user_form;
pub mod users;
