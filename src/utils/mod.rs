pub mod calendar;
pub mod dates;
pub mod forms;
pub mod password;
pub mod token;
