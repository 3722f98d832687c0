pub mod content;
pub mod discussion;
pub mod interview;
pub mod question;
pub mod trending;
