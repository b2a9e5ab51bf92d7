pub mod assignee;
