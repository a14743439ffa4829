pub mod m202608010001_create_users;
pub mod m202608010002_create_problems;
pub mod m202608010003_create_submissions;
