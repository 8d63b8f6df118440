pub mod m202601100001_create_users;
pub mod m202601100002_create_posts;
pub mod m202601100003_create_comments;
pub mod m202601100004_create_chatbots;
pub mod m202601100005_create_prompts;
