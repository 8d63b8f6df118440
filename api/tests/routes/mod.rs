mod auth_test;
mod chatbot_test;
mod comments_test;
mod health_test;
mod posts_test;
mod users_test;
