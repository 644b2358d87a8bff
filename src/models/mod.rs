pub mod article;
pub mod article_list;
pub mod login_form;

pub use article::{Article, ArticleSource};
pub use article_list::ArticleList;
pub use login_form::LoginForm;
