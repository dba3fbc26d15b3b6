mod post;

pub use post::CreatePost;
