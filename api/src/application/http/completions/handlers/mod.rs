pub mod post_completion;
