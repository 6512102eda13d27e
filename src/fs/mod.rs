pub mod remove;
pub mod replace;
pub mod sys;
pub mod tempdir;

pub use remove::{durable_remove, durable_remove_in};
pub use replace::{durable_replace, durable_replace_in};
pub use sys::{invoke, DirHandle};
pub use tempdir::{in_temp_dir, in_temp_dir_at, make_temp_dir, make_temp_dir_in};
