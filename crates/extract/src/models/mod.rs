mod chapter;
mod project;

pub use self::chapter::Chapter;
pub use self::project::Project;
