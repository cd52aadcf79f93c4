pub use crate::content::Content as ContentEntity;
