pub mod multipart;

pub use app::{TestApp, make_test_app, make_test_app_with_limit};
pub use multipart::{MultipartPart, multipart_body};
