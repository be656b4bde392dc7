mod download_test;
mod health_test;
mod pages_test;
mod roster_test;
mod upload_result_test;
mod upload_test;
