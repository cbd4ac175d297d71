mod mapper_tests;
mod service_tests;
