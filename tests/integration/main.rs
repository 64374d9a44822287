mod common;
mod health_test;
