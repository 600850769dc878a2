pub mod bcb;
