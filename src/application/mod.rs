// Application layer - Use cases over the university repository
pub mod catalog_controller;
pub mod page_generator;
pub mod university_repository;

#[cfg(test)]
pub mod testing;
