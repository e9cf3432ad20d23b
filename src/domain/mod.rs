// Domain layer - University records and the pure rules over them
pub mod filter;
pub mod logo;
pub mod slug;
pub mod university;
