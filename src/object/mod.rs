pub mod errors;
pub mod test_gen;

pub use errors::ObjectError;
pub use test_gen::TestGen;
