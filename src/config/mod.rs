pub mod constants;
pub mod numeric;
pub mod params;

pub use numeric::parse_int;
pub use params::Params;
