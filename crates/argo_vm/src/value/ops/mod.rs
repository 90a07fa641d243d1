pub mod conversions;
