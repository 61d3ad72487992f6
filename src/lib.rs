pub mod annotation;
pub mod cleaning;
pub mod error;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod sampling;
pub mod sources;
