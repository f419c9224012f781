pub mod audio;
pub mod prepare;
pub mod speaker;
pub mod synthesis;
