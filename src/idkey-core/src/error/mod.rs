pub mod encoding;
pub mod encryption;
pub mod generate_key;
pub mod identity_key;
pub mod io;
pub mod marshal;
pub mod structured_file;
