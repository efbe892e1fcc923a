mod kobold_client;

pub use kobold_client::*;
