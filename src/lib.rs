pub mod blokus;
pub mod btp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T, E = Error> = anyhow::Result<T, E>;

        pub use std::{
            collections::{BTreeSet, HashMap, HashSet},
            ops::{Add, Sub}
        };
    }
}

pub mod prelude {
    pub use super::blokus::prelude::*;
    pub use super::btp_server::*;
    pub use super::utils::prelude::*;
}
