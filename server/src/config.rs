//! Command-line configuration for the server binary.

use clap::Parser;

use crate::store::Inventory;

#[derive(Debug, Clone, Parser)]
#[command(name = "inventory-server", version, about = "In-memory inventory store over HTTP")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, default_value = "localhost:4000")]
    pub addr: String,

    /// Start with an empty store instead of the seed items.
    #[arg(long)]
    pub empty: bool,
}

impl Config {
    /// The store this configuration asks for.
    pub fn inventory(&self) -> Inventory {
        if self.empty {
            Inventory::new()
        } else {
            Inventory::seeded()
        }
    }
}
