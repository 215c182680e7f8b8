use clap::{Parser, Subcommand, ValueEnum};

/// Aggregated multi-pharmacy cart of one browsing session.
#[derive(Parser, Debug)]
#[command(name = "pharmacy-cart", version, about)]
pub struct Cli {
    /// Session to operate on. Overrides `storage.session` from the configuration.
    #[arg(long, global = true)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the cart, or only the lines of one prescription.
    Show {
        #[arg(long)]
        prescription: Option<String>,
    },
    /// Merge lines into the cart. Each line is a JSON object such as '{"id": 7, "quantity": 2}'.
    Add {
        #[arg(required = true, value_name = "ITEM_JSON")]
        items: Vec<String>,
    },
    /// Replace every line of one prescription at one pharmacy.
    SetScope {
        #[arg(long)]
        prescription: String,
        #[arg(long)]
        pharmacy: Option<String>,
        #[arg(value_name = "ITEM_JSON")]
        items: Vec<String>,
    },
    /// Remove the lines of one prescription. Without a prescription nothing is removed.
    ClearPrescription { prescription: Option<String> },
    /// Remove the whole cart.
    Clear,
    /// Print what checking out a prescription would charge.
    Summary { prescription: String },
    /// Place and pay the order of one prescription.
    Checkout {
        prescription: String,
        #[arg(long, value_enum)]
        payment: PaymentChoice,
        #[arg(long)]
        card_number: Option<String>,
        /// Card expiry as MM/YY.
        #[arg(long)]
        expiry: Option<String>,
        #[arg(long)]
        cvv: Option<String>,
        #[arg(long)]
        cardholder: Option<String>,
    },
    /// Drop everything stored in the session.
    EndSession,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    Cash,
    Card,
}
