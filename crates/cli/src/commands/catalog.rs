//! Print the shipping catalog.

use paperbound_checkout::shipping_options;

/// Print every shipping tier with its price and description.
#[allow(clippy::print_stdout)]
pub fn run() {
    for option in shipping_options() {
        println!(
            "{:<10} {:<20} {:>7}  {}",
            option.id,
            option.name,
            option.price.display(),
            option.description
        );
    }
}
