//! Interactive prompts

use crate::error::Result;
use dialoguer::{Confirm, Input};
use shopping_list_common::{Item, PurchaseInput};

/// Yes/no question, defaulting to no
pub fn confirm(message: &str) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(answer)
}

/// Asks for whichever of quantity and price was not supplied
///
/// Defaults come from the item's last purchase. If the pair is rejected both
/// values are asked again.
pub fn purchase(
    item: &Item,
    quantity: Option<String>,
    price: Option<String>,
) -> Result<(String, String)> {
    let default_quantity = if item.bought_quantity > 0.0 {
        item.bought_quantity
    } else {
        1.0
    };
    let (mut quantity, mut price) = (quantity, price);

    loop {
        let q = match quantity.take() {
            Some(q) => q,
            None => Input::<String>::new()
                .with_prompt(format!("Quantidade de '{}'", item.name))
                .default(default_quantity.to_string())
                .interact_text()?,
        };
        let p = match price.take() {
            Some(p) => p,
            None => Input::<String>::new()
                .with_prompt("Preço por unidade (R$)")
                .default(item.price_per_unit.to_string())
                .interact_text()?,
        };

        match PurchaseInput::parse(&q, &p) {
            Ok(_) => return Ok((q, p)),
            Err(e) => println!("⚠ {}", e),
        }
    }
}
