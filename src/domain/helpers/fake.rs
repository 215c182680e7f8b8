use fake::{Dummy, Fake, Faker, rand::seq::IteratorRandom};
use rust_decimal::Decimal;

use crate::domain::cart::{CartItem, CatalogId};

pub struct Price;

impl Dummy<Price> for Decimal {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Price, rng: &mut R) -> Self {
        let value = (10..1000).choose(rng).unwrap_or(100);
        Decimal::new(value, 2)
    }
}

/// An unscoped OTC line: random catalog id, name, price and a small quantity.
pub struct Medicine;

impl Dummy<Medicine> for CartItem {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Medicine, rng: &mut R) -> Self {
        let id: CatalogId = Faker.fake_with_rng(rng);
        let name: String = fake::faker::lorem::en::Word().fake_with_rng(rng);
        let quantity = (1..5).choose(rng).unwrap_or(1);
        CartItem::new(id)
            .with_name(name)
            .with_price(Price.fake_with_rng(rng))
            .with_quantity(quantity)
    }
}
