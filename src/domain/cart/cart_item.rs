//! Cart line item

use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use serde_json::{Map, Value};
use tracing::debug;

use super::{CartKey, CatalogId, PharmacyName, PrescriptionId};

/// A single orderable line of the aggregated cart.
///
/// `id`, `pharmacy_name` and `prescription_id` form the line's [`CartKey`]. Only the key parts
/// and `quantity` can make a stored line unreadable. A display field (`pharmacyId`, `name`,
/// `price`, `selected`) that does not parse is left in `extra` as it was, like every field the
/// cart does not interpret, and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct CartItem {
    pub id: CatalogId,
    #[serde(skip_serializing_if = "PharmacyName::is_blank")]
    pub pharmacy_name: PharmacyName,
    #[serde(skip_serializing_if = "PrescriptionId::is_blank")]
    pub prescription_id: PrescriptionId,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_quantity() -> u32 {
    1
}

/// Missing, `null` and `0` all mean a quantity of one.
fn parse_quantity(value: Value) -> Result<u32, serde_json::Error> {
    let quantity: Option<u32> = deserialize_option_number_from_string(value)?;
    Ok(quantity.filter(|q| *q > 0).unwrap_or_else(default_quantity))
}

/// A key part: absent means blank, anything unparsable rejects the line.
fn take_key_part<T>(fields: &mut Map<String, Value>, field: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    fields
        .remove(field)
        .map(serde_json::from_value)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// A display field: parsed when it can be, otherwise put back into `fields` untouched.
fn take_display<T>(
    fields: &mut Map<String, Value>,
    field: &str,
    parse: impl FnOnce(&Value) -> Result<Option<T>, serde_json::Error>,
) -> Option<T> {
    let value = fields.remove(field)?;
    match parse(&value) {
        Ok(Some(parsed)) => Some(parsed),
        Ok(None) => {
            fields.insert(field.to_owned(), value);
            None
        }
        Err(e) => {
            debug!("CartItem: keeping {field} = {value} as is. {e}");
            fields.insert(field.to_owned(), value);
            None
        }
    }
}

fn parse_plain<T: DeserializeOwned>(value: &Value) -> Result<Option<T>, serde_json::Error> {
    Option::<T>::deserialize(value)
}

impl TryFrom<Map<String, Value>> for CartItem {
    type Error = serde_json::Error;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_key_part(&mut fields, "id")?;
        let pharmacy_name = take_key_part(&mut fields, "pharmacyName")?;
        let prescription_id = take_key_part(&mut fields, "prescriptionId")?;
        let quantity = match fields.remove("quantity") {
            Some(value) => parse_quantity(value)?,
            None => default_quantity(),
        };
        let pharmacy_id = take_display(&mut fields, "pharmacyId", |value| {
            deserialize_option_number_from_string(value)
        });
        let name = take_display(&mut fields, "name", parse_plain);
        let price = take_display(&mut fields, "price", parse_plain);
        let selected = take_display(&mut fields, "selected", parse_plain);

        Ok(Self {
            id,
            pharmacy_name,
            prescription_id,
            quantity,
            pharmacy_id,
            name,
            price,
            selected,
            extra: fields,
        })
    }
}

impl CartItem {
    pub fn new(id: impl Into<CatalogId>) -> Self {
        Self {
            id: id.into(),
            quantity: default_quantity(),
            ..Default::default()
        }
    }

    pub fn with_pharmacy_name(mut self, pharmacy_name: impl Into<PharmacyName>) -> Self {
        self.pharmacy_name = pharmacy_name.into();
        self
    }

    pub fn with_prescription_id(mut self, prescription_id: impl Into<PrescriptionId>) -> Self {
        self.prescription_id = prescription_id.into();
        self
    }

    pub fn with_pharmacy_id(mut self, pharmacy_id: i64) -> Self {
        self.pharmacy_id = Some(pharmacy_id);
        self.extra.remove("pharmacyId");
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.extra.remove("name");
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self.extra.remove("price");
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self.extra.remove("selected");
        self
    }

    pub fn key(&self) -> CartKey {
        CartKey {
            id: self.id.clone(),
            pharmacy_name: self.pharmacy_name.clone(),
            prescription_id: self.prescription_id.clone(),
        }
    }

    /// Quantity with zero treated as one.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.max(1)
    }

    /// `price × quantity`, or `None` when the line carries no price or the product overflows.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price?
            .checked_mul(Decimal::from(self.effective_quantity()))
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.quantity = self.effective_quantity();
        self
    }
}
