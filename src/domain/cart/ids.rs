use crate::string_id;

string_id!(CatalogId);
string_id!(PharmacyName);
string_id!(PrescriptionId);

/// Identity of a cart line. Two lines with the same key are the same line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CartKey {
    pub id: CatalogId,
    pub pharmacy_name: PharmacyName,
    pub prescription_id: PrescriptionId,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_and_strings_deserialize_to_the_same_id() {
        let from_number: CatalogId = serde_json::from_value(json!(42)).unwrap();
        let from_string: CatalogId = serde_json::from_value(json!("42")).unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn null_and_false_deserialize_to_blank() {
        let from_null: PharmacyName = serde_json::from_value(json!(null)).unwrap();
        let from_false: PharmacyName = serde_json::from_value(json!(false)).unwrap();
        assert!(from_null.is_blank());
        assert!(from_false.is_blank());
    }

    #[test]
    fn objects_are_rejected() {
        let result: Result<PrescriptionId, _> = serde_json::from_value(json!({"code": "RX1"}));
        assert!(result.is_err());
    }

    #[test]
    fn keys_with_delimiter_characters_do_not_collide() {
        let left = CartKey {
            id: "1".into(),
            pharmacy_name: "A|".into(),
            prescription_id: PrescriptionId::default(),
        };
        let right = CartKey {
            id: "1|".into(),
            pharmacy_name: "A".into(),
            prescription_id: PrescriptionId::default(),
        };
        assert_ne!(left, right);
    }
}
