/// Macro for construction of the string identifiers carried by cart lines, using the "new type"
/// pattern. The empty string is the "absent" value: it is the default and it is what a missing,
/// `null` or `false` JSON value deserializes to.
/// Numbers are accepted on input and kept as their decimal string, so `1` and `"1"` are the same id.
#[macro_export]
macro_rules! string_id {
    ($name:ident) => {
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True for the absent value.
            pub fn is_blank(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }

        impl From<Option<&str>> for $name {
            fn from(value: Option<&str>) -> Self {
                $name(value.unwrap_or_default().to_owned())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::domain::helpers::deserialize_loose_string(deserializer).map($name)
            }
        }

        impl fake::Dummy<fake::Faker> for $name {
            fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &fake::Faker, rng: &mut R) -> Self {
                use fake::Fake;
                let value: u32 = (1u32..100_000).fake_with_rng(rng);
                $name(value.to_string())
            }
        }
    };
}
