use crate::core::{data_type::DataType, time_span::TimeSpan, value::Value};
use chrono::NaiveDateTime;

/// A named, typed field in a record's static schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub data_type: DataType,
}

impl FieldDef {
    pub const fn new(name: &'static str, data_type: DataType) -> Self {
        Self { name, data_type }
    }
}

/// Records that expose their fields by name so filters can be built over them.
///
/// `fields` is the static schema used when a filter is built; `field_value`
/// is read for every record the resulting predicate is applied to. Most
/// implementations come from the [`filterable!`](crate::filterable) macro.
pub trait Filterable {
    fn fields() -> &'static [FieldDef];

    fn field_value(&self, name: &str) -> Option<Value>;

    /// Looks a field up in the schema. An exact name wins; otherwise, unless
    /// `case_sensitive` is set, the first name equal ignoring ASCII case.
    fn field(name: &str, case_sensitive: bool) -> Option<&'static FieldDef> {
        let fields = Self::fields();
        let exact = fields.iter().find(|field| field.name == name);
        if exact.is_some() || case_sensitive {
            return exact;
        }
        fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

/// Rust types that can back a `Filterable` field.
pub trait FieldType {
    const DATA_TYPE: DataType;

    fn to_value(&self) -> Value;
}

macro_rules! impl_field_type {
    ($($ty:ty => $data_type:ident, $variant:ident;)*) => {
        $(
            impl FieldType for $ty {
                const DATA_TYPE: DataType = DataType::$data_type;

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }
            }
        )*
    };
}

impl_field_type! {
    i32 => Int, Int;
    i64 => Long, Long;
    f32 => Float, Float;
    f64 => Double, Double;
    bool => Boolean, Boolean;
    String => String, String;
    NaiveDateTime => DateTime, DateTime;
    TimeSpan => TimeSpan, TimeSpan;
    Vec<u8> => Bytes, Bytes;
}

impl<T: FieldType> FieldType for Option<T> {
    const DATA_TYPE: DataType = T::DATA_TYPE;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldType::to_value)
    }
}

/// Implements [`Filterable`] for a struct by listing its filterable fields.
///
/// ```
/// use model::filterable;
///
/// struct User {
///     id: i32,
///     name: String,
///     score: Option<f64>,
/// }
///
/// filterable!(User { id: i32, name: String, score: Option<f64> });
/// ```
#[macro_export]
macro_rules! filterable {
    ($ty:ty { $($field:ident : $field_ty:ty),* $(,)? }) => {
        impl $crate::records::record::Filterable for $ty {
            fn fields() -> &'static [$crate::records::record::FieldDef] {
                const FIELDS: &[$crate::records::record::FieldDef] = &[
                    $(
                        $crate::records::record::FieldDef::new(
                            stringify!($field),
                            <$field_ty as $crate::records::record::FieldType>::DATA_TYPE,
                        ),
                    )*
                ];
                FIELDS
            }

            fn field_value(&self, name: &str) -> Option<$crate::core::value::Value> {
                match name {
                    $(
                        stringify!($field) => Some(
                            <$field_ty as $crate::records::record::FieldType>::to_value(&self.$field),
                        ),
                    )*
                    _ => None,
                }
            }
        }
    };
}
