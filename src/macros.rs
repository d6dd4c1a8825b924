//! Generators for the two patterns every EMR shape follows: open string enums
//! and value/builder pairs.
//!
//! Field types are given as plain tokens (`String`, `i32`, `Double`,
//! `Vec<Tag>`, `BTreeMap<String, String>`, a shape or an enum name). The helper
//! macros dispatch on those tokens to pick the getter view, the builder method
//! and the display form for each kind. Modules invoking [`model!`] must have
//! every named type, including `BTreeMap`, in scope.

/// Declares an open, string-backed enumeration.
///
/// Each variant maps to one wire string. Any other string is carried through
/// as `Unknown`, preserved exactly.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this crate does not recognise, kept verbatim.
            Unknown($crate::types::UnknownValue),
        }

        impl $name {
            /// Every recognised wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// The wire string of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown($crate::types::UnknownValue(other.to_string())),
                }
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $value => return $name::$variant, )+
                    _ => {}
                }
                $name::Unknown($crate::types::UnknownValue(value))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::traits::OpenEnum for $name {
            fn enum_name() -> &'static str {
                stringify!($name)
            }

            fn known_values() -> &'static [&'static str] {
                Self::VALUES
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                let parsed = $name::from(value);
                if !parsed.is_known() {
                    ::tracing::debug!(
                        event = "UnknownEnumValue",
                        shape = stringify!($name),
                        value = parsed.as_str()
                    );
                }
                Ok(parsed)
            }
        }

        impl ::utoipa::PartialSchema for $name {
            fn schema() -> ::utoipa::openapi::RefOr<::utoipa::openapi::schema::Schema> {
                ::utoipa::openapi::RefOr::T(::utoipa::openapi::schema::Schema::Object(
                    ::utoipa::openapi::schema::ObjectBuilder::new()
                        .schema_type(::utoipa::openapi::schema::Type::String)
                        .description(Some(format!(
                            "Known values: {}. Other values are passed through unchanged.",
                            Self::VALUES.join(", ")
                        )))
                        .build(),
                ))
            }
        }

        impl ::utoipa::ToSchema for $name {
            fn name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(stringify!($name))
            }
        }
    };
}

/// Getter for one field, returning the borrowed view of its kind.
macro_rules! model_getter {
    ($(#[doc = $doc:literal])* $field:ident: String) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
    ($(#[doc = $doc:literal])* $field:ident: Vec<$elem:ident>) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> Option<&[$elem]> {
            self.$field.as_deref()
        }
    };
    ($(#[doc = $doc:literal])* $field:ident: BTreeMap<String, $value:ident>) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> Option<&BTreeMap<String, $value>> {
            self.$field.as_ref()
        }
    };
    ($(#[doc = $doc:literal])* $field:ident: bool) => {
        model_getter!(@copy $(#[doc = $doc])* $field: bool);
    };
    ($(#[doc = $doc:literal])* $field:ident: i32) => {
        model_getter!(@copy $(#[doc = $doc])* $field: i32);
    };
    ($(#[doc = $doc:literal])* $field:ident: i64) => {
        model_getter!(@copy $(#[doc = $doc])* $field: i64);
    };
    ($(#[doc = $doc:literal])* $field:ident: Double) => {
        model_getter!(@copy $(#[doc = $doc])* $field: Double);
    };
    ($(#[doc = $doc:literal])* $field:ident: Timestamp) => {
        model_getter!(@copy $(#[doc = $doc])* $field: Timestamp);
    };
    (@copy $(#[doc = $doc:literal])* $field:ident: $ty:ident) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }
    };
    ($(#[doc = $doc:literal])* $field:ident: $ty:ident) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }
    };
}

/// Builder method for one field: append for lists, insert for maps, overwrite otherwise.
///
/// Lists and maps also name a replacing method, `set_<field>`, which takes the
/// whole collection (or `None` to clear it) and keeps the chain going.
macro_rules! model_setter {
    ($field:ident, $setter:ident: Vec<$elem:ident>) => {
        model_setter!($field: Vec<$elem>);

        /// Replaces the whole list. `None` clears it.
        pub fn $setter(mut self, input: Option<Vec<$elem>>) -> Self {
            self.$field = input;
            self
        }
    };
    ($field:ident, $setter:ident: BTreeMap<String, $value:ident>) => {
        model_setter!($field: BTreeMap<String, $value>);

        /// Replaces the whole map. `None` clears it.
        pub fn $setter(mut self, input: Option<BTreeMap<String, $value>>) -> Self {
            self.$field = input;
            self
        }
    };
    ($field:ident: Vec<$elem:ident>) => {
        pub fn $field(mut self, item: impl Into<$elem>) -> Self {
            self.$field.get_or_insert_with(Vec::new).push(item.into());
            self
        }
    };
    ($field:ident: BTreeMap<String, $value:ident>) => {
        pub fn $field(mut self, key: impl Into<String>, value: impl Into<$value>) -> Self {
            self.$field
                .get_or_insert_with(BTreeMap::new)
                .insert(key.into(), value.into());
            self
        }
    };
    ($field:ident: bool) => {
        model_setter!(@plain $field: bool);
    };
    ($field:ident: i32) => {
        model_setter!(@plain $field: i32);
    };
    ($field:ident: i64) => {
        model_setter!(@plain $field: i64);
    };
    (@plain $field:ident: $ty:ident) => {
        pub fn $field(mut self, input: $ty) -> Self {
            self.$field = Some(input);
            self
        }
    };
    ($field:ident: $ty:ident) => {
        pub fn $field(mut self, input: impl Into<$ty>) -> Self {
            self.$field = Some(input.into());
            self
        }
    };
}

/// Writes one present field value the way `Display` renders its kind.
macro_rules! model_display {
    ($f:ident, $value:ident, Vec<$elem:ident>) => {
        write!(
            $f,
            "[{}]",
            ::itertools::Itertools::join(&mut $value.iter(), ", ")
        )?
    };
    ($f:ident, $value:ident, BTreeMap<String, $inner:ident>) => {
        write!(
            $f,
            "{{{}}}",
            ::itertools::Itertools::join(
                &mut $value.iter().map(|(key, value)| format!("{key}={value}")),
                ", "
            )
        )?
    };
    ($f:ident, $value:ident, $ty:ident) => {
        write!($f, "{}", $value)?
    };
}

/// Declares a shape: an immutable value type with getters, and its builder.
///
/// ```ignore
/// model! {
///     /// A key/value tag.
///     pub struct Tag => TagBuilder {
///         key => Key: String,
///         value => Value: String,
///     }
/// }
/// ```
///
/// A trailing `[...]` after a field type adds attributes to the value
/// type's field only, e.g. `[serde(rename = "SizeInGB")]`. List and map
/// fields name their replacing builder method after the field:
/// `args, set_args => Args: Vec<String>`.
macro_rules! model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[doc = $fdoc:literal])*
                $field:ident $(, $setter:ident)? => $wire:ident: $outer:ident $(<$($inner:ident),+>)? $([$($extra:tt)*])?,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::utoipa::ToSchema,
        )]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[doc = $fdoc])*
                #[serde(skip_serializing_if = "Option::is_none")]
                $(#[$($extra)*])?
                $field: Option<$outer $(<$($inner),+>)?>,
            )*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Move this value back into a builder to derive a modified copy.
            pub fn into_builder(self) -> $builder {
                $builder {
                    $( $field: self.$field, )*
                }
            }

            $(
                model_getter!($(#[doc = $fdoc])* $field: $outer $(<$($inner),+>)?);
            )*
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_assignments, unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("{")?;
                let mut first = true;
                $(
                    if let Some(value) = &self.$field {
                        if !first {
                            f.write_str(",")?;
                        }
                        first = false;
                        write!(f, "{}: ", stringify!($wire))?;
                        model_display!(f, value, $outer $(<$($inner),+>)?);
                    }
                )*
                f.write_str("}")
            }
        }

        impl $crate::traits::Shape for $name {
            fn shape_name() -> &'static str {
                stringify!($name)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        ///
        /// Fields are public: assigning one replaces (or with `None`, clears)
        /// it, including whole lists and maps.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $builder {
            $( pub $field: Option<$outer $(<$($inner),+>)?>, )*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                model_setter!($field $(, $setter)?: $outer $(<$($inner),+>)?);
            )*

            pub fn build(self) -> $name {
                $name {
                    $( $field: self.$field, )*
                }
            }
        }

        impl ::std::convert::From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }

        impl ::std::convert::From<$name> for $builder {
            fn from(value: $name) -> Self {
                value.into_builder()
            }
        }
    };
}
