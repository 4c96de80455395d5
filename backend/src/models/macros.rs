/// Defines a newtype text identifier and generates:
/// - derives (Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)
/// - transparent serde representation
/// - `Display`
/// - `From<String>`, `From<&str>` and `AsRef<str>`
///
/// Usage:
///   define_text_id!(PlanId);
macro_rules! define_text_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Default,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(v: String) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(v: &str) -> Self {
                $name(v.to_string())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier carries any non-whitespace text.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }
    };
}

/// Defines the premium battery from one table of
/// `Variant => column_name, FamilyVariant, age;` rows and generates:
/// - the `PremiumColumn` enum with `ALL`, `column_name()`, `age()` and `family()`
/// - the `PremiumSet` struct holding one optional cell per column
/// - exhaustive `PremiumSet::get` / `PremiumSet::set` accessors
///
/// Column names only exist as `stringify!` output, so a family/age pair that
/// has no storage column cannot be expressed.
macro_rules! define_premium_columns {
    ($( $variant:ident => $field:ident, $family:ident, $age:literal; )+) => {
        /// One age-banded premium column of the marketplace plan table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PremiumColumn {
            $( $variant, )+
        }

        impl PremiumColumn {
            /// Every premium column, in storage order.
            pub const ALL: &'static [PremiumColumn] = &[ $( PremiumColumn::$variant, )+ ];

            /// Storage column name.
            pub fn column_name(self) -> &'static str {
                match self {
                    $( PremiumColumn::$variant => stringify!($field), )+
                }
            }

            /// Representative age of the rate.
            pub fn age(self) -> u8 {
                match self {
                    $( PremiumColumn::$variant => $age, )+
                }
            }

            /// Family composition the rate applies to.
            pub fn family(self) -> $crate::models::FamilyMakeup {
                match self {
                    $( PremiumColumn::$variant => $crate::models::FamilyMakeup::$family, )+
                }
            }
        }

        impl ::std::fmt::Display for PremiumColumn {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.column_name())
            }
        }

        /// Age-banded premium figures of a plan, one optional cell per column.
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct PremiumSet {
            $(
                #[serde(default)]
                pub $field: Option<$crate::models::DataCell>,
            )+
        }

        impl PremiumSet {
            /// Read the cell stored for `column`.
            pub fn get(&self, column: PremiumColumn) -> Option<&$crate::models::DataCell> {
                match column {
                    $( PremiumColumn::$variant => self.$field.as_ref(), )+
                }
            }

            /// Replace the cell stored for `column`.
            pub fn set(&mut self, column: PremiumColumn, value: Option<$crate::models::DataCell>) {
                match column {
                    $( PremiumColumn::$variant => self.$field = value, )+
                }
            }
        }
    };
}
