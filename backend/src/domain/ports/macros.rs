//! Helper macro for declaring port error enums with snake_case constructors.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum StorePortError {
            Unavailable { message: String } => "store unavailable: {message}",
            Capacity { limit: u32 } => "store full at {limit} records",
            Rejected { message: String, limit: u32 } => "rejected: {message} (limit {limit})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StorePortError::unavailable("lock poisoned");
        assert_eq!(err.to_string(), "store unavailable: lock poisoned");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = StorePortError::capacity(42_u32);
        assert_eq!(err.to_string(), "store full at 42 records");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StorePortError::rejected("too many", 42_u32);
        assert_eq!(err.to_string(), "rejected: too many (limit 42)");
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            StorePortError::unavailable("x"),
            StorePortError::Unavailable {
                message: "x".to_owned()
            }
        );
    }
}
